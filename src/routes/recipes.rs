// ABOUTME: Route handlers for the recipes REST API
// ABOUTME: CRUD over recipes, with event aggregation on read and cascade on delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! Recipe routes
//!
//! Single-recipe reads include every event logged against the recipe, and
//! deleting a recipe removes those events too. Both cross-table operations
//! live in [`crate::services::recipes`].

use super::extractors::{parse_id, AppJson};
use crate::constants::routes::{RECIPES, RECIPE_BY_ID};
use crate::resources::ServerResources;
use crate::services;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use journal_core::errors::AppError;
use journal_core::models::{CreateRecipeRequest, UpdateRecipeRequest};
use std::sync::Arc;
use tracing::info;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(RECIPES, get(Self::handle_list).post(Self::handle_create))
            .route(
                RECIPE_BY_ID,
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /recipes - Create a recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<CreateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let recipe = resources.database.recipes().create(request).await?;

        info!(
            recipe_id = %recipe.id,
            ingredients = recipe.ingredients.len(),
            "Created recipe"
        );
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle GET /recipes - List recipe ids and names
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let summaries = resources.database.recipes().list_summaries().await?;
        Ok((StatusCode::OK, Json(summaries)).into_response())
    }

    /// Handle GET /recipes/:id - Get a recipe with its events
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id, "recipe")?;
        let recipe = services::recipes::recipe_with_events(&resources.database, id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle PATCH /recipes/:id - Merge fields into a recipe
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        AppJson(request): AppJson<UpdateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id, "recipe")?;
        let recipe = resources
            .database
            .recipes()
            .find_by_id_and_update(id, request)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        info!(recipe_id = %id, "Updated recipe");
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle DELETE /recipes/:id - Delete a recipe and its events
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id, "recipe")?;
        let recipe = services::recipes::delete_recipe_cascade(&resources.database, id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }
}
