// ABOUTME: Route handlers for the cooking events REST API
// ABOUTME: CRUD over events; single reads populate the recipe and add day/month/year
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use super::extractors::{parse_id, AppJson};
use crate::constants::routes::{EVENTS, EVENT_BY_ID};
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
use journal_core::models::{CreateEventRequest, UpdateEventRequest};
use std::sync::Arc;
use tracing::info;

/// Event routes implementation
pub struct EventRoutes;

impl EventRoutes {
    /// Create all event routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(EVENTS, get(Self::handle_list).post(Self::handle_create))
            .route(
                EVENT_BY_ID,
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /events - Log a cooking event
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<CreateEventRequest>,
    ) -> Result<Response, AppError> {
        let event = resources.database.events().create(request).await?;

        info!(event_id = %event.id, recipe_id = %event.recipe_id, "Logged event");
        Ok((StatusCode::OK, Json(event)).into_response())
    }

    /// Handle GET /events - List every event
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let events = resources.database.events().list().await?;
        Ok((StatusCode::OK, Json(events)).into_response())
    }

    /// Handle GET /events/:id - Get an event with its recipe and calendar breakdown
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id, "event")?;
        let detail = services::events::event_detail(&resources.database, id).await?;
        Ok((StatusCode::OK, Json(detail)).into_response())
    }

    /// Handle PATCH /events/:id - Merge fields into an event
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        AppJson(request): AppJson<UpdateEventRequest>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id, "event")?;
        let event = resources
            .database
            .events()
            .find_by_id_and_update(id, request)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id}")))?;

        info!(event_id = %id, "Updated event");
        Ok((StatusCode::OK, Json(event)).into_response())
    }

    /// Handle DELETE /events/:id - Delete an event
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id, "event")?;
        let event = resources
            .database
            .events()
            .find_by_id_and_delete(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id}")))?;

        info!(event_id = %id, "Deleted event");
        Ok((StatusCode::OK, Json(event)).into_response())
    }
}
