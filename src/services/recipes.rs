// ABOUTME: Recipe operations that also read or remove the recipe's events
// ABOUTME: Both halves run concurrently; any failure is reported, nothing is rolled back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use crate::database::Database;
use journal_core::errors::{AppError, AppResult};
use journal_core::models::{Recipe, RecipeWithEvents};
use tracing::{info, warn};
use uuid::Uuid;

/// Load a recipe together with every event that references it
///
/// # Errors
///
/// Returns `ResourceNotFound` when the recipe does not exist, or the first
/// store error from either lookup
pub async fn recipe_with_events(database: &Database, id: Uuid) -> AppResult<RecipeWithEvents> {
    let recipes = database.recipes();
    let events = database.events();

    let (recipe, events) = tokio::try_join!(recipes.find_by_id(id), events.find_by_recipe(id))?;

    let recipe = recipe.ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    Ok(RecipeWithEvents { recipe, events })
}

/// Delete a recipe and every event referencing it
///
/// The two deletes are independent statements that both run to completion.
/// If one fails the other is not undone, and nothing is retried.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the recipe did not exist, or the store
/// error from whichever delete failed (the recipe delete's first)
pub async fn delete_recipe_cascade(database: &Database, id: Uuid) -> AppResult<Recipe> {
    let recipes = database.recipes();
    let events = database.events();

    let remove_events = async {
        events.delete_many_by_recipe(id).await.inspect_err(|e| {
            warn!(recipe_id = %id, error = %e, "Failed to remove events for deleted recipe");
        })
    };

    let (deleted, removed_events) =
        tokio::join!(recipes.find_by_id_and_delete(id), remove_events);
    let (deleted, removed_events) = (deleted?, removed_events?);

    let recipe = deleted.ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

    info!(recipe_id = %id, removed_events, "Deleted recipe");
    Ok(recipe)
}
