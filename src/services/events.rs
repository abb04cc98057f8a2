// ABOUTME: Event read model combining the event with its recipe
// ABOUTME: A dangling recipe reference populates as null rather than failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use crate::database::Database;
use journal_core::errors::{AppError, AppResult};
use journal_core::models::EventDetail;
use uuid::Uuid;

/// Load an event with its recipe populated and its date broken down
///
/// # Errors
///
/// Returns `ResourceNotFound` when the event does not exist, or a store
/// error from either lookup
pub async fn event_detail(database: &Database, id: Uuid) -> AppResult<EventDetail> {
    let event = database
        .events()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {id}")))?;

    let recipe = database.recipes().find_by_id(event.recipe_id).await?;

    Ok(EventDetail::populate(event, recipe))
}
