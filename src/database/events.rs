// ABOUTME: Database operations for cooking events
// ABOUTME: CRUD by id plus lookup and bulk removal by recipe reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use super::parse_uuid;
use chrono::Utc;
use journal_core::errors::{AppError, AppResult};
use journal_core::models::{CreateEventRequest, Event, EventDate, UpdateEventRequest};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

const EVENT_COLUMNS: &str = "id, recipe_id, date_of_event, notes, rating";

/// Event database operations manager
pub struct EventsManager {
    pool: SqlitePool,
}

impl EventsManager {
    /// Create a new events manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an event; the referenced recipe is not checked
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(&self, request: CreateEventRequest) -> AppResult<Event> {
        let event = Event::from_request(request);
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO events (id, recipe_id, date_of_event, notes, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ",
        )
        .bind(event.id.to_string())
        .bind(event.recipe_id.to_string())
        .bind(event.date_of_event.to_iso_string())
        .bind(&event.notes)
        .bind(event.rating)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create event: {e}")))?;

        Ok(event)
    }

    /// Every event, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self) -> AppResult<Vec<Event>> {
        let rows = sqlx::query(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list events: {e}")))?;

        rows.iter().map(row_to_event).collect()
    }

    /// Fetch an event by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        let row = sqlx::query(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get event: {e}")))?;

        row.map(|r| row_to_event(&r)).transpose()
    }

    /// Every event referencing a recipe, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_by_recipe(&self, recipe_id: Uuid) -> AppResult<Vec<Event>> {
        let rows = sqlx::query(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE recipe_id = $1 ORDER BY rowid"
        ))
        .bind(recipe_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list events for recipe: {e}")))?;

        rows.iter().map(row_to_event).collect()
    }

    /// Merge the supplied fields into a stored event and return the result
    ///
    /// Omitted fields keep their stored value. Notes supplied as `null` are
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn find_by_id_and_update(
        &self,
        id: Uuid,
        request: UpdateEventRequest,
    ) -> AppResult<Option<Event>> {
        let notes_supplied = request.notes.is_some();

        let row = sqlx::query(&format!(
            r"
            UPDATE events SET
                recipe_id = COALESCE($1, recipe_id),
                date_of_event = COALESCE($2, date_of_event),
                notes = CASE WHEN $3 THEN $4 ELSE notes END,
                rating = COALESCE($5, rating),
                updated_at = $6
            WHERE id = $7
            RETURNING {EVENT_COLUMNS}
            "
        ))
        .bind(request.recipe_id.map(|recipe_id| recipe_id.to_string()))
        .bind(request.date_of_event.map(|date| date.to_iso_string()))
        .bind(notes_supplied)
        .bind(request.notes.flatten())
        .bind(request.rating)
        .bind(Utc::now().to_rfc3339())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update event: {e}")))?;

        row.map(|r| row_to_event(&r)).transpose()
    }

    /// Remove an event and return it as it was stored
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn find_by_id_and_delete(&self, id: Uuid) -> AppResult<Option<Event>> {
        let row = sqlx::query(&format!(
            "DELETE FROM events WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete event: {e}")))?;

        row.map(|r| row_to_event(&r)).transpose()
    }

    /// Remove every event referencing a recipe, returning how many went
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_many_by_recipe(&self, recipe_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM events WHERE recipe_id = $1")
            .bind(recipe_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete events for recipe: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn row_to_event(row: &SqliteRow) -> AppResult<Event> {
    let id_str: String = row.get("id");
    let recipe_id_str: String = row.get("recipe_id");
    let date_str: String = row.get("date_of_event");

    let date_of_event: EventDate = date_str
        .parse()
        .map_err(|e| AppError::internal(format!("Corrupt stored event date: {e}")))?;

    Ok(Event {
        id: parse_uuid(&id_str)?,
        recipe_id: parse_uuid(&recipe_id_str)?,
        date_of_event,
        notes: row.get("notes"),
        rating: row.get("rating"),
    })
}
