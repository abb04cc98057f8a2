// ABOUTME: SQLite-backed store for recipes and cooking events
// ABOUTME: Owns the connection pool, schema migration, and per-table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! # Database Management
//!
//! A single `SQLite` pool shared by every request. Each table is reached
//! through a small manager (`RecipesManager`, `EventsManager`) that owns a
//! clone of the pool, mirroring a document store's per-collection API.

mod events;
mod recipes;

pub use events::EventsManager;
pub use recipes::RecipesManager;

use crate::config::DatabaseUrl;
use journal_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Database manager for recipe and event storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a connection pool for the given location
    ///
    /// File databases are created when missing, along with their parent
    /// directory. In-memory databases are pinned to a single long-lived
    /// connection so every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// pool cannot connect
    pub async fn new(url: &DatabaseUrl, max_connections: u32) -> AppResult<Self> {
        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            Self::ensure_parent_dir(url)?;
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let connection_string = match url {
            DatabaseUrl::SQLite { .. } => format!("{}?mode=rwc", url.to_connection_string()),
            DatabaseUrl::Memory => url.to_connection_string(),
        };

        let connect_options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::config_invalid(format!("Invalid DATABASE_URL: {e}")))?
            .create_if_missing(true);

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))?;

        info!("Connected to database at {url}");
        Ok(Self { pool })
    }

    fn ensure_parent_dir(url: &DatabaseUrl) -> AppResult<()> {
        let DatabaseUrl::SQLite { path } = url else {
            return Ok(());
        };

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::config(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
                debug!("Created database directory {}", parent.display());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Recipe table operations
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }

    /// Event table operations
    #[must_use]
    pub fn events(&self) -> EventsManager {
        EventsManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_recipes().await?;
        self.migrate_events().await?;
        info!("Database schema is up to date");
        Ok(())
    }

    async fn migrate_recipes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                ingredients TEXT NOT NULL DEFAULT '[]',
                directions TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        Ok(())
    }

    async fn migrate_events(&self) -> AppResult<()> {
        // No foreign key on recipe_id: events may outlive their recipe
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS events (
                id TEXT PRIMARY KEY,
                recipe_id TEXT NOT NULL,
                date_of_event TEXT NOT NULL,
                notes TEXT,
                rating REAL NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create events table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_events_recipe_id ON events(recipe_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create events index: {e}")))?;

        Ok(())
    }

    /// Verify the store answers a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable
    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database health check failed: {e}")))?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }
}

fn parse_uuid(raw: &str) -> AppResult<uuid::Uuid> {
    uuid::Uuid::parse_str(raw).map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_database_migrates_twice() {
        let database = Database::new(&DatabaseUrl::Memory, 5).await.unwrap();
        database.migrate().await.unwrap();
        database.migrate().await.unwrap();
        database.health_check().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_database_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recipes.db");
        let url = DatabaseUrl::SQLite { path: path.clone() };

        let database = Database::new(&url, 2).await.unwrap();
        database.migrate().await.unwrap();
        database.close().await;

        assert!(path.exists());
    }
}
