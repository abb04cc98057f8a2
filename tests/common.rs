// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, server resources, routers, and sample payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_journal`

use anyhow::Result;
use axum::Router;
use journal_core::models::{CreateEventRequest, CreateRecipeRequest, EventDate, NewIngredient};
use recipe_journal::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    resources::ServerResources,
    server::build_router,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh, migrated in-memory database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new(&DatabaseUrl::Memory, 1).await?;
    database.migrate().await?;
    Ok(database)
}

/// Server resources over a fresh in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let mut config = ServerConfig::default();
    config.database.url = DatabaseUrl::Memory;
    Ok(Arc::new(ServerResources::new(database, Arc::new(config))))
}

/// Full application router plus the resources behind it
pub async fn create_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_server_resources().await?;
    let router = build_router(Arc::clone(&resources));
    Ok((router, resources))
}

/// The cookie recipe used across the end-to-end tests
pub fn cookies_request() -> CreateRecipeRequest {
    CreateRecipeRequest {
        name: "cookies".to_owned(),
        ingredients: vec![NewIngredient::new("flour", 2.0, "cup")],
        directions: vec![
            "preheat oven to 350".to_owned(),
            "mix dry ingredients".to_owned(),
            "fold in chocolate chips".to_owned(),
            "bake 12 minutes".to_owned(),
        ],
    }
}

/// A recipe with just a name
pub fn named_recipe_request(name: &str) -> CreateRecipeRequest {
    CreateRecipeRequest {
        name: name.to_owned(),
        ingredients: Vec::new(),
        directions: Vec::new(),
    }
}

/// An event for `recipe_id` on the given ISO date
pub fn event_request(recipe_id: Uuid, date: &str, rating: f64) -> CreateEventRequest {
    CreateEventRequest {
        recipe_id,
        date_of_event: date.parse::<EventDate>().expect("valid test date"),
        notes: None,
        rating,
    }
}
