// ABOUTME: Main library entry point for the Recipe Journal API
// ABOUTME: Recipes, the cooking events logged against them, and the HTTP server that serves both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

#![deny(unsafe_code)]

//! # Recipe Journal
//!
//! A small JSON API for keeping recipes and logging each time one is cooked.
//!
//! ## Architecture
//!
//! - **Models and errors** live in the `journal-core` crate
//! - **Database**: `SQLite` tables for recipes and events, one manager each
//! - **Services**: operations spanning both tables (aggregation, population, cascade delete)
//! - **Routes**: thin axum handlers mounted under `/api/v1`
//! - **Server**: router assembly, CORS, request tracing, graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_journal::config::ServerConfig;
//! use journal_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     recipe_journal::server::run(config).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Route paths, defaults, and service identity
pub mod constants;

/// `SQLite` store and per-table managers
pub mod database;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing layers
pub mod middleware;

/// Shared state handed to every handler
pub mod resources;

/// `HTTP` route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Operations spanning recipes and events
pub mod services;
