// ABOUTME: Shared server resources handed to every route handler as axum state
// ABOUTME: Holds the database handle and the configuration the server was started with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Centralized resource container, created once at startup
pub struct ServerResources {
    /// Store for recipes and events
    pub database: Database,
    /// Configuration in effect
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the long-lived resources
    #[must_use]
    pub const fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self { database, config }
    }
}
