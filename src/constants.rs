// ABOUTME: System-wide constants and environment defaults for the Recipe Journal API
// ABOUTME: Route prefixes, service names, ports, and database defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

use std::env;

/// Service identity used in logs and the health endpoint
pub mod service_names {
    /// Name reported by logs and `/health`
    pub const RECIPE_JOURNAL_SERVER: &str = "recipe-journal-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Route prefixes and paths
pub mod routes {
    /// Prefix every resource route is mounted under
    pub const API_PREFIX: &str = "/api/v1";
    /// Recipe collection path
    pub const RECIPES: &str = "/recipes";
    /// Single recipe path
    pub const RECIPE_BY_ID: &str = "/recipes/:id";
    /// Event collection path
    pub const EVENTS: &str = "/events";
    /// Single event path
    pub const EVENT_BY_ID: &str = "/events/:id";
    /// Health check, including database reachability
    pub const HEALTH: &str = "/health";
    /// Liveness probe
    pub const READY: &str = "/ready";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 7890;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Default connection pool size for file-backed databases
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
}

/// Environment-based configuration
pub mod env_config {
    use super::{defaults, env};

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> String {
        env::var("HTTP_PORT").unwrap_or_else(|_| defaults::DEFAULT_HTTP_PORT.to_string())
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::DEFAULT_HOST.into())
    }

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DEFAULT_DATABASE_URL.into())
    }

    /// Get pool size from environment or default
    #[must_use]
    pub fn database_max_connections() -> String {
        env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| defaults::DEFAULT_MAX_CONNECTIONS.to_string())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }

    /// Get allowed `CORS` origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into())
    }
}
