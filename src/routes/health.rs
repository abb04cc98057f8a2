// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness reports the process is up; health also confirms the database answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! Health check routes for service monitoring

use crate::constants::{
    routes::{HEALTH, READY},
    service_names,
};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// `connected` or `unreachable`
    pub database: String,
    /// Time of the check
    pub timestamp: String,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn ready_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(HEALTH, get(Self::handle_health))
            .route(READY, get(ready_handler))
            .with_state(resources)
    }

    /// Handle GET /health - 200 when the store answers, 503 otherwise
    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        let (status, status_code, database) = match resources.database.health_check().await {
            Ok(()) => ("healthy", StatusCode::OK, "connected"),
            Err(e) => {
                warn!(error = %e, "Health check could not reach the database");
                ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unreachable")
            }
        };

        let body = HealthResponse {
            status: status.to_owned(),
            service: service_names::RECIPE_JOURNAL_SERVER.to_owned(),
            version: service_names::SERVER_VERSION.to_owned(),
            database: database.to_owned(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status_code, Json(body)).into_response()
    }
}
