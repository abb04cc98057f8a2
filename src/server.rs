// ABOUTME: HTTP server assembly and lifecycle for the Recipe Journal API
// ABOUTME: Builds the router, binds the listener, and shuts down cleanly on Ctrl+C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! # Server
//!
//! [`build_router`] is what tests drive directly; [`run`] adds the database,
//! the listener, and signal handling around it.

use crate::config::ServerConfig;
use crate::constants::routes::API_PREFIX;
use crate::database::Database;
use crate::middleware::{create_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{EventRoutes, HealthRoutes, RecipeRoutes};
use axum::Router;
use journal_core::errors::{AppError, AppResult};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// Assemble every route with CORS and request tracing
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(EventRoutes::routes(Arc::clone(&resources)));

    Router::new()
        .nest(API_PREFIX, api)
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(setup_cors(&resources.config))
}

/// Open the database described by `config`, migrating it when enabled
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated
pub async fn open_database(config: &ServerConfig) -> AppResult<Database> {
    let database =
        Database::new(&config.database.url, config.database.max_connections).await?;

    if config.database.auto_migrate {
        database.migrate().await?;
    }

    Ok(database)
}

/// Run the server until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the port cannot be
/// bound, or the server fails while serving
pub async fn run(config: ServerConfig) -> AppResult<()> {
    let config = Arc::new(config);
    let database = open_database(&config).await?;
    let resources = Arc::new(ServerResources::new(database.clone(), Arc::clone(&config)));
    let app = build_router(resources);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {address}: {e}")))?;

    info!("Recipe Journal API listening on http://{address}{API_PREFIX}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    database.close().await;
    info!("Server shut down");
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
