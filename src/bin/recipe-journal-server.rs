// ABOUTME: Server binary for the Recipe Journal HTTP API
// ABOUTME: Loads configuration, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! # Recipe Journal Server Binary
//!
//! Configuration comes from the environment; the flags below override it.

use anyhow::Result;
use clap::Parser;
use recipe_journal::{
    config::{DatabaseUrl, ServerConfig},
    constants::routes::{API_PREFIX, EVENTS, EVENT_BY_ID, HEALTH, READY, RECIPES, RECIPE_BY_ID},
    logging, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-journal-server")]
#[command(about = "Recipe Journal - recipes and the times you cooked them")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database location (e.g. `sqlite:./data/recipes.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    logging::init(&config)?;

    info!("Starting Recipe Journal server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("  {base}{API_PREFIX}{RECIPES}       GET, POST");
    info!("  {base}{API_PREFIX}{RECIPE_BY_ID}   GET, PATCH, DELETE");
    info!("  {base}{API_PREFIX}{EVENTS}        GET, POST");
    info!("  {base}{API_PREFIX}{EVENT_BY_ID}    GET, PATCH, DELETE");
    info!("  {base}{HEALTH}                    GET");
    info!("  {base}{READY}                     GET");
}
