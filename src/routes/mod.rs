// ABOUTME: Route module organization for the Recipe Journal HTTP endpoints
// ABOUTME: One route struct per domain, plus the extractors they share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! Route module for the Recipe Journal API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the database managers or the service layer.

/// Cooking event routes
pub mod events;
/// JSON and path extractors with unified rejections
pub mod extractors;
/// Health check and readiness routes
pub mod health;
/// Recipe routes
pub mod recipes;

/// Event route handlers
pub use events::EventRoutes;
/// Shared extractors
pub use extractors::{parse_id, AppJson};
/// Health route handlers
pub use health::{HealthResponse, HealthRoutes};
/// Recipe route handlers
pub use recipes::RecipeRoutes;
