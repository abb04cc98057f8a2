// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides the CORS layer and the per-request span used by the trace layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

/// CORS layer built from the configured origins
pub mod cors;
/// Request spans and request id propagation
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::{create_request_span, REQUEST_ID_HEADER};
