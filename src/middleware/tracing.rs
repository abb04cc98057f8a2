// ABOUTME: Request tracing for correlation and structured logging
// ABOUTME: Builds one span per HTTP request carrying method, path, and a request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use axum::body::Body;
use http::Request;
use tracing::Span;
use uuid::Uuid;

/// Header a caller may set to choose the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create a tracing span for an HTTP request
///
/// Uses the caller's `x-request-id` when present, otherwise generates one.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
