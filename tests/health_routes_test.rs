// ABOUTME: Integration tests for the health and readiness endpoints
// ABOUTME: Verifies database reachability reporting and CORS headers on the full router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::create_test_app;
use helpers::axum_test::AxumTestRequest;
use recipe_journal::routes::HealthResponse;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_connected_database() {
    let (router, _) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/health").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.database, "connected");
    assert_eq!(body.service, "recipe-journal-server");
}

#[tokio::test]
async fn test_health_degrades_when_database_closed() {
    let (router, resources) = create_test_app().await.unwrap();
    resources.database.close().await;

    let response = AxumTestRequest::get("/health").send(router).await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "degraded");
    assert_eq!(body.database, "unreachable");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let (router, _) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/ready").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (router, _) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/api/v1/ingredients").send(router).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let (router, _) = create_test_app().await.unwrap();

    let request = Request::builder()
        .uri("/api/v1/recipes")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "*"
    );
}
