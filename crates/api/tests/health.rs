//! Integration tests for the health endpoint and the middleware stack.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{assert_status_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_ok_and_db_reachable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    let json = assert_status_json(response, StatusCode::OK).await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v2/anything").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Request id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_response_carries_a_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let id = response
        .headers()
        .get("x-request-id")
        .expect("missing x-request-id header")
        .to_str()
        .unwrap();
    // Hyphenated UUID.
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_allows_the_configured_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/sessions")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("missing allow-origin header"),
        "http://localhost:5173"
    );
    let methods = headers
        .get("access-control-allow-methods")
        .expect("missing allow-methods header")
        .to_str()
        .unwrap();
    assert!(methods.contains("GET") && methods.contains("PUT"), "{methods}");
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .expect("missing allow-credentials header"),
        "true"
    );
}
