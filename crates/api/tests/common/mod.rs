use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fixhub_ai::{GeminiClient, GeminiConfig};
use fixhub_api::config::ServerConfig;
use fixhub_api::router::build_app_router;
use fixhub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The Gemini client points at a closed local port, so any test that
/// accidentally reaches the AI layer fails fast instead of calling out.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        gemini: GeminiConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
            text_model: "test-text-model".to_string(),
            image_model: "test-image-model".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let ai = Arc::new(GeminiClient::new(config.gemini.clone()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai,
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body to the app.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response status and return the parsed body.
pub async fn assert_status_json(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    body_json(response).await
}
