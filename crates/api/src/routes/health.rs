//! Root-level health check, mounted outside `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Liveness plus a database round trip. A failing database degrades
/// the status but still answers 200, so orchestrators can tell "slow
/// dependency" from "dead process".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = fixhub_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
