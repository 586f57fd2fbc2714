//! Route definitions for the `/sessions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST /  -> save_session   (upsert by session_id)
/// GET  /  -> list_sessions  (newest first, capped at 100)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(sessions::list_sessions).post(sessions::save_session),
    )
}
