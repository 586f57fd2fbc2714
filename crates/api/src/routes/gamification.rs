//! Route definitions for the `/gamification` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gamification;
use crate::state::AppState;

/// Routes mounted at `/gamification`.
///
/// ```text
/// GET  /profile          -> get_profile      (?user_id, lazily created)
/// POST /complete-step    -> complete_step    (?user_id)
/// POST /complete-repair  -> complete_repair  (?user_id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(gamification::get_profile))
        .route("/complete-step", post(gamification::complete_step))
        .route("/complete-repair", post(gamification::complete_repair))
}
