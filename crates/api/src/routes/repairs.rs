//! Route definitions for the `/repairs` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::repairs;
use crate::state::AppState;

/// Routes mounted at `/repairs`.
///
/// ```text
/// POST /analyze       -> analyze        (vision LLM)
/// POST /refine        -> refine         (fail-soft refinement)
/// POST /troubleshoot  -> troubleshoot   (404 on unknown repair)
/// POST /step-details  -> step_details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(repairs::analyze))
        .route("/refine", post(repairs::refine))
        .route("/troubleshoot", post(repairs::troubleshoot))
        .route("/step-details", post(repairs::step_details))
}
