//! Route definitions for the `/vendors` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::vendors;
use crate::state::AppState;

/// Routes mounted at `/vendors`.
///
/// ```text
/// POST /search  -> search_vendors  (LLM-generated directory)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", post(vendors::search_vendors))
}
