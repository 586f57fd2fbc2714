//! Route definitions for the `/insights` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::insights;
use crate::state::AppState;

/// Routes mounted at `/insights`.
///
/// ```text
/// GET /  -> get_insights  (aggregated repair-history summary)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(insights::get_insights))
}
