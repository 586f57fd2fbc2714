//! Handler for the `/insights` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use fixhub_core::insights::{compute_insights, InsightsSummary};
use fixhub_db::repositories::SessionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/insights
///
/// Aggregated repair-history insights: totals, money saved, time
/// invested, completion rate, top repair types, recent activity, and
/// achievements from the badge registry. An empty history yields an
/// all-zero summary rather than an error.
pub async fn get_insights(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<InsightsSummary>>> {
    let sessions = SessionRepo::list_all(&state.pool).await?;
    let snapshots: Vec<_> = sessions.iter().map(|s| s.snapshot()).collect();
    let summary = compute_insights(&snapshots, Utc::now());
    Ok(Json(DataResponse { data: summary }))
}
