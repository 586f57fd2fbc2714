//! Handlers for the `/sessions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use fixhub_db::models::session::{NewSession, RepairSession};
use fixhub_db::repositories::SessionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

fn default_status() -> String {
    "in_progress".to_string()
}

/// Request body for saving a session. Re-sending the same `session_id`
/// updates the stored session in place.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveSessionRequest {
    pub session_id: Option<Uuid>,
    pub repair_id: Uuid,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub notes: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub progress_percentage: i32,
    #[serde(default = "default_status")]
    pub status: String,
    pub item_type: Option<String>,
    pub typical_cost: Option<f64>,
    pub total_minutes: Option<f64>,
}

/// POST /api/v1/sessions
///
/// Save or update a repair session. Returns the stored session with 201.
pub async fn save_session(
    State(state): State<AppState>,
    Json(request): Json<SaveSessionRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<RepairSession>>)> {
    request.validate()?;

    let session = NewSession {
        session_id: request.session_id.unwrap_or_else(Uuid::new_v4),
        repair_id: request.repair_id,
        title: request.title,
        notes: request.notes,
        progress_percentage: request.progress_percentage,
        status: request.status,
        item_type: request.item_type,
        typical_cost: request.typical_cost,
        total_minutes: request.total_minutes,
    };

    let stored = SessionRepo::upsert(&state.pool, &session).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}

/// GET /api/v1/sessions
///
/// List saved sessions, newest first, capped at 100.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<RepairSession>>>> {
    let sessions = SessionRepo::list_recent(&state.pool).await?;
    Ok(Json(DataResponse { data: sessions }))
}
