//! Handler for the `/feedback` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use fixhub_db::models::feedback::{FeedbackRecord, NewFeedback};
use fixhub_db::repositories::FeedbackRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for submitting feedback on a repair flow.
#[derive(Debug, Deserialize, Validate)]
pub struct FeedbackRequest {
    pub repair_id: Uuid,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment: Option<String>,
    pub was_helpful: bool,
}

/// POST /api/v1/feedback
///
/// Store rating, comment, and helpfulness for a repair. 201 on success.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<FeedbackRecord>>)> {
    request.validate()?;

    let feedback = NewFeedback {
        feedback_id: Uuid::new_v4(),
        repair_id: request.repair_id,
        rating: request.rating,
        comment: request.comment,
        was_helpful: request.was_helpful,
    };

    let stored = FeedbackRepo::insert(&state.pool, &feedback).await?;
    tracing::info!(repair_id = %request.repair_id, rating = request.rating, "Feedback submitted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}
