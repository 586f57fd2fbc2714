//! Handlers for the `/community` resource.
//!
//! Post creation and listing, likes, content reports, moderation, and
//! the static community guidelines.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fixhub_core::error::CoreError;
use fixhub_core::guidelines::{community_guidelines, Guidelines};
use fixhub_core::moderation::{ModerationAction, ReportReason, ReportStatus};
use fixhub_db::models::community::{CommunityPost, NewPost, NewReport, PostReport};
use fixhub_db::repositories::{CommunityRepo, ReportRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn default_user_name() -> String {
    "Anonymous".to_string()
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// Request body for publishing a post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "item_type must not be empty"))]
    pub item_type: String,
    pub before_image: String,
    pub after_image: Option<String>,
    #[serde(default)]
    pub repair_steps_used: Vec<String>,
    pub tips: Option<String>,
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

/// POST /api/v1/community/posts
///
/// Publish a repair post. Returns the stored post with HTTP 201.
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CommunityPost>>)> {
    request.validate()?;

    let post = NewPost {
        post_id: Uuid::new_v4(),
        title: request.title,
        description: request.description,
        item_type: request.item_type,
        before_image: request.before_image,
        after_image: request.after_image,
        repair_steps_used: request.repair_steps_used,
        tips: request.tips,
        user_name: request.user_name,
    };

    let stored = CommunityRepo::insert_post(&state.pool, &post).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}

/// Query parameters for listing posts.
#[derive(Debug, Deserialize)]
pub struct ListPostsParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/community/posts?limit=N
///
/// List posts for the feed, newest first. Defaults to 50, capped at 100.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> AppResult<Json<DataResponse<Vec<CommunityPost>>>> {
    let limit = params.limit.unwrap_or(50).clamp(1, 100);
    let posts = CommunityRepo::list_posts(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/community/posts/{post_id}/like
///
/// Increment a post's like counter. 404 on an unknown post.
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> AppResult<Json<DataResponse<CommunityPost>>> {
    let post = CommunityRepo::like_post(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: post_id.to_string(),
        }))?;
    Ok(Json(DataResponse { data: post }))
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Request body for reporting a post.
#[derive(Debug, Deserialize)]
pub struct ReportPostRequest {
    pub post_id: Uuid,
    pub reason: String,
    pub details: Option<String>,
    #[serde(default = "default_user_name")]
    pub reporter_name: String,
}

/// POST /api/v1/community/reports
///
/// File a report against a post. Validates the reason vocabulary
/// (400 on unknown reason) and the post's existence (404).
pub async fn report_post(
    State(state): State<AppState>,
    Json(request): Json<ReportPostRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PostReport>>)> {
    let reason = ReportReason::parse(&request.reason)?;

    if CommunityRepo::find_post(&state.pool, request.post_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: request.post_id.to_string(),
        }));
    }

    let report = NewReport {
        report_id: Uuid::new_v4(),
        post_id: request.post_id,
        reason: reason.as_str().to_string(),
        details: request.details,
        reporter_name: request.reporter_name,
    };

    let stored = ReportRepo::insert(&state.pool, &report).await?;
    tracing::info!(post_id = %request.post_id, reason = reason.as_str(), "Post reported");
    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}

/// Query parameters for listing reports.
#[derive(Debug, Deserialize)]
pub struct ListReportsParams {
    pub status: Option<String>,
}

/// GET /api/v1/community/reports?status=pending
///
/// List reports in a given status (default pending), oldest first.
pub async fn list_reports(
    State(state): State<AppState>,
    Query(params): Query<ListReportsParams>,
) -> AppResult<Json<DataResponse<Vec<PostReport>>>> {
    let status = match params.status.as_deref() {
        Some(raw) => ReportStatus::parse(raw)?,
        None => ReportStatus::Pending,
    };
    let reports = ReportRepo::list_by_status(&state.pool, status.as_str()).await?;
    Ok(Json(DataResponse { data: reports }))
}

// ---------------------------------------------------------------------------
// Moderation
// ---------------------------------------------------------------------------

/// Request body for moderating a post.
#[derive(Debug, Deserialize)]
pub struct ModeratePostRequest {
    pub action: String,
}

/// Outcome of a moderation action.
#[derive(Debug, Serialize)]
pub struct ModerationOutcome {
    pub action: &'static str,
    pub post_deleted: bool,
    pub reports_updated: u64,
}

/// PUT /api/v1/community/posts/{post_id}/moderate
///
/// Apply a moderation action (`delete`/`approve`/`ignore`; unknown
/// actions are 400). Delete removes the post and resolves its open
/// reports; the other actions mark them reviewed.
pub async fn moderate_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Json(request): Json<ModeratePostRequest>,
) -> AppResult<Json<DataResponse<ModerationOutcome>>> {
    let action = ModerationAction::parse(&request.action)?;

    let post_deleted = match action {
        ModerationAction::Delete => {
            let deleted = CommunityRepo::delete_post(&state.pool, post_id).await?;
            if !deleted {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Post",
                    id: post_id.to_string(),
                }));
            }
            true
        }
        ModerationAction::Approve | ModerationAction::Ignore => false,
    };

    let new_status = action.resulting_report_status();
    let reports_updated =
        ReportRepo::set_status_for_post(&state.pool, post_id, new_status.as_str()).await?;

    tracing::info!(
        %post_id,
        action = action.as_str(),
        reports_updated,
        "Post moderated"
    );

    Ok(Json(DataResponse {
        data: ModerationOutcome {
            action: action.as_str(),
            post_deleted,
            reports_updated,
        },
    }))
}

// ---------------------------------------------------------------------------
// Guidelines
// ---------------------------------------------------------------------------

/// GET /api/v1/community/guidelines
///
/// Static community guidelines content.
pub async fn get_guidelines() -> Json<DataResponse<Guidelines>> {
    Json(DataResponse {
        data: community_guidelines(),
    })
}
