//! Community post and report entity models.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use fixhub_core::types::{DbId, Timestamp};

/// A row from the `community_posts` table. Images are stored as base64
/// strings, matching what clients upload.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityPost {
    pub id: DbId,
    pub post_id: Uuid,
    pub title: String,
    pub description: String,
    pub item_type: String,
    pub before_image: String,
    pub after_image: Option<String>,
    pub repair_steps_used: serde_json::Value,
    pub tips: Option<String>,
    pub user_name: String,
    pub likes: i32,
    pub created_at: Timestamp,
}

/// Insert DTO for a new community post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub post_id: Uuid,
    pub title: String,
    pub description: String,
    pub item_type: String,
    pub before_image: String,
    pub after_image: Option<String>,
    pub repair_steps_used: Vec<String>,
    pub tips: Option<String>,
    pub user_name: String,
}

/// A row from the `post_reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostReport {
    pub id: DbId,
    pub report_id: Uuid,
    pub post_id: Uuid,
    pub reason: String,
    pub details: Option<String>,
    pub reporter_name: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// Insert DTO for a new report.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub report_id: Uuid,
    pub post_id: Uuid,
    pub reason: String,
    pub details: Option<String>,
    pub reporter_name: String,
}
