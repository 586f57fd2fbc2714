//! Repair feedback entity model.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use fixhub_core::types::{DbId, Timestamp};

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackRecord {
    pub id: DbId,
    pub feedback_id: Uuid,
    pub repair_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub was_helpful: bool,
    pub created_at: Timestamp,
}

/// Insert DTO for submitted feedback.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub feedback_id: Uuid,
    pub repair_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub was_helpful: bool,
}
