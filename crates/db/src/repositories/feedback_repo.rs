//! Repository for the `feedback` table.

use sqlx::PgPool;

use crate::models::feedback::{FeedbackRecord, NewFeedback};

/// Column list for `feedback` queries.
const COLUMNS: &str = "\
    id, feedback_id, repair_id, rating, comment, was_helpful, created_at";

/// Provides insert access for repair feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Record feedback for a completed repair flow.
    pub async fn insert(
        pool: &PgPool,
        feedback: &NewFeedback,
    ) -> Result<FeedbackRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (feedback_id, repair_id, rating, comment, was_helpful) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackRecord>(&query)
            .bind(feedback.feedback_id)
            .bind(feedback.repair_id)
            .bind(feedback.rating)
            .bind(&feedback.comment)
            .bind(feedback.was_helpful)
            .fetch_one(pool)
            .await
    }
}
