//! Repository for the `post_reports` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::community::{NewReport, PostReport};

/// Column list for `post_reports` queries.
const COLUMNS: &str = "\
    id, report_id, post_id, reason, details, reporter_name, status, created_at";

/// Provides CRUD operations for content reports.
pub struct ReportRepo;

impl ReportRepo {
    /// File a report against a post.
    pub async fn insert(pool: &PgPool, report: &NewReport) -> Result<PostReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO post_reports (report_id, post_id, reason, details, reporter_name) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PostReport>(&query)
            .bind(report.report_id)
            .bind(report.post_id)
            .bind(&report.reason)
            .bind(&report.details)
            .bind(&report.reporter_name)
            .fetch_one(pool)
            .await
    }

    /// List reports in a given status, oldest first so moderators work
    /// through the backlog in order.
    pub async fn list_by_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<PostReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM post_reports WHERE status = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, PostReport>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Move every open report for a post into the given status.
    /// Returns the number of reports updated.
    pub async fn set_status_for_post(
        pool: &PgPool,
        post_id: Uuid,
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE post_reports SET status = $2 WHERE post_id = $1 AND status = 'pending'",
        )
        .bind(post_id)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
