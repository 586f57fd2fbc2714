//! Repository for the `repair_sessions` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::session::{NewSession, RepairSession};

/// Column list for `repair_sessions` queries.
const COLUMNS: &str = "\
    id, session_id, repair_id, title, notes, progress_percentage, status, \
    item_type, typical_cost, total_minutes, created_at, updated_at";

/// Most recent sessions returned by the list endpoint.
const RECENT_LIMIT: i64 = 100;

/// Provides CRUD operations for saved repair sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Save a session, or update it when the client re-saves the same
    /// `session_id` with new progress.
    pub async fn upsert(pool: &PgPool, session: &NewSession) -> Result<RepairSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO repair_sessions (\
                session_id, repair_id, title, notes, progress_percentage, status, \
                item_type, typical_cost, total_minutes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT ON CONSTRAINT uq_repair_sessions_session_id \
             DO UPDATE SET \
                title = EXCLUDED.title, \
                notes = EXCLUDED.notes, \
                progress_percentage = EXCLUDED.progress_percentage, \
                status = EXCLUDED.status, \
                item_type = EXCLUDED.item_type, \
                typical_cost = EXCLUDED.typical_cost, \
                total_minutes = EXCLUDED.total_minutes, \
                updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RepairSession>(&query)
            .bind(session.session_id)
            .bind(session.repair_id)
            .bind(&session.title)
            .bind(&session.notes)
            .bind(session.progress_percentage)
            .bind(&session.status)
            .bind(&session.item_type)
            .bind(session.typical_cost)
            .bind(session.total_minutes)
            .fetch_one(pool)
            .await
    }

    /// List the most recently touched sessions, newest first.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<RepairSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM repair_sessions ORDER BY updated_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, RepairSession>(&query)
            .bind(RECENT_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Fetch every session, used for insights aggregation.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<RepairSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM repair_sessions ORDER BY updated_at DESC");
        sqlx::query_as::<_, RepairSession>(&query)
            .fetch_all(pool)
            .await
    }

    /// Look up a single session by its public id.
    pub async fn find_by_session_id(
        pool: &PgPool,
        session_id: Uuid,
    ) -> Result<Option<RepairSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM repair_sessions WHERE session_id = $1");
        sqlx::query_as::<_, RepairSession>(&query)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }
}
