//! Repository for the `repairs` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::repair::{NewRepair, RepairRecord};

/// Column list for `repairs` queries.
const COLUMNS: &str = "\
    id, repair_id, item_type, damage_description, repair_difficulty, \
    estimated_time, risk_level, confidence_score, stop_and_call_pro, \
    model_number, analysis, diagram_base64, created_at";

/// Provides CRUD operations for analyzed repairs.
pub struct RepairRepo;

impl RepairRepo {
    /// Persist a freshly analyzed repair.
    pub async fn insert(pool: &PgPool, repair: &NewRepair) -> Result<RepairRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO repairs (\
                repair_id, item_type, damage_description, repair_difficulty, \
                estimated_time, risk_level, confidence_score, stop_and_call_pro, \
                model_number, analysis, diagram_base64) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RepairRecord>(&query)
            .bind(repair.repair_id)
            .bind(&repair.item_type)
            .bind(&repair.damage_description)
            .bind(&repair.repair_difficulty)
            .bind(&repair.estimated_time)
            .bind(&repair.risk_level)
            .bind(repair.confidence_score)
            .bind(repair.stop_and_call_pro)
            .bind(&repair.model_number)
            .bind(&repair.analysis)
            .bind(&repair.diagram_base64)
            .fetch_one(pool)
            .await
    }

    /// Look up a repair by its public id.
    pub async fn find_by_repair_id(
        pool: &PgPool,
        repair_id: Uuid,
    ) -> Result<Option<RepairRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM repairs WHERE repair_id = $1");
        sqlx::query_as::<_, RepairRecord>(&query)
            .bind(repair_id)
            .fetch_optional(pool)
            .await
    }
}
