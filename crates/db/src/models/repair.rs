//! Repair analysis entity model.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use fixhub_core::types::{DbId, Timestamp};

/// A row from the `repairs` table. `analysis` holds the full parsed
/// model reply (steps, tools, parts, safety tips, estimates) as JSONB.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RepairRecord {
    pub id: DbId,
    pub repair_id: Uuid,
    pub item_type: String,
    pub damage_description: String,
    pub repair_difficulty: String,
    pub estimated_time: String,
    pub risk_level: String,
    pub confidence_score: i32,
    pub stop_and_call_pro: bool,
    pub model_number: Option<String>,
    pub analysis: serde_json::Value,
    pub diagram_base64: Option<String>,
    pub created_at: Timestamp,
}

/// Insert DTO for a freshly analyzed repair.
#[derive(Debug, Clone)]
pub struct NewRepair {
    pub repair_id: Uuid,
    pub item_type: String,
    pub damage_description: String,
    pub repair_difficulty: String,
    pub estimated_time: String,
    pub risk_level: String,
    pub confidence_score: i32,
    pub stop_and_call_pro: bool,
    pub model_number: Option<String>,
    pub analysis: serde_json::Value,
    pub diagram_base64: Option<String>,
}
