//! Repair session entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use fixhub_core::insights::SessionSnapshot;
use fixhub_core::types::{DbId, Timestamp};

/// A row from the `repair_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RepairSession {
    pub id: DbId,
    pub session_id: Uuid,
    pub repair_id: Uuid,
    pub title: String,
    pub notes: Option<String>,
    pub progress_percentage: i32,
    pub status: String,
    pub item_type: Option<String>,
    pub typical_cost: Option<f64>,
    pub total_minutes: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RepairSession {
    /// Project into the insights aggregation input.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            item_type: self.item_type.clone(),
            completed: self.status == "completed",
            typical_cost: self.typical_cost,
            total_minutes: self.total_minutes,
            updated_at: self.updated_at,
        }
    }
}

/// Insert DTO for saving a session.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    pub session_id: Uuid,
    pub repair_id: Uuid,
    pub title: String,
    pub notes: Option<String>,
    pub progress_percentage: i32,
    pub status: String,
    pub item_type: Option<String>,
    pub typical_cost: Option<f64>,
    pub total_minutes: Option<f64>,
}
