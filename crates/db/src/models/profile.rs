//! Gamification profile entity model.

use serde::Serialize;
use sqlx::FromRow;

use fixhub_core::progression::{ProgressSnapshot, ProgressStats};
use fixhub_core::types::{DbId, Timestamp};

/// A row from the `gamification_profiles` table.
///
/// `badges_earned` and `stats` are stored as JSONB; use
/// [`badge_ids`](Self::badge_ids) and
/// [`progress_stats`](Self::progress_stats) for the typed views. Level
/// is never stored: it is derived from `total_xp` on every read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GamificationProfile {
    pub id: DbId,
    pub user_id: String,
    pub total_xp: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<Timestamp>,
    pub badges_earned: serde_json::Value,
    pub stats: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GamificationProfile {
    /// Earned badge ids. Malformed entries are skipped.
    pub fn badge_ids(&self) -> Vec<String> {
        self.badges_earned
            .as_array()
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| id.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Typed stats view. Unknown or missing fields take zero defaults.
    pub fn progress_stats(&self) -> ProgressStats {
        serde_json::from_value(self.stats.clone()).unwrap_or_default()
    }

    /// Assemble the pure-engine snapshot for this profile.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total_xp: self.total_xp,
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            last_activity_date: self.last_activity_date,
            badges_earned: self.badge_ids(),
            stats: self.progress_stats(),
        }
    }
}

/// The fields written back after applying a progression action.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub total_xp: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Timestamp,
    pub badges_earned: Vec<String>,
    pub stats: ProgressStats,
}
