//! Aggregated repair-history insights.
//!
//! Pure summation over session snapshots: totals, money saved, time
//! invested, completion rate, most common repair types, recent activity,
//! and achievements derived from the canonical badge registry.

use chrono::Duration;
use serde::Serialize;

use crate::progression::{evaluate_badges, BadgeView, ProgressStats};
use crate::types::Timestamp;

/// Days of history counted as "recent" activity.
pub const RECENT_ACTIVITY_DAYS: i64 = 30;
/// Number of most-common repair types reported.
pub const TOP_REPAIR_TYPES: usize = 3;

/// The slice of a stored session the aggregation needs.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub item_type: Option<String>,
    pub completed: bool,
    /// Typical cost estimate in dollars, when the analysis carried one.
    pub typical_cost: Option<f64>,
    /// Total estimated time in minutes, when the analysis carried one.
    pub total_minutes: Option<f64>,
    pub updated_at: Timestamp,
}

/// One entry of the most-common-repairs ranking.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RepairTypeCount {
    #[serde(rename = "type")]
    pub item_type: String,
    pub count: i64,
}

/// Aggregated insights over a user's repair history.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsSummary {
    pub total_repairs: i64,
    pub completed_repairs: i64,
    /// Rounded to cents.
    pub money_saved: f64,
    /// Whole minutes.
    pub time_invested: f64,
    /// Percentage, rounded to one decimal.
    pub completion_rate: f64,
    pub most_common_repairs: Vec<RepairTypeCount>,
    /// Sessions updated within the last [`RECENT_ACTIVITY_DAYS`] days.
    pub recent_activity: i64,
    pub achievements: Vec<BadgeView>,
    pub currency: &'static str,
}

/// Compute insights over the full session history. An empty history
/// yields an all-zero summary, never an error.
pub fn compute_insights(sessions: &[SessionSnapshot], now: Timestamp) -> InsightsSummary {
    let total_repairs = sessions.len() as i64;
    let completed_repairs = sessions.iter().filter(|s| s.completed).count() as i64;

    let money_saved: f64 = sessions.iter().filter_map(|s| s.typical_cost).sum();
    let time_invested: f64 = sessions.iter().filter_map(|s| s.total_minutes).sum();

    let completion_rate = if total_repairs > 0 {
        completed_repairs as f64 / total_repairs as f64 * 100.0
    } else {
        0.0
    };

    let mut counts: Vec<RepairTypeCount> = Vec::new();
    for session in sessions {
        let Some(item_type) = session.item_type.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|c| c.item_type == item_type) {
            Some(entry) => entry.count += 1,
            None => counts.push(RepairTypeCount { item_type: item_type.to_string(), count: 1 }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.item_type.cmp(&b.item_type)));
    counts.truncate(TOP_REPAIR_TYPES);

    let cutoff = now - Duration::days(RECENT_ACTIVITY_DAYS);
    let recent_activity = sessions.iter().filter(|s| s.updated_at > cutoff).count() as i64;

    // Achievements come from the single canonical badge registry, fed
    // with a stats record built from the history aggregates.
    let stats = ProgressStats {
        total_repairs,
        completed_repairs,
        money_saved,
        completion_rate,
        ..Default::default()
    };
    let achievements = evaluate_badges(&stats, &[]).into_iter().map(BadgeView::from).collect();

    InsightsSummary {
        total_repairs,
        completed_repairs,
        money_saved: (money_saved * 100.0).round() / 100.0,
        time_invested: time_invested.round(),
        completion_rate: (completion_rate * 10.0).round() / 10.0,
        most_common_repairs: counts,
        recent_activity,
        achievements,
        currency: "USD",
    }
}
