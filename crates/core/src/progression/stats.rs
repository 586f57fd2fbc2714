//! Typed per-user counters consumed by badge evaluation.
//!
//! Every counter has a defined zero default, so a missing key in the
//! persisted JSON and a zero value are the same observable state. The
//! `record_*` helpers are the only mutation points.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Start of the late-night window (inclusive), UTC hour.
pub const LATE_NIGHT_FROM_HOUR: u32 = 22;
/// End of the late-night window (exclusive), UTC hour.
pub const LATE_NIGHT_UNTIL_HOUR: u32 = 6;
/// Repairs finished before this UTC hour count as early-morning.
pub const EARLY_MORNING_UNTIL_HOUR: u32 = 8;

/// Per-user activity counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressStats {
    pub steps_completed: i64,
    pub completed_repairs: i64,
    pub total_repairs: i64,
    pub easy_repairs_completed: i64,
    pub medium_repairs_completed: i64,
    pub hard_repairs_completed: i64,
    /// Fastest completed repair in minutes; `None` until the first
    /// completion with a tracked time.
    pub fastest_repair_minutes: Option<i64>,
    pub late_night_repairs: i64,
    pub early_morning_repairs: i64,
    /// Estimated dollars saved by repairing instead of replacing.
    pub money_saved: f64,
    /// Running mean completion percentage across completed repairs.
    pub completion_rate: f64,
    /// Longest daily activity streak ever reached.
    pub longest_streak: i32,
    /// Distinct tool names used across all repairs.
    pub unique_tools: BTreeSet<String>,
}

/// Record a completed repair step.
pub fn record_step_completion(stats: &mut ProgressStats) {
    stats.steps_completed += 1;
}

/// Record a completed repair.
///
/// `difficulty` is `None` when the client sent an unrecognized tier; the
/// repair still counts, it just increments no per-difficulty counter.
/// `completed_hour` is the UTC hour of completion, for the night-owl and
/// early-bird counters. The completion rate is maintained as an
/// incremental mean over completed repairs.
pub fn record_repair_completion(
    stats: &mut ProgressStats,
    difficulty: Option<Difficulty>,
    time_taken_minutes: i64,
    completion_percentage: i64,
    completed_hour: u32,
    tools_used: &[String],
) {
    stats.completed_repairs += 1;
    stats.total_repairs += 1;

    match difficulty {
        Some(Difficulty::Easy) => stats.easy_repairs_completed += 1,
        Some(Difficulty::Medium) => stats.medium_repairs_completed += 1,
        Some(Difficulty::Hard) => stats.hard_repairs_completed += 1,
        None => {}
    }

    stats.fastest_repair_minutes = Some(match stats.fastest_repair_minutes {
        Some(fastest) => fastest.min(time_taken_minutes),
        None => time_taken_minutes,
    });

    if completed_hour >= LATE_NIGHT_FROM_HOUR || completed_hour < LATE_NIGHT_UNTIL_HOUR {
        stats.late_night_repairs += 1;
    }
    if completed_hour < EARLY_MORNING_UNTIL_HOUR {
        stats.early_morning_repairs += 1;
    }

    // Incremental mean: new = old + (value - old) / count.
    let count = stats.completed_repairs as f64;
    stats.completion_rate += (completion_percentage as f64 - stats.completion_rate) / count;

    for tool in tools_used {
        stats.unique_tools.insert(tool.clone());
    }
}

/// Record money saved by a completed repair.
pub fn record_money_saved(stats: &mut ProgressStats, amount: f64) {
    if amount > 0.0 {
        stats.money_saved += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zeros() {
        let stats = ProgressStats::default();
        assert_eq!(stats.completed_repairs, 0);
        assert_eq!(stats.fastest_repair_minutes, None);
        assert!(stats.unique_tools.is_empty());
        assert!((stats.completion_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_json_keys_deserialize_to_zero() {
        let stats: ProgressStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, ProgressStats::default());
    }

    #[test]
    fn partial_json_keeps_known_fields() {
        let stats: ProgressStats =
            serde_json::from_str(r#"{"completed_repairs": 3, "money_saved": 42.5}"#).unwrap();
        assert_eq!(stats.completed_repairs, 3);
        assert!((stats.money_saved - 42.5).abs() < f64::EPSILON);
        assert_eq!(stats.steps_completed, 0);
    }

    #[test]
    fn step_completion_increments() {
        let mut stats = ProgressStats::default();
        record_step_completion(&mut stats);
        record_step_completion(&mut stats);
        assert_eq!(stats.steps_completed, 2);
    }

    #[test]
    fn repair_completion_counts_difficulty() {
        let mut stats = ProgressStats::default();
        record_repair_completion(&mut stats, Some(Difficulty::Hard), 90, 100, 12, &[]);
        assert_eq!(stats.completed_repairs, 1);
        assert_eq!(stats.total_repairs, 1);
        assert_eq!(stats.hard_repairs_completed, 1);
        assert_eq!(stats.easy_repairs_completed, 0);
    }

    #[test]
    fn unknown_difficulty_still_counts_repair() {
        let mut stats = ProgressStats::default();
        record_repair_completion(&mut stats, None, 90, 100, 12, &[]);
        assert_eq!(stats.completed_repairs, 1);
        assert_eq!(stats.easy_repairs_completed, 0);
        assert_eq!(stats.medium_repairs_completed, 0);
        assert_eq!(stats.hard_repairs_completed, 0);
    }

    #[test]
    fn fastest_repair_keeps_minimum() {
        let mut stats = ProgressStats::default();
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 50, 100, 12, &[]);
        assert_eq!(stats.fastest_repair_minutes, Some(50));
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 80, 100, 12, &[]);
        assert_eq!(stats.fastest_repair_minutes, Some(50));
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 20, 100, 12, &[]);
        assert_eq!(stats.fastest_repair_minutes, Some(20));
    }

    #[test]
    fn time_of_day_windows() {
        let mut stats = ProgressStats::default();
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 100, 23, &[]);
        assert_eq!(stats.late_night_repairs, 1);
        assert_eq!(stats.early_morning_repairs, 0);

        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 100, 5, &[]);
        // 05:00 is both late-night (before 06) and early-morning (before 08).
        assert_eq!(stats.late_night_repairs, 2);
        assert_eq!(stats.early_morning_repairs, 1);

        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 100, 7, &[]);
        assert_eq!(stats.late_night_repairs, 2);
        assert_eq!(stats.early_morning_repairs, 2);

        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 100, 12, &[]);
        assert_eq!(stats.late_night_repairs, 2);
        assert_eq!(stats.early_morning_repairs, 2);
    }

    #[test]
    fn completion_rate_is_running_mean() {
        let mut stats = ProgressStats::default();
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 100, 12, &[]);
        assert!((stats.completion_rate - 100.0).abs() < 1e-9);
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 50, 12, &[]);
        assert!((stats.completion_rate - 75.0).abs() < 1e-9);
    }

    #[test]
    fn unique_tools_deduplicate() {
        let mut stats = ProgressStats::default();
        let tools = vec!["screwdriver".to_string(), "pliers".to_string()];
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 100, 12, &tools);
        record_repair_completion(&mut stats, Some(Difficulty::Easy), 30, 100, 12, &tools);
        assert_eq!(stats.unique_tools.len(), 2);
    }

    #[test]
    fn money_saved_ignores_non_positive() {
        let mut stats = ProgressStats::default();
        record_money_saved(&mut stats, 55.0);
        record_money_saved(&mut stats, -10.0);
        record_money_saved(&mut stats, 0.0);
        assert!((stats.money_saved - 55.0).abs() < f64::EPSILON);
    }
}
