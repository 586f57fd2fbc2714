//! Level and title derivation from cumulative XP.
//!
//! Level is never stored: it is recomputed from `total_xp` against a
//! fixed ascending threshold table, so it can never drift from the
//! authoritative value.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Threshold table
// ---------------------------------------------------------------------------

/// One entry in the level table.
#[derive(Debug, Clone, Copy)]
pub struct LevelThreshold {
    pub level: i32,
    pub min_xp: i64,
    pub title: &'static str,
}

/// Ascending level thresholds. The first entry must start at 0 XP so
/// every non-negative total maps to a level.
pub const LEVEL_THRESHOLDS: &[LevelThreshold] = &[
    LevelThreshold { level: 1, min_xp: 0, title: "Rookie Fixer" },
    LevelThreshold { level: 2, min_xp: 100, title: "Apprentice" },
    LevelThreshold { level: 3, min_xp: 300, title: "Handyman" },
    LevelThreshold { level: 4, min_xp: 600, title: "Expert Technician" },
    LevelThreshold { level: 5, min_xp: 1000, title: "Master Craftsman" },
    LevelThreshold { level: 6, min_xp: 1500, title: "Repair Legend" },
    LevelThreshold { level: 7, min_xp: 2500, title: "Grandmaster" },
];

/// Title reported once there is no next level to progress toward.
pub const MAX_LEVEL_TITLE: &str = "Max Level";

// ---------------------------------------------------------------------------
// Level info
// ---------------------------------------------------------------------------

/// Derived level information for a cumulative XP total.
#[derive(Debug, Clone, Serialize)]
pub struct LevelInfo {
    pub level: i32,
    pub title: &'static str,
    pub current_xp: i64,
    /// XP accumulated past the current level's threshold.
    pub xp_in_level: i64,
    /// XP span between the current and next thresholds; 0 at max level.
    pub xp_for_next_level: i64,
    /// 0–100 progress toward the next threshold, rounded to one decimal.
    /// 100 at max level.
    pub progress_percentage: f64,
    pub next_level_title: &'static str,
}

/// Derive level info from a cumulative XP total.
///
/// Selects the highest threshold whose `min_xp` is at or below
/// `total_xp`. At the top of the table, progress is pinned to 100% and
/// the next title is the [`MAX_LEVEL_TITLE`] sentinel.
pub fn compute_level(total_xp: i64) -> LevelInfo {
    let mut current = &LEVEL_THRESHOLDS[0];
    let mut next: Option<&LevelThreshold> = LEVEL_THRESHOLDS.get(1);

    for (i, threshold) in LEVEL_THRESHOLDS.iter().enumerate() {
        if total_xp >= threshold.min_xp {
            current = threshold;
            next = LEVEL_THRESHOLDS.get(i + 1);
        }
    }

    let xp_in_level = total_xp - current.min_xp;
    let xp_for_next_level = next.map(|n| n.min_xp - current.min_xp).unwrap_or(0);
    let progress_percentage = if xp_for_next_level > 0 {
        let raw = xp_in_level as f64 / xp_for_next_level as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    } else {
        100.0
    };

    LevelInfo {
        level: current.level,
        title: current.title,
        current_xp: total_xp,
        xp_in_level,
        xp_for_next_level,
        progress_percentage,
        next_level_title: next.map(|n| n.title).unwrap_or(MAX_LEVEL_TITLE),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_xp_is_level_one() {
        let info = compute_level(0);
        assert_eq!(info.level, 1);
        assert_eq!(info.title, "Rookie Fixer");
        assert_eq!(info.xp_in_level, 0);
        assert_eq!(info.xp_for_next_level, 100);
        assert!((info.progress_percentage - 0.0).abs() < f64::EPSILON);
        assert_eq!(info.next_level_title, "Apprentice");
    }

    #[test]
    fn exact_threshold_reaches_level() {
        let info = compute_level(100);
        assert_eq!(info.level, 2);
        assert_eq!(info.xp_in_level, 0);
    }

    #[test]
    fn one_below_threshold_stays_on_previous_level() {
        let info = compute_level(99);
        assert_eq!(info.level, 1);
        assert_eq!(info.xp_in_level, 99);
        assert!((info.progress_percentage - 99.0).abs() < 1e-9);
    }

    #[test]
    fn midway_progress_percentage() {
        // Level 2 spans 100..300, so 200 XP is halfway.
        let info = compute_level(200);
        assert_eq!(info.level, 2);
        assert!((info.progress_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn max_level_reports_full_progress() {
        let info = compute_level(2500);
        assert_eq!(info.level, 7);
        assert_eq!(info.title, "Grandmaster");
        assert_eq!(info.xp_for_next_level, 0);
        assert!((info.progress_percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(info.next_level_title, MAX_LEVEL_TITLE);
    }

    #[test]
    fn beyond_max_level_stays_at_max() {
        let info = compute_level(1_000_000);
        assert_eq!(info.level, 7);
        assert!((info.progress_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn level_is_non_decreasing_in_xp() {
        let mut previous = 0;
        for xp in (0..5_000).step_by(7) {
            let level = compute_level(xp).level;
            assert!(level >= previous, "level dropped at {xp} XP");
            previous = level;
        }
    }

    #[test]
    fn repeated_calls_are_stable() {
        let a = compute_level(742);
        let b = compute_level(742);
        assert_eq!(a.level, b.level);
        assert_eq!(a.xp_in_level, b.xp_in_level);
        assert!((a.progress_percentage - b.progress_percentage).abs() < f64::EPSILON);
    }

    #[test]
    fn thresholds_are_strictly_ascending() {
        for pair in LEVEL_THRESHOLDS.windows(2) {
            assert!(pair[0].min_xp < pair[1].min_xp);
            assert!(pair[0].level < pair[1].level);
        }
        assert_eq!(LEVEL_THRESHOLDS[0].min_xp, 0);
    }
}
