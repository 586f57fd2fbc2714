//! Badge registry and evaluation.
//!
//! Badges are plain data records evaluated through a small set of named
//! criterion kinds, not embedded closures, so the registry is
//! serializable and each criterion is testable in isolation. Evaluation
//! is idempotent and order-independent: the same stats snapshot against
//! the same earned set always yields the same newly-earned list.

use serde::Serialize;

use super::stats::ProgressStats;

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// A stats counter a badge criterion can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCounter {
    CompletedRepairs,
    TotalRepairs,
    HardRepairsCompleted,
    LateNightRepairs,
    EarlyMorningRepairs,
    LongestStreak,
    MoneySaved,
}

impl StatCounter {
    /// Read the counter's value from a stats record. Monetary amounts
    /// are truncated to whole dollars for threshold comparison.
    pub fn value(self, stats: &ProgressStats) -> i64 {
        match self {
            Self::CompletedRepairs => stats.completed_repairs,
            Self::TotalRepairs => stats.total_repairs,
            Self::HardRepairsCompleted => stats.hard_repairs_completed,
            Self::LateNightRepairs => stats.late_night_repairs,
            Self::EarlyMorningRepairs => stats.early_morning_repairs,
            Self::LongestStreak => stats.longest_streak as i64,
            Self::MoneySaved => stats.money_saved as i64,
        }
    }
}

/// How a badge decides it is earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCriterion {
    /// A counter reached a minimum value.
    CountAtLeast { counter: StatCounter, min: i64 },
    /// The fastest tracked repair finished in strictly under `minutes`.
    /// Never satisfied before any repair time has been tracked.
    FastestUnder { minutes: i64 },
    /// The set of distinct tools reached a minimum size.
    UniqueToolsAtLeast { min: usize },
    /// A perfect (100%) running completion rate across at least
    /// `min_repairs` completed repairs.
    PerfectRecord { min_repairs: i64 },
}

impl BadgeCriterion {
    /// Evaluate the criterion against a stats snapshot. Side-effect free.
    pub fn is_met(self, stats: &ProgressStats) -> bool {
        match self {
            Self::CountAtLeast { counter, min } => counter.value(stats) >= min,
            Self::FastestUnder { minutes } => stats
                .fastest_repair_minutes
                .is_some_and(|fastest| fastest < minutes),
            Self::UniqueToolsAtLeast { min } => stats.unique_tools.len() >= min,
            Self::PerfectRecord { min_repairs } => {
                stats.completed_repairs >= min_repairs
                    && (stats.completion_rate - 100.0).abs() < f64::EPSILON
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A badge definition: identifier, display metadata, and its criterion.
#[derive(Debug, Clone, Copy)]
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub criterion: BadgeCriterion,
}

/// The full badge registry. Registration order only affects reporting
/// order, never which badges are earned.
pub const BADGES: &[BadgeDef] = &[
    BadgeDef {
        id: "first_repair",
        name: "First Fix",
        description: "Complete your first repair",
        icon: "trophy",
        criterion: BadgeCriterion::CountAtLeast { counter: StatCounter::TotalRepairs, min: 1 },
    },
    BadgeDef {
        id: "speed_demon",
        name: "Speed Demon",
        description: "Complete a repair in under 1 hour",
        icon: "flash",
        criterion: BadgeCriterion::FastestUnder { minutes: 60 },
    },
    BadgeDef {
        id: "night_owl",
        name: "Night Owl",
        description: "Complete a repair after 10 PM",
        icon: "moon",
        criterion: BadgeCriterion::CountAtLeast { counter: StatCounter::LateNightRepairs, min: 1 },
    },
    BadgeDef {
        id: "early_bird",
        name: "Early Bird",
        description: "Complete a repair before 8 AM",
        icon: "sunny",
        criterion: BadgeCriterion::CountAtLeast {
            counter: StatCounter::EarlyMorningRepairs,
            min: 1,
        },
    },
    BadgeDef {
        id: "streak_master",
        name: "Streak Master",
        description: "Maintain a 7-day activity streak",
        icon: "flame",
        criterion: BadgeCriterion::CountAtLeast { counter: StatCounter::LongestStreak, min: 7 },
    },
    BadgeDef {
        id: "perfectionist",
        name: "Perfectionist",
        description: "100% completion rate on 5+ repairs",
        icon: "star",
        criterion: BadgeCriterion::PerfectRecord { min_repairs: 5 },
    },
    BadgeDef {
        id: "tool_collector",
        name: "Tool Collector",
        description: "Use 20+ different tools across repairs",
        icon: "construct",
        criterion: BadgeCriterion::UniqueToolsAtLeast { min: 20 },
    },
    BadgeDef {
        id: "diy_enthusiast",
        name: "DIY Enthusiast",
        description: "Complete 5 repairs",
        icon: "hammer",
        criterion: BadgeCriterion::CountAtLeast { counter: StatCounter::CompletedRepairs, min: 5 },
    },
    BadgeDef {
        id: "master_fixer",
        name: "Master Fixer",
        description: "Complete 10 repairs",
        icon: "medal",
        criterion: BadgeCriterion::CountAtLeast { counter: StatCounter::CompletedRepairs, min: 10 },
    },
    BadgeDef {
        id: "budget_saver",
        name: "Budget Saver",
        description: "Save over $100",
        icon: "cash",
        criterion: BadgeCriterion::CountAtLeast { counter: StatCounter::MoneySaved, min: 100 },
    },
    BadgeDef {
        id: "hard_mode",
        name: "Hard Mode",
        description: "Complete 3 hard difficulty repairs",
        icon: "warning",
        criterion: BadgeCriterion::CountAtLeast {
            counter: StatCounter::HardRepairsCompleted,
            min: 3,
        },
    },
];

/// Display view of an earned badge for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl From<&BadgeDef> for BadgeView {
    fn from(def: &BadgeDef) -> Self {
        Self { id: def.id, name: def.name, description: def.description, icon: def.icon }
    }
}

/// Badges transitioning from unearned to earned for this stats snapshot.
///
/// Never re-reports an id already present in `already_earned`.
pub fn evaluate_badges(stats: &ProgressStats, already_earned: &[String]) -> Vec<&'static BadgeDef> {
    BADGES
        .iter()
        .filter(|def| !already_earned.iter().any(|id| id == def.id))
        .filter(|def| def.criterion.is_met(stats))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(badges: &[&'static BadgeDef]) -> Vec<&'static str> {
        badges.iter().map(|b| b.id).collect()
    }

    #[test]
    fn registry_ids_are_unique() {
        for (i, a) in BADGES.iter().enumerate() {
            for b in &BADGES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn empty_stats_earn_nothing() {
        assert!(evaluate_badges(&ProgressStats::default(), &[]).is_empty());
    }

    #[test]
    fn first_repair_badge() {
        let stats = ProgressStats { total_repairs: 1, completed_repairs: 1, ..Default::default() };
        assert!(ids(&evaluate_badges(&stats, &[])).contains(&"first_repair"));
    }

    #[test]
    fn already_earned_never_rereported() {
        let stats = ProgressStats { total_repairs: 1, completed_repairs: 1, ..Default::default() };
        let earned = vec!["first_repair".to_string()];
        assert!(!ids(&evaluate_badges(&stats, &earned)).contains(&"first_repair"));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let stats = ProgressStats {
            completed_repairs: 5,
            total_repairs: 5,
            completion_rate: 100.0,
            ..Default::default()
        };
        let first = evaluate_badges(&stats, &[]);
        assert!(!first.is_empty());

        let earned: Vec<String> = first.iter().map(|b| b.id.to_string()).collect();
        assert!(evaluate_badges(&stats, &earned).is_empty());
    }

    #[test]
    fn fastest_under_requires_tracked_time() {
        let untracked = ProgressStats::default();
        assert!(!BadgeCriterion::FastestUnder { minutes: 60 }.is_met(&untracked));

        let slow = ProgressStats { fastest_repair_minutes: Some(60), ..Default::default() };
        assert!(!BadgeCriterion::FastestUnder { minutes: 60 }.is_met(&slow));

        let fast = ProgressStats { fastest_repair_minutes: Some(59), ..Default::default() };
        assert!(BadgeCriterion::FastestUnder { minutes: 60 }.is_met(&fast));
    }

    #[test]
    fn perfect_record_needs_both_conditions() {
        let few = ProgressStats {
            completed_repairs: 4,
            completion_rate: 100.0,
            ..Default::default()
        };
        assert!(!BadgeCriterion::PerfectRecord { min_repairs: 5 }.is_met(&few));

        let imperfect = ProgressStats {
            completed_repairs: 8,
            completion_rate: 95.0,
            ..Default::default()
        };
        assert!(!BadgeCriterion::PerfectRecord { min_repairs: 5 }.is_met(&imperfect));

        let perfect = ProgressStats {
            completed_repairs: 5,
            completion_rate: 100.0,
            ..Default::default()
        };
        assert!(BadgeCriterion::PerfectRecord { min_repairs: 5 }.is_met(&perfect));
    }

    #[test]
    fn unique_tools_threshold() {
        let mut stats = ProgressStats::default();
        for i in 0..20 {
            stats.unique_tools.insert(format!("tool-{i}"));
        }
        assert!(ids(&evaluate_badges(&stats, &[])).contains(&"tool_collector"));
    }

    #[test]
    fn streak_master_reads_longest_streak() {
        let stats = ProgressStats { longest_streak: 7, ..Default::default() };
        assert!(ids(&evaluate_badges(&stats, &[])).contains(&"streak_master"));

        let short = ProgressStats { longest_streak: 6, ..Default::default() };
        assert!(!ids(&evaluate_badges(&short, &[])).contains(&"streak_master"));
    }

    #[test]
    fn money_saved_threshold() {
        let just_under = ProgressStats { money_saved: 99.9, ..Default::default() };
        assert!(!ids(&evaluate_badges(&just_under, &[])).contains(&"budget_saver"));

        let over = ProgressStats { money_saved: 100.0, ..Default::default() };
        assert!(ids(&evaluate_badges(&over, &[])).contains(&"budget_saver"));
    }

    #[test]
    fn repair_count_tiers() {
        let stats = ProgressStats {
            completed_repairs: 10,
            total_repairs: 10,
            ..Default::default()
        };
        let earned = ids(&evaluate_badges(&stats, &[]));
        assert!(earned.contains(&"diy_enthusiast"));
        assert!(earned.contains(&"master_fixer"));
    }
}
