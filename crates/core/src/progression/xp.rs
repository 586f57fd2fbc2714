//! XP award table and per-action reward computation.
//!
//! Base XP comes from a static `{action key -> base XP}` table. Bonuses
//! are additive and evaluated independently, so a single action can fire
//! several at once. Unknown action keys award 0 base XP rather than
//! erroring: XP accounting must never be the reason a user-facing action
//! fails.

use serde::Serialize;

use super::Difficulty;

// ---------------------------------------------------------------------------
// Reward table
// ---------------------------------------------------------------------------

/// Base XP per action key. Keys follow the `complete_{difficulty}_repair`
/// convention for repair completion so the speed bonus can recognize
/// repair actions by shape.
pub const XP_REWARDS: &[(&str, i64)] = &[
    ("complete_step", 10),
    ("complete_easy_repair", 50),
    ("complete_medium_repair", 100),
    ("complete_hard_repair", 200),
    ("daily_login", 5),
    ("share_repair", 20),
];

/// Bonus XP for completing a repair in under [`SPEED_BONUS_MAX_MINUTES`].
pub const SPEED_BONUS_XP: i64 = 50;
/// Bonus XP for finishing with every step completed.
pub const PERFECT_COMPLETION_XP: i64 = 25;
/// Bonus XP for the user's very first completed repair.
pub const FIRST_REPAIR_XP: i64 = 30;

/// Repairs finished in strictly less than this many minutes earn the
/// speed bonus.
pub const SPEED_BONUS_MAX_MINUTES: i64 = 60;

/// Look up base XP for an action key. Unknown keys award 0.
pub fn base_xp(action_key: &str) -> i64 {
    XP_REWARDS
        .iter()
        .find(|(key, _)| *key == action_key)
        .map(|(_, xp)| *xp)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A progression-relevant action completed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpAction {
    /// A single repair step was finished.
    CompleteStep,
    /// An entire repair was finished at the given difficulty.
    CompleteRepair(Difficulty),
    /// The user opened the app today.
    DailyLogin,
    /// The user shared a repair with the community.
    ShareRepair,
}

impl XpAction {
    /// The action's key in the [`XP_REWARDS`] table.
    pub fn key(self) -> String {
        match self {
            Self::CompleteStep => "complete_step".to_string(),
            Self::CompleteRepair(difficulty) => {
                format!("complete_{}_repair", difficulty.as_str())
            }
            Self::DailyLogin => "daily_login".to_string(),
            Self::ShareRepair => "share_repair".to_string(),
        }
    }
}

/// Optional context for bonus evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionDetails {
    /// Wall-clock minutes the repair took, if tracked.
    pub time_taken_minutes: Option<i64>,
    /// Percentage of steps completed, if tracked.
    pub completion_percentage: Option<i64>,
    /// Whether this is the user's first completed repair.
    pub is_first_repair: bool,
}

// ---------------------------------------------------------------------------
// Reward
// ---------------------------------------------------------------------------

/// XP granted for one action, broken into base and bonus components.
#[derive(Debug, Clone, Serialize)]
pub struct XpReward {
    pub base_xp: i64,
    pub bonus_xp: i64,
    pub total_xp: i64,
    /// Human-readable descriptions of which bonuses fired, for UI display.
    pub bonus_reasons: Vec<String>,
}

/// Compute the XP reward for an action key.
///
/// Bonuses are independent and additive:
/// - speed bonus, when the action is a repair completion
///   (`complete_*_repair`) and the tracked time is under
///   [`SPEED_BONUS_MAX_MINUTES`];
/// - perfect-completion bonus, when completion is exactly 100%;
/// - first-repair bonus, when flagged.
pub fn award_xp(action_key: &str, details: &ActionDetails) -> XpReward {
    let base = base_xp(action_key);
    let mut bonus = 0;
    let mut reasons = Vec::new();

    let is_repair_completion =
        action_key.starts_with("complete_") && action_key.ends_with("_repair");
    if is_repair_completion {
        if let Some(minutes) = details.time_taken_minutes {
            if minutes < SPEED_BONUS_MAX_MINUTES {
                bonus += SPEED_BONUS_XP;
                reasons.push("Speed Demon! (under 1 hour)".to_string());
            }
        }
    }

    if details.completion_percentage == Some(100) {
        bonus += PERFECT_COMPLETION_XP;
        reasons.push("Perfect Completion!".to_string());
    }

    if details.is_first_repair {
        bonus += FIRST_REPAIR_XP;
        reasons.push("First Repair Bonus!".to_string());
    }

    XpReward {
        base_xp: base,
        bonus_xp: bonus,
        total_xp: base + bonus,
        bonus_reasons: reasons,
    }
}

/// Convenience wrapper over [`award_xp`] for a typed action.
pub fn award_for(action: XpAction, details: &ActionDetails) -> XpReward {
    award_xp(&action.key(), details)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- base table lookups --

    #[test]
    fn base_xp_known_actions() {
        assert_eq!(base_xp("complete_step"), 10);
        assert_eq!(base_xp("complete_easy_repair"), 50);
        assert_eq!(base_xp("complete_medium_repair"), 100);
        assert_eq!(base_xp("complete_hard_repair"), 200);
    }

    #[test]
    fn base_xp_unknown_action_is_zero() {
        assert_eq!(base_xp("paint_the_fence"), 0);
        assert_eq!(base_xp(""), 0);
    }

    #[test]
    fn harder_tiers_award_strictly_more() {
        assert!(base_xp("complete_easy_repair") < base_xp("complete_medium_repair"));
        assert!(base_xp("complete_medium_repair") < base_xp("complete_hard_repair"));
    }

    #[test]
    fn action_keys_match_table() {
        assert_eq!(XpAction::CompleteStep.key(), "complete_step");
        assert_eq!(
            XpAction::CompleteRepair(Difficulty::Hard).key(),
            "complete_hard_repair"
        );
        assert_eq!(XpAction::DailyLogin.key(), "daily_login");
        assert_eq!(XpAction::ShareRepair.key(), "share_repair");
    }

    // -- bonuses --

    #[test]
    fn no_details_means_no_bonus() {
        let reward = award_xp("complete_step", &ActionDetails::default());
        assert_eq!(reward.base_xp, 10);
        assert_eq!(reward.bonus_xp, 0);
        assert_eq!(reward.total_xp, 10);
        assert!(reward.bonus_reasons.is_empty());
    }

    #[test]
    fn speed_bonus_under_threshold() {
        let details = ActionDetails {
            time_taken_minutes: Some(SPEED_BONUS_MAX_MINUTES - 1),
            ..Default::default()
        };
        let reward = award_xp("complete_easy_repair", &details);
        assert_eq!(reward.bonus_xp, SPEED_BONUS_XP);
    }

    #[test]
    fn no_speed_bonus_at_threshold() {
        let details = ActionDetails {
            time_taken_minutes: Some(SPEED_BONUS_MAX_MINUTES),
            ..Default::default()
        };
        let reward = award_xp("complete_easy_repair", &details);
        assert_eq!(reward.bonus_xp, 0);
    }

    #[test]
    fn speed_bonus_only_applies_to_repair_actions() {
        let details = ActionDetails {
            time_taken_minutes: Some(5),
            ..Default::default()
        };
        let reward = award_xp("complete_step", &details);
        assert_eq!(reward.bonus_xp, 0);
    }

    #[test]
    fn perfect_completion_requires_exactly_100() {
        let perfect = ActionDetails {
            completion_percentage: Some(100),
            ..Default::default()
        };
        let close = ActionDetails {
            completion_percentage: Some(99),
            ..Default::default()
        };
        assert_eq!(
            award_xp("complete_step", &perfect).bonus_xp,
            PERFECT_COMPLETION_XP
        );
        assert_eq!(award_xp("complete_step", &close).bonus_xp, 0);
    }

    #[test]
    fn all_bonuses_stack() {
        let details = ActionDetails {
            time_taken_minutes: Some(20),
            completion_percentage: Some(100),
            is_first_repair: true,
        };
        let reward = award_for(XpAction::CompleteRepair(Difficulty::Hard), &details);
        assert_eq!(reward.base_xp, 200);
        assert_eq!(
            reward.bonus_xp,
            SPEED_BONUS_XP + PERFECT_COMPLETION_XP + FIRST_REPAIR_XP
        );
        assert_eq!(reward.total_xp, reward.base_xp + reward.bonus_xp);
        assert_eq!(reward.bonus_reasons.len(), 3);
    }

    #[test]
    fn hard_with_speed_beats_easy_without() {
        let fast = ActionDetails {
            time_taken_minutes: Some(45),
            ..Default::default()
        };
        let hard = award_for(XpAction::CompleteRepair(Difficulty::Hard), &fast);
        let easy = award_for(XpAction::CompleteRepair(Difficulty::Easy), &ActionDetails::default());
        assert!(hard.total_xp > easy.total_xp);
    }

    #[test]
    fn bonuses_still_fire_for_unknown_action() {
        // Unknown keys award no base XP but the perfect/first bonuses are
        // action-independent.
        let details = ActionDetails {
            completion_percentage: Some(100),
            is_first_repair: true,
            ..Default::default()
        };
        let reward = award_xp("complete_impossible_repair", &details);
        assert_eq!(reward.base_xp, 0);
        assert_eq!(reward.bonus_xp, PERFECT_COMPLETION_XP + FIRST_REPAIR_XP);
    }
}
