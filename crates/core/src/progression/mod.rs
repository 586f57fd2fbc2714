//! The progression engine: XP awards, level derivation, activity
//! streaks, and badge unlocking.
//!
//! Every operation here is a pure function of its arguments. The engine
//! holds no state and performs no I/O; callers own persistence and must
//! serialize concurrent read-modify-write cycles against the underlying
//! per-user record (see `ProfileRepo::lock_or_create` in `fixhub-db`).

pub mod badges;
pub mod level;
pub mod stats;
pub mod streak;
pub mod xp;

pub use crate::analysis::Difficulty;
pub use badges::{evaluate_badges, BadgeDef, BadgeView, BADGES};
pub use level::{compute_level, LevelInfo, LEVEL_THRESHOLDS};
pub use stats::{
    record_money_saved, record_repair_completion, record_step_completion, ProgressStats,
};
pub use streak::compute_streak;
pub use xp::{award_for, award_xp, ActionDetails, XpAction, XpReward};

use serde::Serialize;

use crate::types::Timestamp;

/// The persisted progression state of one user, as loaded by the caller.
///
/// `stats` must already reflect the action being applied (the caller
/// records counters first, then applies), matching how badge criteria
/// like "first repair" observe the action itself.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
    pub total_xp: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<Timestamp>,
    pub badges_earned: Vec<String>,
    pub stats: ProgressStats,
}

/// Everything that changed by applying one action. The caller persists
/// this and relays it to the client.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressUpdate {
    pub reward: XpReward,
    pub new_total_xp: i64,
    pub leveled_up: bool,
    pub level_info: LevelInfo,
    pub new_badges: Vec<BadgeView>,
    pub new_streak: i32,
    pub new_longest_streak: i32,
    /// Stats after badge evaluation, with the longest streak folded in.
    #[serde(skip)]
    pub stats: ProgressStats,
}

/// Apply one completed action to a progress snapshot.
///
/// Computes the XP reward, the level before/after, the new streak (and
/// longest streak, which never decreases), and newly earned badges. The
/// updated longest streak is written into the stats record before badge
/// evaluation so streak-based badges observe it.
pub fn apply_action(
    snapshot: &ProgressSnapshot,
    action: XpAction,
    details: &ActionDetails,
    now: Timestamp,
) -> ProgressUpdate {
    apply_action_key(snapshot, &action.key(), details, now)
}

/// Key-based variant of [`apply_action`], for callers that build the
/// action key from client input. An unknown key earns zero base XP but
/// still counts for streaks, bonuses, and badges.
pub fn apply_action_key(
    snapshot: &ProgressSnapshot,
    action_key: &str,
    details: &ActionDetails,
    now: Timestamp,
) -> ProgressUpdate {
    let reward = award_xp(action_key, details);
    let new_total_xp = snapshot.total_xp + reward.total_xp;

    let old_level = compute_level(snapshot.total_xp).level;
    let level_info = compute_level(new_total_xp);
    let leveled_up = level_info.level > old_level;

    let new_streak = compute_streak(snapshot.last_activity_date, now, snapshot.current_streak);
    let new_longest_streak = snapshot.longest_streak.max(new_streak);

    let mut stats = snapshot.stats.clone();
    stats.longest_streak = new_longest_streak;

    let new_badges = evaluate_badges(&stats, &snapshot.badges_earned)
        .into_iter()
        .map(BadgeView::from)
        .collect();

    ProgressUpdate {
        reward,
        new_total_xp,
        leveled_up,
        level_info,
        new_badges,
        new_streak,
        new_longest_streak,
        stats,
    }
}
