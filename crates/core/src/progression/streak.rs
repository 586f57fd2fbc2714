//! Consecutive-day activity streak computation.
//!
//! "Day" means a UTC calendar date. An action on the same date leaves the
//! streak unchanged, an action on the following date extends it, and any
//! longer gap resets it to 1. The caller is responsible for keeping
//! `longest_streak = max(longest_streak, new_streak)` after every update.

use crate::types::Timestamp;

/// Compute the streak value after an action at `now`.
///
/// With no prior activity the streak starts at 1.
pub fn compute_streak(last_activity: Option<Timestamp>, now: Timestamp, current_streak: i32) -> i32 {
    let Some(last) = last_activity else {
        return 1;
    };

    let elapsed_days = (now.date_naive() - last.date_naive()).num_days();
    match elapsed_days {
        0 => current_streak,
        1 => current_streak + 1,
        _ => 1,
    }
}
