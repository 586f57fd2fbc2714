//! Handlers for the `/gamification` resource.
//!
//! The profile endpoint lazily creates a zero-state profile. The two
//! completion endpoints run a read-modify-write cycle inside a
//! transaction with a row lock, so concurrent completions for one user
//! serialize instead of losing increments: record the action into the
//! stats first, apply the pure progression engine, then persist the
//! whole result.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Timelike, Utc};
use serde::{Deserialize, Serialize};

use fixhub_core::progression::{
    apply_action, apply_action_key, compute_level, record_repair_completion,
    record_step_completion, ActionDetails, BadgeView, Difficulty, LevelInfo, ProgressUpdate,
    XpAction, BADGES,
};
use fixhub_db::models::profile::{GamificationProfile, ProfileUpdate};
use fixhub_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_USER_ID: &str = "default_user";

/// Query parameters identifying the acting user.
#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub user_id: Option<String>,
}

impl UserParams {
    fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// One badge from the catalog, flagged with whether this user earned it.
#[derive(Debug, Serialize)]
pub struct BadgeStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

/// Profile payload: the stored row plus derived level info and the
/// full badge catalog.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: GamificationProfile,
    pub level_info: LevelInfo,
    pub all_badges: Vec<BadgeStatus>,
}

/// GET /api/v1/gamification/profile?user_id=X
///
/// Fetch (or lazily create) the user's progression profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = ProfileRepo::get_or_create(&state.pool, params.user_id()).await?;

    let level_info = compute_level(profile.total_xp);
    let earned = profile.badge_ids();
    let all_badges = BADGES
        .iter()
        .map(|badge| BadgeStatus {
            id: badge.id,
            name: badge.name,
            description: badge.description,
            icon: badge.icon,
            earned: earned.iter().any(|id| id == badge.id),
        })
        .collect();

    Ok(Json(DataResponse {
        data: ProfileResponse {
            profile,
            level_info,
            all_badges,
        },
    }))
}

// ---------------------------------------------------------------------------
// Completions
// ---------------------------------------------------------------------------

/// Payload returned by both completion endpoints.
#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub xp_awarded: i64,
    pub base_xp: i64,
    pub bonus_xp: i64,
    pub bonus_reasons: Vec<String>,
    pub new_total_xp: i64,
    pub leveled_up: bool,
    pub new_level: i32,
    pub level_info: LevelInfo,
    pub new_badges: Vec<BadgeView>,
    pub current_streak: i32,
    pub message: String,
}

impl CompletionResponse {
    fn from_update(update: ProgressUpdate) -> Self {
        let message = format!("Amazing! You earned {} XP!", update.reward.total_xp);
        Self {
            xp_awarded: update.reward.total_xp,
            base_xp: update.reward.base_xp,
            bonus_xp: update.reward.bonus_xp,
            bonus_reasons: update.reward.bonus_reasons,
            new_total_xp: update.new_total_xp,
            leveled_up: update.leveled_up,
            new_level: update.level_info.level,
            level_info: update.level_info,
            new_badges: update.new_badges,
            current_streak: update.new_streak,
            message,
        }
    }
}

/// POST /api/v1/gamification/complete-step?user_id=X
///
/// Award XP for completing a single repair step.
pub async fn complete_step(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> AppResult<Json<DataResponse<CompletionResponse>>> {
    let user_id = params.user_id();
    let now = Utc::now();

    let mut tx = state.pool.begin().await?;
    let profile = ProfileRepo::lock_or_create(&mut tx, user_id).await?;

    let mut snapshot = profile.snapshot();
    record_step_completion(&mut snapshot.stats);

    let update = apply_action(&snapshot, XpAction::CompleteStep, &ActionDetails::default(), now);

    persist_update(&mut tx, user_id, &snapshot.badges_earned, &update, now).await?;
    tx.commit().await?;

    tracing::info!(user_id = %user_id, xp = update.reward.total_xp, "Step completed");
    Ok(Json(DataResponse {
        data: CompletionResponse::from_update(update),
    }))
}

/// Request body for completing a whole repair.
#[derive(Debug, Deserialize)]
pub struct CompleteRepairRequest {
    pub difficulty: String,
    pub time_taken_minutes: i64,
    /// Tool names used during the repair, for the collector badge.
    #[serde(default)]
    pub tools_used: Vec<String>,
}

/// POST /api/v1/gamification/complete-repair?user_id=X
///
/// Award XP for completing an entire repair, with speed, perfect
/// completion, and first-repair bonuses where they apply. An
/// unrecognized difficulty still counts the repair; it just earns no
/// difficulty-scaled base XP.
pub async fn complete_repair(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    Json(request): Json<CompleteRepairRequest>,
) -> AppResult<Json<DataResponse<CompletionResponse>>> {
    let user_id = params.user_id();
    let now = Utc::now();
    let difficulty = Difficulty::parse(&request.difficulty);

    let mut tx = state.pool.begin().await?;
    let profile = ProfileRepo::lock_or_create(&mut tx, user_id).await?;

    let mut snapshot = profile.snapshot();
    let is_first_repair = snapshot.stats.completed_repairs == 0;
    record_repair_completion(
        &mut snapshot.stats,
        difficulty,
        request.time_taken_minutes,
        100,
        now.hour(),
        &request.tools_used,
    );

    let details = ActionDetails {
        time_taken_minutes: Some(request.time_taken_minutes),
        completion_percentage: Some(100),
        is_first_repair,
    };
    // The key is built from the raw client string: an unrecognized
    // difficulty earns zero base XP but keeps bonuses and streaks.
    let action_key = format!("complete_{}_repair", request.difficulty.to_lowercase());
    if difficulty.is_none() {
        tracing::warn!(
            user_id = %user_id,
            difficulty = %request.difficulty,
            "Unknown repair difficulty"
        );
    }
    let update = apply_action_key(&snapshot, &action_key, &details, now);

    persist_update(&mut tx, user_id, &snapshot.badges_earned, &update, now).await?;
    tx.commit().await?;

    tracing::info!(
        user_id = %user_id,
        xp = update.reward.total_xp,
        first_repair = is_first_repair,
        "Repair completed"
    );
    Ok(Json(DataResponse {
        data: CompletionResponse::from_update(update),
    }))
}

/// Write the applied update back to the locked profile row.
async fn persist_update(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    user_id: &str,
    already_earned: &[String],
    update: &ProgressUpdate,
    now: fixhub_core::types::Timestamp,
) -> Result<(), sqlx::Error> {
    let mut badges_earned = already_earned.to_vec();
    badges_earned.extend(update.new_badges.iter().map(|b| b.id.to_string()));

    let stored = ProfileUpdate {
        total_xp: update.new_total_xp,
        current_streak: update.new_streak,
        longest_streak: update.new_longest_streak,
        last_activity_date: now,
        badges_earned,
        stats: update.stats.clone(),
    };
    ProfileRepo::store(tx, user_id, &stored).await?;
    Ok(())
}
