//! Repository for the `gamification_profiles` table.

use sqlx::{PgPool, Postgres, Transaction};

use crate::models::profile::{GamificationProfile, ProfileUpdate};

/// Column list for `gamification_profiles` queries.
const COLUMNS: &str = "\
    id, user_id, total_xp, current_streak, longest_streak, \
    last_activity_date, badges_earned, stats, created_at, updated_at";

/// Provides CRUD operations for gamification profiles.
///
/// Progression updates are read-modify-write: two concurrent completions
/// for the same user must not both read the same stale `total_xp` and
/// overwrite each other. [`lock_or_create`](Self::lock_or_create) takes
/// a row lock inside the caller's transaction to serialize them.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Get the profile for a user, creating a zero-state row on first
    /// access (upsert pattern).
    ///
    /// Uses a no-op `DO UPDATE` to guarantee `RETURNING` always produces
    /// a row, matching the established pattern in the other repositories.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<GamificationProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO gamification_profiles (user_id) \
             VALUES ($1) \
             ON CONFLICT (user_id) DO UPDATE SET user_id = gamification_profiles.user_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GamificationProfile>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Get the profile for a user with a `FOR UPDATE` row lock, creating
    /// the zero-state row first if needed. Must run inside a transaction;
    /// the lock is held until the transaction commits or rolls back.
    pub async fn lock_or_create(
        tx: &mut Transaction<'_, Postgres>,
        user_id: &str,
    ) -> Result<GamificationProfile, sqlx::Error> {
        sqlx::query("INSERT INTO gamification_profiles (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

        let query =
            format!("SELECT {COLUMNS} FROM gamification_profiles WHERE user_id = $1 FOR UPDATE");
        sqlx::query_as::<_, GamificationProfile>(&query)
            .bind(user_id)
            .fetch_one(&mut **tx)
            .await
    }

    /// Write back the result of a progression update within the same
    /// transaction that holds the row lock.
    pub async fn store(
        tx: &mut Transaction<'_, Postgres>,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<GamificationProfile, sqlx::Error> {
        let badges = serde_json::to_value(&update.badges_earned)
            .unwrap_or_else(|_| serde_json::Value::Array(Vec::new()));
        let stats = serde_json::to_value(&update.stats)
            .unwrap_or_else(|_| serde_json::json!({}));

        let query = format!(
            "UPDATE gamification_profiles SET \
                total_xp = $2, \
                current_streak = $3, \
                longest_streak = $4, \
                last_activity_date = $5, \
                badges_earned = $6, \
                stats = $7, \
                updated_at = now() \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GamificationProfile>(&query)
            .bind(user_id)
            .bind(update.total_xp)
            .bind(update.current_streak)
            .bind(update.longest_streak)
            .bind(update.last_activity_date)
            .bind(badges)
            .bind(stats)
            .fetch_one(&mut **tx)
            .await
    }
}
