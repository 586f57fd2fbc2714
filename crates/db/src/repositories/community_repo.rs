//! Repository for the `community_posts` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::community::{CommunityPost, NewPost};

/// Column list for `community_posts` queries.
const COLUMNS: &str = "\
    id, post_id, title, description, item_type, before_image, after_image, \
    repair_steps_used, tips, user_name, likes, created_at";

/// Provides CRUD operations for community repair posts.
pub struct CommunityRepo;

impl CommunityRepo {
    /// Publish a new post.
    pub async fn insert_post(pool: &PgPool, post: &NewPost) -> Result<CommunityPost, sqlx::Error> {
        let steps = serde_json::to_value(&post.repair_steps_used)
            .unwrap_or_else(|_| serde_json::Value::Array(Vec::new()));
        let query = format!(
            "INSERT INTO community_posts (\
                post_id, title, description, item_type, before_image, after_image, \
                repair_steps_used, tips, user_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommunityPost>(&query)
            .bind(post.post_id)
            .bind(&post.title)
            .bind(&post.description)
            .bind(&post.item_type)
            .bind(&post.before_image)
            .bind(&post.after_image)
            .bind(steps)
            .bind(&post.tips)
            .bind(&post.user_name)
            .fetch_one(pool)
            .await
    }

    /// List posts for the feed, newest first.
    pub async fn list_posts(pool: &PgPool, limit: i64) -> Result<Vec<CommunityPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM community_posts ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, CommunityPost>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Look up a single post by its public id.
    pub async fn find_post(
        pool: &PgPool,
        post_id: Uuid,
    ) -> Result<Option<CommunityPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM community_posts WHERE post_id = $1");
        sqlx::query_as::<_, CommunityPost>(&query)
            .bind(post_id)
            .fetch_optional(pool)
            .await
    }

    /// Increment a post's like counter. Returns the updated post, or
    /// `None` when no such post exists.
    pub async fn like_post(
        pool: &PgPool,
        post_id: Uuid,
    ) -> Result<Option<CommunityPost>, sqlx::Error> {
        let query = format!(
            "UPDATE community_posts SET likes = likes + 1 WHERE post_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommunityPost>(&query)
            .bind(post_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove a post. Returns true when a row was deleted.
    pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM community_posts WHERE post_id = $1")
            .bind(post_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
