//! Route definitions for the `/community` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::community;
use crate::state::AppState;

/// Routes mounted at `/community`.
///
/// ```text
/// POST /posts                      -> create_post
/// GET  /posts                      -> list_posts      (?limit)
/// POST /posts/{post_id}/like       -> like_post       (404 on unknown post)
/// PUT  /posts/{post_id}/moderate   -> moderate_post   (delete/approve/ignore)
/// POST /reports                    -> report_post     (404 on unknown post)
/// GET  /reports                    -> list_reports    (?status, default pending)
/// GET  /guidelines                 -> get_guidelines  (static content)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(community::list_posts).post(community::create_post),
        )
        .route("/posts/{post_id}/like", post(community::like_post))
        .route("/posts/{post_id}/moderate", put(community::moderate_post))
        .route(
            "/reports",
            get(community::list_reports).post(community::report_post),
        )
        .route("/guidelines", get(community::get_guidelines))
}
