pub mod community;
pub mod feedback;
pub mod gamification;
pub mod health;
pub mod insights;
pub mod repairs;
pub mod sessions;
pub mod vendors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /repairs/analyze                      analyze an item photo (POST)
/// /repairs/refine                       refine a diagnosis (POST)
/// /repairs/troubleshoot                 follow-up guidance (POST)
/// /repairs/step-details                 explain one repair step (POST)
///
/// /sessions                             save (POST), list recent (GET)
///
/// /insights                             repair-history insights (GET)
///
/// /community/posts                      create (POST), list (GET)
/// /community/posts/{post_id}/like       like a post (POST)
/// /community/posts/{post_id}/moderate   moderate a post (PUT)
/// /community/reports                    file (POST), list by status (GET)
/// /community/guidelines                 static guidelines (GET)
///
/// /gamification/profile                 profile + badge catalog (GET)
/// /gamification/complete-step           award step XP (POST)
/// /gamification/complete-repair         award repair XP (POST)
///
/// /feedback                             submit feedback (POST)
///
/// /vendors/search                       local vendor lookup (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/repairs", repairs::router())
        .nest("/sessions", sessions::router())
        .nest("/insights", insights::router())
        .nest("/community", community::router())
        .nest("/gamification", gamification::router())
        .nest("/feedback", feedback::router())
        .nest("/vendors", vendors::router())
}
