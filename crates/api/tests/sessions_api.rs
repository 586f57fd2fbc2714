//! Integration tests for sessions, insights, and feedback.

mod common;

use axum::http::StatusCode;
use common::{assert_status_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn sample_session(status: &str, cost: f64) -> serde_json::Value {
    json!({
        "repair_id": Uuid::new_v4(),
        "title": "Washing machine drum bearing",
        "progress_percentage": 40,
        "status": status,
        "item_type": "Washing Machine",
        "typical_cost": cost,
        "total_minutes": 90.0
    })
}

// ---------------------------------------------------------------------------
// Test: save and list sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_and_list_sessions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/sessions", sample_session("in_progress", 80.0)).await;
    let json = assert_status_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["title"], "Washing machine drum bearing");
    assert!(json["data"]["session_id"].is_string());

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/sessions").await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: re-saving the same session updates instead of duplicating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn resave_updates_in_place(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/sessions", sample_session("in_progress", 80.0)).await;
    let json = assert_status_json(response, StatusCode::CREATED).await;
    let session_id = json["data"]["session_id"].as_str().unwrap().to_string();
    let repair_id = json["data"]["repair_id"].as_str().unwrap().to_string();

    let mut update = sample_session("completed", 80.0);
    update["session_id"] = json!(session_id);
    update["repair_id"] = json!(repair_id);
    update["progress_percentage"] = json!(100);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/sessions", update).await;
    let json = assert_status_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["progress_percentage"], 100);
    assert_eq!(json["data"]["status"], "completed");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/sessions").await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: out-of-range progress is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_progress_is_rejected(pool: PgPool) {
    let mut body = sample_session("in_progress", 80.0);
    body["progress_percentage"] = json!(150);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/sessions", body).await;
    let json = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: insights on an empty history are all zeros
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_history_yields_zero_insights(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/insights").await;
    let json = assert_status_json(response, StatusCode::OK).await;

    let data = &json["data"];
    assert_eq!(data["total_repairs"], 0);
    assert_eq!(data["completed_repairs"], 0);
    assert_eq!(data["money_saved"], 0.0);
    assert_eq!(data["completion_rate"], 0.0);
    assert!(data["most_common_repairs"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: insights aggregate over stored sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn insights_aggregate_sessions(pool: PgPool) {
    for (status, cost) in [("completed", 120.0), ("completed", 30.0), ("in_progress", 50.0)] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/sessions", sample_session(status, cost)).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/insights").await;
    let json = assert_status_json(response, StatusCode::OK).await;

    let data = &json["data"];
    assert_eq!(data["total_repairs"], 3);
    assert_eq!(data["completed_repairs"], 2);
    assert_eq!(data["money_saved"], 200.0);
    assert_eq!(data["completion_rate"], 66.7);
    assert_eq!(data["recent_activity"], 3);
    assert_eq!(data["most_common_repairs"][0]["type"], "Washing Machine");
    assert_eq!(data["most_common_repairs"][0]["count"], 3);
}

// ---------------------------------------------------------------------------
// Test: feedback validation and storage
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_rating_is_validated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/feedback",
        json!({ "repair_id": Uuid::new_v4(), "rating": 0, "was_helpful": true }),
    )
    .await;
    let json = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_is_stored(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/feedback",
        json!({
            "repair_id": Uuid::new_v4(),
            "rating": 5,
            "comment": "Saved me a service call",
            "was_helpful": true
        }),
    )
    .await;
    let json = assert_status_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["rating"], 5);
    assert_eq!(json["data"]["was_helpful"], true);
}
