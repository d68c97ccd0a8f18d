mod common;

use axum::http::Method;
use common::{build_test_router, build_test_router_with, send};
use serde_json::json;

#[tokio::test]
async fn journal_with_goals_end_to_end() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/goal",
        Some(json!({ "title": "Read", "content": "a book" })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let (_, goals) = send(&app, Method::GET, "/goals", None).await;
    assert_eq!(goals["data"][0]["id"], 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/entry",
        Some(json!({ "title": "Day 1", "content": "...", "goals": [1] })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Entry added successfully");
    assert!(body.get("data").is_none());

    let (status, body) = send(&app, Method::GET, "/entries", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Entries retrieved successfully");
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["title"], "Day 1");
    assert_eq!(rows[0]["goal_ids"], "1");
    assert_eq!(rows[0]["goal_titles"], "Read");
    assert!(rows[0]["created_at"].is_string());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/entry/1",
        Some(json!({ "title": "Day 1", "content": "...", "goals": [] })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Entry updated successfully");

    let (_, body) = send(&app, Method::GET, "/entries", None).await;
    assert!(body["data"][0]["goal_ids"].is_null());
    assert!(body["data"][0]["goal_titles"].is_null());

    let (status, body) = send(&app, Method::DELETE, "/entry/1", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Entry deleted successfully");

    let (_, body) = send(&app, Method::GET, "/entries", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn entry_without_goals_field_has_no_links() {
    let (app, _tmp) = build_test_router().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/entry",
        Some(json!({ "title": "Quiet day" })),
    )
    .await;
    assert_eq!(status, 200);

    let (_, body) = send(&app, Method::GET, "/entries", None).await;
    let row = &body["data"][0];
    assert_eq!(row["title"], "Quiet day");
    assert!(row["content"].is_null());
    assert!(row["goal_ids"].is_null());
}

#[tokio::test]
async fn update_replaces_goal_set() {
    let (app, _tmp) = build_test_router().await;
    for title in ["Read", "Run", "Write"] {
        send(&app, Method::POST, "/goal", Some(json!({ "title": title }))).await;
    }
    send(
        &app,
        Method::POST,
        "/entry",
        Some(json!({ "title": "Day 1", "goals": [1, 2] })),
    )
    .await;

    let (_, body) = send(&app, Method::GET, "/entries", None).await;
    assert_eq!(body["data"][0]["goal_ids"], "1,2");
    assert_eq!(body["data"][0]["goal_titles"], "Read,Run");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/entry/1",
        Some(json!({ "title": "Day 1", "goals": [3] })),
    )
    .await;
    assert_eq!(status, 200);

    let (_, body) = send(&app, Method::GET, "/entries", None).await;
    assert_eq!(body["data"][0]["goal_ids"], "3");
    assert_eq!(body["data"][0]["goal_titles"], "Write");
}

#[tokio::test]
async fn unknown_goal_fails_without_creating_entry() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/entry",
        Some(json!({ "title": "Day 1", "goals": [42] })),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Add failed");

    let (_, body) = send(&app, Method::GET, "/entries", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn update_of_missing_entry_fails() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/entry/7",
        Some(json!({ "title": "nothing here" })),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({ "success": false, "message": "Update failed" }));
}

#[tokio::test]
async fn delete_of_missing_entry_succeeds() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(&app, Method::DELETE, "/entry/7", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn malformed_input_uses_failure_envelope() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/entry",
        Some(json!({ "title": "Day 1", "goals": "not-a-list" })),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request body");

    let (status, body) = send(&app, Method::DELETE, "/entry/abc", None).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid id");
}

#[tokio::test]
async fn null_goals_are_treated_as_none() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/entry",
        Some(json!({ "title": "Day 1", "content": "x", "goals": null })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/entry/1",
        Some(json!({ "title": "Day 1", "goals": null })),
    )
    .await;
    assert_eq!(status, 200);

    let (_, body) = send(&app, Method::GET, "/entries", None).await;
    assert_eq!(body["data"][0]["title"], "Day 1");
    assert!(body["data"][0]["goal_ids"].is_null());
}

#[tokio::test]
async fn timed_out_request_uses_failure_envelope() {
    let (app, _tmp) = build_test_router_with(&[("JOURNAL_REQUEST_TIMEOUT_MS", "0")]).await;

    let (status, body) = send(&app, Method::POST, "/goal", Some(json!({ "title": "Read" }))).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({ "success": false, "message": "Request timed out" }));
}
