mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

async fn user_with_history(app: &TestApp) -> String {
    let user_id = app.create_user("fcc_test").await;
    app.add_exercise(&user_id, "march", "10", Some("2021-03-01"))
        .await;
    app.add_exercise(&user_id, "january", "20", Some("2021-01-15"))
        .await;
    app.add_exercise(&user_id, "february", "30", Some("2021-02-10"))
        .await;
    app.add_exercise(&user_id, "april", "40", Some("2021-04-20"))
        .await;
    user_id
}

fn descriptions(body: &serde_json::Value) -> Vec<String> {
    body["log"]
        .as_array()
        .expect("log must be an array")
        .iter()
        .map(|entry| entry["description"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn full_log_report_counts_every_entry() {
    let app = TestApp::new();
    let user_id = user_with_history(&app).await;

    let response = app.get(&format!("/api/users/{}/logs", user_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["_id"], user_id.as_str());
    assert_eq!(body["username"], "fcc_test");
    assert_eq!(body["count"], 4);
    assert_eq!(
        descriptions(&body),
        vec!["march", "january", "february", "april"]
    );
    assert_eq!(
        body["log"][0],
        json!({ "description": "march", "duration": 10, "date": "Mon Mar 01 2021" })
    );
}

#[tokio::test]
async fn from_and_to_are_inclusive() {
    let app = TestApp::new();
    let user_id = user_with_history(&app).await;

    let response = app
        .get(&format!(
            "/api/users/{}/logs?from=2021-02-10&to=2021-03-01",
            user_id
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(descriptions(&body), vec!["march", "february"]);
}

#[tokio::test]
async fn limit_caps_the_report() {
    let app = TestApp::new();
    let user_id = user_with_history(&app).await;

    let response = app
        .get(&format!("/api/users/{}/logs?limit=1", user_id))
        .await;

    let body = response.json();
    assert_eq!(body["count"], 1);
    assert_eq!(descriptions(&body), vec!["march"]);
}

#[tokio::test]
async fn empty_query_values_are_ignored() {
    let app = TestApp::new();
    let user_id = user_with_history(&app).await;

    let response = app
        .get(&format!("/api/users/{}/logs?from=&to=&limit=", user_id))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["count"], 4);
}

#[tokio::test]
async fn invalid_bounds_are_rejected() {
    let app = TestApp::new();
    let user_id = user_with_history(&app).await;

    let bad_date = app
        .get(&format!("/api/users/{}/logs?from=yesterday", user_id))
        .await;
    assert_eq!(bad_date.status, StatusCode::BAD_REQUEST);

    let bad_limit = app
        .get(&format!("/api/users/{}/logs?limit=ten", user_id))
        .await;
    assert_eq!(bad_limit.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_limit.json()["error"], "Invalid limit: ten");
}

#[tokio::test]
async fn log_report_for_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/users/no-such-user/logs").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
