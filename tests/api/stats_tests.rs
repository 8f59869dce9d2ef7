//! Stats API Tests
//!
//! End-to-end tests for the ingestion and summary endpoints, exercising
//! the real router with a fresh in-memory store per test.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{body_json, unique_session_id, TestApp};

#[tokio::test]
async fn pageview_then_current_reports_the_session() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/stats/pageview", r#"{"sessionId":"a","page":"/home"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let ack = body_json(response).await;
    assert_eq!(ack["success"], true);
    assert_eq!(ack["message"], "Page view recorded");

    let response = app.get("/api/stats/current").await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = body_json(response).await;
    assert_eq!(summary["onlineUsers"], 1);
    assert_eq!(summary["todayViews"], 1);
    assert_eq!(summary["totalViews"], 1);
    assert_eq!(summary["popularPages"], json!([{"page": "/home", "count": 1}]));
    assert!(summary["timestamp"].is_string());
}

#[tokio::test]
async fn heartbeat_for_unknown_session_is_acknowledged_without_creating_one() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/stats/heartbeat", r#"{"sessionId":"ghost"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let ack = body_json(response).await;
    assert_eq!(ack["success"], true);
    assert_eq!(ack["message"], "Heartbeat received");

    let summary = body_json(app.get("/api/stats/current").await).await;
    assert_eq!(summary["onlineUsers"], 0);
}

#[tokio::test]
async fn heartbeat_keeps_a_known_session_online() {
    let app = TestApp::new();
    let session_id = unique_session_id();

    app.post_json(
        "/api/stats/pageview",
        &json!({"sessionId": session_id, "page": "/home"}).to_string(),
    )
    .await;

    let response = app
        .post_json(
            "/api/stats/heartbeat",
            &json!({"sessionId": session_id}).to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = body_json(app.get("/api/stats/current").await).await;
    assert_eq!(summary["onlineUsers"], 1);
}

#[tokio::test]
async fn offline_followed_by_current_never_counts_the_session() {
    let app = TestApp::new();

    app.post_json("/api/stats/pageview", r#"{"sessionId":"a","page":"/home"}"#)
        .await;

    let response = app
        .post_json("/api/stats/offline", r#"{"sessionId":"a"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let ack = body_json(response).await;
    assert_eq!(ack["message"], "User offline");

    let summary = body_json(app.get("/api/stats/current").await).await;
    assert_eq!(summary["onlineUsers"], 0);
    // The recorded view is kept
    assert_eq!(summary["totalViews"], 1);
}

#[tokio::test]
async fn offline_for_absent_session_still_succeeds() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/stats/offline", r#"{"sessionId":"never-seen"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[tokio::test]
async fn malformed_json_returns_internal_server_error() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/stats/pageview", "{not json at all")
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[test_case("GET", "/api/stats/pageview" ; "get on pageview")]
#[test_case("GET", "/api/stats/heartbeat" ; "get on heartbeat")]
#[test_case("GET", "/api/stats/offline" ; "get on offline")]
#[test_case("POST", "/api/stats/current" ; "post on current")]
#[test_case("DELETE", "/api/stats/pageview" ; "delete on pageview")]
#[tokio::test]
async fn wrong_method_on_known_path_falls_through_to_not_found(method: &str, uri: &str) {
    let app = TestApp::new();

    let response = app.request(method, uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Not found"}));
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/stats/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Not found"}));
}

#[tokio::test]
async fn preflight_is_answered_with_permissive_cors() {
    let app = TestApp::new();

    let response = app.preflight("/api/stats/pageview").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn responses_carry_permissive_cors_headers() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/stats/pageview", r#"{"sessionId":"a","page":"/home"}"#)
        .await;
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn extra_fields_are_accepted_and_recorded() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/stats/pageview",
            r#"{"sessionId":"a","page":"/home","referrer":"https://example.com","viewport":"1280x720"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = body_json(app.get("/api/stats/current").await).await;
    assert_eq!(summary["todayViews"], 1);
}

#[tokio::test]
async fn missing_session_id_is_accepted_as_degenerate_session() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/stats/pageview", r#"{"page":"/home"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The empty identifier becomes a session key of its own
    let summary = body_json(app.get("/api/stats/current").await).await;
    assert_eq!(summary["onlineUsers"], 1);
    assert_eq!(summary["todayViews"], 1);
}

#[tokio::test]
async fn total_views_is_capped_by_the_store() {
    let app = TestApp::with_analytics(sitepulse::config::AnalyticsSettings {
        max_stored_views: 3,
        ..Default::default()
    });

    for i in 0..5 {
        app.post_json(
            "/api/stats/pageview",
            &json!({"sessionId": "a", "page": format!("/p{}", i)}).to_string(),
        )
        .await;
    }

    let summary = body_json(app.get("/api/stats/current").await).await;
    assert_eq!(summary["totalViews"], 3);
}

#[tokio::test]
async fn popular_pages_is_sorted_and_capped_at_ten() {
    let app = TestApp::new();

    // 12 distinct pages; /p0 gets the most views, /p1 the next most, ...
    for page in 0..12 {
        for _ in 0..(12 - page) {
            app.post_json(
                "/api/stats/pageview",
                &json!({"sessionId": "a", "page": format!("/p{}", page)}).to_string(),
            )
            .await;
        }
    }

    let summary = body_json(app.get("/api/stats/current").await).await;
    let popular = summary["popularPages"].as_array().unwrap();
    assert_eq!(popular.len(), 10);

    let counts: Vec<i64> = popular
        .iter()
        .map(|entry| entry["count"].as_i64().unwrap())
        .collect();
    let mut sorted = counts.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(counts, sorted);

    assert_eq!(popular[0]["page"], "/p0");
    assert_eq!(popular[0]["count"], 12);
}
