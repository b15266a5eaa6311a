mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_whisper::api::handlers::{stats_handler, stats_list_handler};

fn stats_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/stats", get(stats_list_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_list() {
    let server = stats_server();

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["short_code"], "short1");
    assert_eq!(items[0]["total_clicks"], 15);
    assert_eq!(items[0]["clicks"].as_array().unwrap().len(), 3);
    assert_eq!(items[1]["short_code"], "demo123");
}

#[tokio::test]
async fn test_stats_expired_flag_computed() {
    let server = stats_server();

    let response = server.get("/api/stats").await;

    let json = response.json::<serde_json::Value>();
    for item in json["items"].as_array().unwrap() {
        assert_eq!(item["expired"], true);
    }
}

#[tokio::test]
async fn test_stats_by_code_success() {
    let server = stats_server();

    let response = server.get("/api/stats/demo123").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "demo123");
    assert_eq!(
        json["original_url"],
        "https://github.com/user/repository/blob/main/README.md"
    );
    assert_eq!(json["total_clicks"], 8);
    assert_eq!(json["clicks"][0]["referrer"], "LinkedIn");
    assert_eq!(json["clicks"][1]["location"], "Berlin, DE");
}

#[tokio::test]
async fn test_stats_by_code_not_found() {
    let server = stats_server();

    let response = server.get("/api/stats/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "nonexistent");
}

#[tokio::test]
async fn test_stats_list_empty_catalog() {
    let state = common::create_empty_catalog_state();
    let app = Router::new()
        .route("/api/stats", get(stats_list_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}
