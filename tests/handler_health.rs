mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_whisper::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["sessions"]["status"], "ok");
    assert_eq!(json["checks"]["stats_catalog"]["status"], "ok");
    assert_eq!(json["checks"]["stats_catalog"]["message"], "Records: 2");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("sessions").is_some());
    assert!(json["checks"].get("stats_catalog").is_some());
}

#[tokio::test]
async fn test_health_ok_with_empty_catalog() {
    let state = common::create_empty_catalog_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["stats_catalog"]["status"], "ok");
    assert_eq!(json["checks"]["stats_catalog"]["message"], "Records: 0");
}
