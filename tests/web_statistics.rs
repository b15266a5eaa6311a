mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

#[tokio::test]
async fn test_statistics_page_lists_records() {
    let server = TestServer::new(common::web_app(common::create_test_state())).unwrap();

    let response = server.get("/statistics").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("URL Statistics"));
    assert!(html.contains("short1"));
    assert!(html.contains("demo123"));
    assert!(html.contains("Expired"));
    assert!(html.contains("LinkedIn"));
    assert!(html.contains("Berlin, DE"));
    assert!(html.contains("aria-current=\"page\">Statistics</a>"));
}

#[tokio::test]
async fn test_statistics_empty_catalog() {
    let server = TestServer::new(common::web_app(common::create_empty_catalog_state())).unwrap();

    let html = server.get("/statistics").await.text();

    assert!(html.contains("No URLs Yet"));
}

#[tokio::test]
async fn test_refresh_redirects_to_statistics() {
    let server = TestServer::new(common::web_app(common::create_test_state())).unwrap();

    let response = server.post("/statistics/refresh").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/statistics");
}

#[tokio::test]
async fn test_visiting_statistics_discards_form_session() {
    let server = TestServer::new(common::web_app(common::create_test_state())).unwrap();
    let cookie = server.get("/").await.cookie("session_id");

    server
        .post("/submit")
        .add_cookie(cookie.clone())
        .form(&[("url-1", "https://example.com")])
        .await;
    server
        .post("/entries/add")
        .add_cookie(cookie.clone())
        .form(&[("url-1", "https://example.com")])
        .await;

    server
        .get("/statistics")
        .add_cookie(cookie.clone())
        .await
        .assert_status_ok();

    let html = server.get("/").add_cookie(cookie).await.text();
    assert!(!html.contains("Recent results"));
    assert!(!html.contains("Success!"));
    assert_eq!(html.matches("name=\"url-").count(), 1);
    assert!(html.contains("name=\"url-1\" value=\"\""));
}
