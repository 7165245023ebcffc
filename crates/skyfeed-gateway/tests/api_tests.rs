//! Integration tests for the gateway HTTP surface.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection. The `WebSocket` data
//! path itself is covered by the hub and listener tests.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use skyfeed_gateway::build_router;
use skyfeed_gateway::state::AppState;
use skyfeed_hub::BroadcastHub;
use tower::ServiceExt;
use uuid::Uuid;

fn make_state(page_path: impl Into<PathBuf>) -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(BroadcastHub::new()), page_path))
}

/// Write a throwaway bootstrap page and return its path.
fn write_temp_page(content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("skyfeed-page-{}.html", Uuid::new_v4()));
    std::fs::write(&path, content).unwrap();
    path
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_serves_bootstrap_page() {
    let page = write_temp_page("<html><body>skyfeed</body></html>");
    let router = build_router(make_state(&page));

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let body = body_to_string(response.into_body()).await;
    assert!(body.contains("skyfeed"));

    std::fs::remove_file(page).ok();
}

#[tokio::test]
async fn missing_page_returns_fixed_404_body() {
    let router = build_router(make_state("/nonexistent/skyfeed/index.html"));

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_to_string(response.into_body()).await;
    assert_eq!(body, "404 Not Found");
}

#[tokio::test]
async fn ws_route_is_registered() {
    let router = build_router(make_state("/nonexistent/skyfeed/index.html"));

    // A plain GET without upgrade headers is rejected by the
    // extractor, not routed to 404.
    let response = router
        .oneshot(Request::get("/ws/readings").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_ne!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let router = build_router(make_state("/nonexistent/skyfeed/index.html"));

    let response = router
        .oneshot(Request::get("/api/history").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
