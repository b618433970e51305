use crate::common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let (app, transport) = common::test_app();

    let response = app.oneshot(common::get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_text(response).await;
    assert!(body.contains("healthy"));
    assert!(transport.requests().is_empty());
}
