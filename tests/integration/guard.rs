use crate::common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_entry_redirects_to_dashboard_with_refresh_cookie() {
    let (app, _) = common::test_app();

    let response = app
        .oneshot(common::get("/", Some("refreshToken=abc")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(common::location(&response), "/dashboard");
}

#[tokio::test]
async fn test_entry_renders_without_cookie() {
    let (app, _) = common::test_app();

    let response = app.oneshot(common::get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_text(response).await;
    assert!(body.contains(r#"action="/auth/login""#));
}

#[tokio::test]
async fn test_empty_cookie_counts_as_absent() {
    let (app, _) = common::test_app();

    let response = app
        .clone()
        .oneshot(common::get("/", Some("refreshToken=")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(common::get("/dashboard", Some("refreshToken=")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(common::location(&response), "/");
}

#[tokio::test]
async fn test_dashboard_paths_need_cookie() {
    let (app, transport) = common::test_app();

    for path in ["/dashboard", "/dashboard/profile", "/dashboardx"] {
        let response = app.clone().oneshot(common::get(path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(common::location(&response), "/", "{path}");
    }

    // Redirected before any backend call
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_dashboard_renders_with_cookie() {
    let (app, transport) = common::test_app();

    let response = app
        .oneshot(common::get("/dashboard?notice=Welcome", Some("refreshToken=abc")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_text(response).await;
    assert!(body.contains("Welcome"));
    assert!(body.contains("Refresh token rotation enabled"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_unguarded_paths_pass_through() {
    let (app, _) = common::test_app();

    let response = app
        .oneshot(common::get("/health", Some("refreshToken=abc")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_custom_cookie_name() {
    let config = authdeck::infrastructure::config::Config {
        refresh_cookie_name: "rt".into(),
        ..authdeck::infrastructure::config::Config::for_backend(common::BACKEND)
    };
    let (app, _) = common::test_app_with(config);

    let response = app
        .clone()
        .oneshot(common::get("/", Some("refreshToken=abc")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(common::get("/", Some("rt=abc"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}
