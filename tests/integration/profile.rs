use crate::common;

use axum::http::{Method, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

const SESSION: &str = "refreshToken=r1; accessToken=expired";

#[tokio::test]
async fn test_profile_refreshes_expired_access_once() {
    let (app, transport) = common::test_app();
    transport.respond(
        Method::GET,
        "/api/auth/me",
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Access token expired" }),
    );
    transport.respond_with_cookie(
        Method::POST,
        "/api/auth/refresh",
        StatusCode::OK,
        json!({ "message": "Refreshed" }),
        "accessToken=fresh; Path=/; HttpOnly",
    );
    transport.respond(
        Method::GET,
        "/api/auth/me",
        StatusCode::OK,
        json!({ "username": "jane@example.com", "roles": ["USER", "ADMIN"] }),
    );

    let response = app
        .oneshot(common::get("/dashboard/profile", Some(SESSION)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::set_cookies(&response),
        vec!["accessToken=fresh; Path=/; HttpOnly".to_string()]
    );
    let body = common::body_text(response).await;
    assert!(body.contains("Email: jane@example.com"));
    assert!(body.contains("Roles: USER, ADMIN"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].method, Method::POST);
    let retry_cookie = requests[2].headers.get(header::COOKIE).unwrap();
    assert!(retry_cookie.to_str().unwrap().contains("accessToken=fresh"));
}

#[tokio::test]
async fn test_profile_with_failed_refresh_redirects_to_entry() {
    let (app, transport) = common::test_app();
    transport.respond(
        Method::GET,
        "/api/auth/me",
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Access token expired" }),
    );
    transport.respond(
        Method::POST,
        "/api/auth/refresh",
        StatusCode::FORBIDDEN,
        json!({ "message": "Refresh token revoked" }),
    );

    let response = app
        .oneshot(common::get("/dashboard/profile", Some(SESSION)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/");
    assert_eq!(transport.calls_to("/api/auth/me"), 1);
}

#[tokio::test]
async fn test_profile_backend_error_is_shown() {
    let (app, transport) = common::test_app();
    transport.respond(
        Method::GET,
        "/api/auth/me",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": "Profile service unavailable" }),
    );

    let response = app
        .oneshot(common::get("/dashboard/profile", Some(SESSION)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_text(response).await;
    assert!(body.contains("Profile service unavailable"));
    assert!(body.contains("Loading profile..."));
    assert_eq!(transport.calls_to("/api/auth/refresh"), 0);
}

#[tokio::test]
async fn test_profile_transport_failure_is_shown() {
    let (app, transport) = common::test_app();
    transport.fail(Method::GET, "/api/auth/me", "connection refused");

    let response = app
        .oneshot(common::get("/dashboard/profile", Some(SESSION)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::body_text(response).await.contains("connection refused"));
}
