use crate::common;

use authdeck::infrastructure::config::Config;
use axum::extract::ConnectInfo;
use axum::http::StatusCode;
use serial_test::serial;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceExt;

#[tokio::test]
#[serial]
async fn test_rate_limit_on_auth_posts() {
    let config = Config {
        rate_limit_per_minute: 2,
        ..Config::for_backend(common::BACKEND)
    };
    let (app, transport) = common::test_app_with(config);
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 12345);

    let mut statuses = Vec::new();
    for _ in 0..3 {
        let mut request = common::form("/auth/login", "email=&password=", None);
        request.extensions_mut().insert(ConnectInfo(addr));
        statuses.push(app.clone().oneshot(request).await.unwrap().status());
    }

    assert_eq!(
        statuses,
        vec![
            StatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::TOO_MANY_REQUESTS
        ]
    );
    assert!(transport.requests().is_empty());
}

#[tokio::test]
#[serial]
async fn test_pages_are_not_rate_limited() {
    let config = Config {
        rate_limit_per_minute: 1,
        ..Config::for_backend(common::BACKEND)
    };
    let (app, _) = common::test_app_with(config);

    for _ in 0..3 {
        let response = app.clone().oneshot(common::get("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
