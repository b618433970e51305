use crate::domain::http::{ApiRequest, ApiResponse, HttpTransport};
use crate::domain::session::Navigator;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use axum::http::{HeaderValue, Method, StatusCode, header::SET_COOKIE};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

struct Stub {
    method: Method,
    path: String,
    outcome: Result<ApiResponse, ApiError>,
}

/// Scripted backend. Each stub answers one matching request, in the order
/// stubs were added; unmatched requests get a 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    stubs: Arc<Mutex<VecDeque<Stub>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: serde_json::Value) {
        self.push(method, path, Ok(ApiResponse::new(status, body.to_string())));
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: StatusCode, body: &'static str) {
        self.push(method, path, Ok(ApiResponse::new(status, body)));
    }

    pub fn respond_with_cookie(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: serde_json::Value,
        set_cookie: &'static str,
    ) {
        let mut response = ApiResponse::new(status, body.to_string());
        response
            .headers
            .append(SET_COOKIE, HeaderValue::from_static(set_cookie));
        self.push(method, path, Ok(response));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, Err(ApiError::new(message)));
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.url.ends_with(path))
            .count()
    }

    fn push(&self, method: Method, path: &str, outcome: Result<ApiResponse, ApiError>) {
        self.stubs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Stub {
                method,
                path: path.to_string(),
                outcome,
            });
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let outcome = {
            let mut stubs = self.stubs.lock().unwrap_or_else(PoisonError::into_inner);
            let position = stubs
                .iter()
                .position(|s| s.method == request.method && request.url.ends_with(&s.path));
            position.and_then(|i| stubs.remove(i)).map(|s| s.outcome)
        };

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        outcome.unwrap_or_else(|| {
            Ok(ApiResponse::new(
                StatusCode::NOT_FOUND,
                r#"{"message":"Not found"}"#,
            ))
        })
    }
}

/// Navigator that remembers every forced navigation.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
