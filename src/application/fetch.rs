use crate::domain::http::{ApiRequest, ApiResponse, Credentials, HttpTransport};
use crate::shared::error::ApiError;
use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use time::{Duration, OffsetDateTime};

/// Cookies the browser holds for the backend, plus every `Set-Cookie` the
/// backend sent back during this exchange. The outgoing `Cookie` header lists
/// them sorted by name.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    values: BTreeMap<String, String>,
    received: Vec<HeaderValue>,
}

impl CookieStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let jar = CookieJar::from_headers(headers);
        let values = jar
            .iter()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();

        Self {
            values,
            received: Vec::new(),
        }
    }

    pub fn cookie_header(&self) -> Option<HeaderValue> {
        if self.values.is_empty() {
            return None;
        }

        let joined = self
            .values
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");

        HeaderValue::from_str(&joined).ok()
    }

    /// Apply one `Set-Cookie`. Expired cookies (`Max-Age<=0` or `Expires` in
    /// the past) are dropped from the store but still recorded for relay.
    pub fn apply(&mut self, set_cookie: &HeaderValue) {
        self.received.push(set_cookie.clone());

        let Ok(raw) = set_cookie.to_str() else {
            tracing::warn!("Ignoring non-ASCII Set-Cookie header");
            return;
        };
        let Ok(cookie) = Cookie::parse(raw.to_string()) else {
            tracing::warn!("Ignoring malformed Set-Cookie header");
            return;
        };

        let expired = cookie.max_age().is_some_and(|age| age <= Duration::ZERO)
            || cookie
                .expires_datetime()
                .is_some_and(|at| at <= OffsetDateTime::now_utc());

        if expired {
            self.values.remove(cookie.name());
        } else {
            self.values
                .insert(cookie.name().to_string(), cookie.value().to_string());
        }
    }

    pub fn take_received(&mut self) -> Vec<HeaderValue> {
        std::mem::take(&mut self.received)
    }
}

/// Per-visitor HTTP client with the browser's `fetch` cookie behavior: with
/// `Credentials::Include` cookies are sent and `Set-Cookie` is honored, with
/// `Credentials::Omit` neither happens.
pub struct FetchClient {
    transport: Arc<dyn HttpTransport>,
    cookies: Mutex<CookieStore>,
}

impl FetchClient {
    pub fn new(transport: Arc<dyn HttpTransport>, cookies: CookieStore) -> Self {
        Self {
            transport,
            cookies: Mutex::new(cookies),
        }
    }

    pub async fn fetch(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let include = request.credentials == Credentials::Include;

        if include {
            let header = self.store().cookie_header();
            match header {
                Some(header) => {
                    request.headers.insert(COOKIE, header);
                }
                None => {
                    request.headers.remove(COOKIE);
                }
            }
        }

        tracing::debug!(method = %request.method, url = %request.url, "backend request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = %response.status, "backend response");

        if include {
            let mut store = self.store();
            for set_cookie in response.set_cookies() {
                store.apply(set_cookie);
            }
        }

        Ok(response)
    }

    /// Drain the `Set-Cookie` headers received so far, for relay to the browser.
    pub fn take_set_cookies(&self) -> Vec<HeaderValue> {
        self.store().take_received()
    }

    fn store(&self) -> MutexGuard<'_, CookieStore> {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
