use crate::application::fetch::{CookieStore, FetchClient};
use crate::infrastructure::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header::SET_COOKIE, request::Parts},
    response::{IntoResponse, Response},
};
use std::convert::Infallible;

/// The visitor's side of the backend conversation: their cookies go out on
/// credentialed calls, and whatever the backend sets comes back to them.
pub struct BrowserSession {
    client: FetchClient,
}

impl FromRequestParts<AppState> for BrowserSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = CookieStore::from_headers(&parts.headers);

        Ok(BrowserSession {
            client: FetchClient::new(state.transport.clone(), cookies),
        })
    }
}

impl BrowserSession {
    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    /// Attach the backend's `Set-Cookie` headers to the outgoing response.
    pub fn respond(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        for value in self.client.take_set_cookies() {
            response.headers_mut().append(SET_COOKIE, value);
        }
        response
    }
}
