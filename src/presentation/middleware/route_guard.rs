use crate::domain::session::{GuardAction, guard_decision};
use crate::infrastructure::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

/// Redirect between the entry page and the dashboard on the refresh cookie's
/// presence alone. Advisory: the backend still validates every call.
pub async fn route_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    // An empty value reads as absent, same as a missing cookie.
    let has_refresh_cookie = jar
        .get(&state.config.refresh_cookie_name)
        .is_some_and(|cookie| !cookie.value().is_empty());

    match guard_decision(has_refresh_cookie, request.uri().path()) {
        GuardAction::Redirect(target) => {
            tracing::debug!(path = %request.uri().path(), redirect = target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
        GuardAction::Allow => next.run(request).await,
    }
}
