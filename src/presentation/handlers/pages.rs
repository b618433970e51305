use crate::infrastructure::state::AppState;
use crate::presentation::dtos::{AuthPageQuery, NoticeQuery};
use crate::presentation::extractors::BrowserSession;
use crate::presentation::navigation::PendingRedirect;
use crate::presentation::views::{AuthPage, DashboardPage, ProfilePage, render};
use crate::shared::error::AppError;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect, Response},
};

/// Login / signup entry page
pub async fn auth_page(Query(query): Query<AuthPageQuery>) -> Result<Html<String>, AppError> {
    let page = if query.wants_signup() {
        AuthPage::signup()
    } else {
        AuthPage::login()
    };

    render(&page.with_notice(query.notice).with_error(query.error))
}

pub async fn dashboard_page(Query(query): Query<NoticeQuery>) -> Result<Html<String>, AppError> {
    render(&DashboardPage::new(query.notice, query.error))
}

/// Profile page. The backend call goes through session refresh; if the
/// session is gone for good the visitor is sent back to the entry page.
pub async fn profile_page(
    State(state): State<AppState>,
    session: BrowserSession,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, AppError> {
    let navigator = PendingRedirect::new();
    let result = state.api.profile(session.client(), &navigator).await;

    if let Some(target) = navigator.take() {
        return Ok(session.respond(Redirect::to(&target)));
    }

    let page = match result {
        Ok(profile) => ProfilePage {
            profile: Some(profile.into()),
            notice: query.notice,
            error: query.error,
        },
        Err(e) => {
            tracing::warn!("Failed to load profile: {}", e);
            ProfilePage {
                profile: None,
                notice: query.notice,
                error: Some(e.message().to_string()),
            }
        }
    };

    Ok(session.respond(render(&page)?))
}
