use crate::domain::auth::OtpPurpose;
use crate::domain::session::{DASHBOARD_PATH, ENTRY_PATH};
use crate::infrastructure::state::AppState;
use crate::presentation::dtos::{LoginForm, NoticeQuery, Stage, StagedForm};
use crate::presentation::extractors::BrowserSession;
use crate::presentation::navigation::PendingRedirect;
use crate::presentation::views::{AuthPage, render};
use crate::shared::error::{ApiError, AppError};
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

fn message_or(err: &ApiError, fallback: &str) -> String {
    if err.message().is_empty() {
        fallback.to_string()
    } else {
        err.message().to_string()
    }
}

fn page(session: &BrowserSession, status: StatusCode, view: AuthPage) -> Result<Response, AppError> {
    Ok(session.respond((status, render(&view)?)))
}

fn otp_page(purpose: OtpPurpose, email: &str, otp_sent: bool) -> AuthPage {
    match purpose {
        OtpPurpose::Signup => AuthPage {
            signup_otp_sent: otp_sent,
            ..AuthPage::signup().with_email(email)
        },
        OtpPurpose::Forgot => AuthPage::forgot(email, otp_sent),
    }
}

/// Login form submit
pub async fn login(
    State(state): State<AppState>,
    session: BrowserSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let request = match form.check() {
        Ok(request) => request,
        Err(message) => {
            let retry = AuthPage::login().with_email(&form.email);
            return page(&session, StatusCode::UNPROCESSABLE_ENTITY, retry.with_error(Some(message)));
        }
    };

    match state.api.login(session.client(), &request).await {
        Ok(res) => {
            let target = NoticeQuery::notice(res.greeting()).url(DASHBOARD_PATH);
            Ok(session.respond(Redirect::to(&target)))
        }
        Err(e) => {
            let retry = AuthPage::login().with_email(&form.email);
            page(&session, StatusCode::OK, retry.with_error(Some(message_or(&e, "Login failed"))))
        }
    }
}

/// Signup form submit: first post requests the OTP, second creates the account
pub async fn signup(
    State(state): State<AppState>,
    session: BrowserSession,
    Form(form): Form<StagedForm>,
) -> Result<Response, AppError> {
    if form.stage == Stage::Otp {
        return request_otp(&state, &session, &form.email, OtpPurpose::Signup, false).await;
    }

    let account = match form.check_account() {
        Ok(account) => account,
        Err(message) => {
            let retry = otp_page(OtpPurpose::Signup, &form.email, true);
            return page(&session, StatusCode::UNPROCESSABLE_ENTITY, retry.with_error(Some(message)));
        }
    };

    match state.api.create(session.client(), &account).await {
        Ok(res) => {
            let target = NoticeQuery::notice(res.greeting()).url(DASHBOARD_PATH);
            Ok(session.respond(Redirect::to(&target)))
        }
        Err(e) => {
            let retry = otp_page(OtpPurpose::Signup, &form.email, true);
            page(&session, StatusCode::OK, retry.with_error(Some(message_or(&e, "Signup failed"))))
        }
    }
}

/// Password recovery submit: first post requests the OTP, second changes the password
pub async fn forgot(
    State(state): State<AppState>,
    session: BrowserSession,
    Form(form): Form<StagedForm>,
) -> Result<Response, AppError> {
    if form.stage == Stage::Otp {
        return request_otp(&state, &session, &form.email, OtpPurpose::Forgot, false).await;
    }

    let account = match form.check_account() {
        Ok(account) => account,
        Err(message) => {
            let retry = otp_page(OtpPurpose::Forgot, &form.email, true);
            return page(&session, StatusCode::UNPROCESSABLE_ENTITY, retry.with_error(Some(message)));
        }
    };

    match state.api.forgot_password(session.client(), &account).await {
        Ok(res) => {
            let target = NoticeQuery::notice(res.message).url(ENTRY_PATH);
            Ok(session.respond(Redirect::to(&target)))
        }
        Err(e) => {
            let retry = otp_page(OtpPurpose::Forgot, &form.email, true);
            let message = message_or(&e, "Forgot Password failed");
            page(&session, StatusCode::OK, retry.with_error(Some(message)))
        }
    }
}

/// "Resend" link next to the OTP field
pub async fn resend_otp(
    State(state): State<AppState>,
    session: BrowserSession,
    Path(purpose): Path<OtpPurpose>,
    Form(form): Form<StagedForm>,
) -> Result<Response, AppError> {
    request_otp(&state, &session, &form.email, purpose, true).await
}

async fn request_otp(
    state: &AppState,
    session: &BrowserSession,
    email: &str,
    purpose: OtpPurpose,
    already_sent: bool,
) -> Result<Response, AppError> {
    let form = StagedForm {
        email: email.to_string(),
        ..StagedForm::default()
    };
    let email = match form.check_email() {
        Ok(email) => email,
        Err(message) => {
            let retry = otp_page(purpose, &form.email, already_sent);
            return page(session, StatusCode::UNPROCESSABLE_ENTITY, retry.with_error(Some(message)));
        }
    };

    match state.api.send_otp(session.client(), &email, purpose).await {
        Ok(res) => {
            let notice = match purpose {
                OtpPurpose::Signup => format!("{}. CHECK YOUR SPAM FOLDER", res.message),
                OtpPurpose::Forgot => res.message,
            };
            let next = otp_page(purpose, &email, true);
            page(session, StatusCode::OK, next.with_notice(Some(notice)))
        }
        Err(e) => {
            let retry = otp_page(purpose, &email, already_sent);
            page(session, StatusCode::OK, retry.with_error(Some(message_or(&e, "Failed to send OTP"))))
        }
    }
}

/// Sign Out from the dashboard menu
pub async fn logout(State(state): State<AppState>, session: BrowserSession) -> Response {
    let navigator = PendingRedirect::new();
    let result = state.api.logout(session.client(), &navigator).await;

    if let Some(target) = navigator.take() {
        return session.respond(Redirect::to(&target));
    }

    let target = match result {
        Ok(res) => NoticeQuery::notice(res.message).url(ENTRY_PATH),
        Err(e) => {
            tracing::warn!("Logout failed: {}", e);
            NoticeQuery::error(message_or(&e, "Logout failed")).url(DASHBOARD_PATH)
        }
    };

    session.respond(Redirect::to(&target).into_response())
}
