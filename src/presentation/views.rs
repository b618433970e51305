use crate::domain::auth::Profile;
use crate::shared::error::AppError;
use askama::Template;
use axum::response::Html;

/// What the backend advertises; shown on the dashboard landing page.
pub const SERVICE_FEATURES: &[&str] = &[
    "Access & refresh token generation active",
    "Refresh token rotation enabled",
    "Redis-backed session tracking (JTI)",
    "Immediate token revocation supported",
    "OTP-based email verification & recovery",
    "Email-based rate limiting enabled",
];

#[derive(Template, Default)]
#[template(path = "auth.html")]
pub struct AuthPage {
    pub signup: bool,
    pub email: String,
    /// The signup OTP has been sent, so the remaining fields are shown.
    pub signup_otp_sent: bool,
    pub forgot_open: bool,
    pub forgot_email: String,
    pub forgot_otp_sent: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl AuthPage {
    pub fn login() -> Self {
        Self::default()
    }

    pub fn signup() -> Self {
        Self {
            signup: true,
            ..Self::default()
        }
    }

    pub fn forgot(email: impl Into<String>, otp_sent: bool) -> Self {
        Self {
            forgot_open: true,
            forgot_email: email.into(),
            forgot_otp_sent: otp_sent,
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub features: &'static [&'static str],
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl DashboardPage {
    pub fn new(notice: Option<String>, error: Option<String>) -> Self {
        Self {
            features: SERVICE_FEATURES,
            notice,
            error,
        }
    }
}

pub struct ProfileView {
    pub username: String,
    pub roles: String,
}

impl From<Profile> for ProfileView {
    fn from(profile: Profile) -> Self {
        Self {
            username: profile.username,
            roles: profile.roles.join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfilePage {
    pub profile: Option<ProfileView>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    page.render()
        .map(Html)
        .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("Template error: {}", e)))
}
