use crate::domain::auth::{AccountRequest, LoginRequest};
use crate::shared::validation::{
    first_violation, validate_email, validate_otp, validate_password,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const ACCOUNT_FIELDS: &[&str] = &["email", "password", "confirm_password", "__all__", "otp"];

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl LoginForm {
    pub fn check(&self) -> Result<LoginRequest, String> {
        self.validate()
            .map_err(|e| first_violation(&e, &["email", "password"]).unwrap_or_default())?;

        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Where a two-step OTP form is: the first post only asks for the code, the
/// second carries everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Otp,
    Submit,
}

/// Signup and password-recovery forms share one shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StagedForm {
    #[serde(default)]
    pub stage: Stage,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub otp: String,
}

#[derive(Debug, Validate)]
struct EmailOnly {
    #[validate(custom(function = "validate_email"))]
    email: String,
}

#[derive(Debug, Validate)]
#[validate(schema(function = "passwords_match", skip_on_field_errors = false))]
struct AccountFields {
    #[validate(custom(function = "validate_email"))]
    email: String,

    #[validate(custom(function = "validate_password"))]
    password: String,

    #[validate(length(min = 1, message = "Confirm Password is required"))]
    confirm_password: String,

    #[validate(custom(function = "validate_otp"))]
    otp: String,
}

fn passwords_match(fields: &AccountFields) -> Result<(), ValidationError> {
    if fields.confirm_password.is_empty() || fields.confirm_password == fields.password {
        return Ok(());
    }
    Err(ValidationError::new("must_match").with_message("Password do not match".into()))
}

impl StagedForm {
    pub fn check_email(&self) -> Result<String, String> {
        EmailOnly {
            email: self.email.clone(),
        }
        .validate()
        .map_err(|e| first_violation(&e, &["email"]).unwrap_or_default())?;

        Ok(self.email.clone())
    }

    pub fn check_account(&self) -> Result<AccountRequest, String> {
        let fields = AccountFields {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            otp: self.otp.clone(),
        };
        fields
            .validate()
            .map_err(|e| first_violation(&e, ACCOUNT_FIELDS).unwrap_or_default())?;

        Ok(AccountRequest {
            email: fields.email,
            password: fields.password,
            confirm_password: fields.confirm_password,
            otp: fields.otp,
        })
    }
}

/// Transient notifications carried across a redirect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticeQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NoticeQuery {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            notice: Some(message.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            notice: None,
            error: Some(message.into()),
        }
    }

    /// `path` with this notice appended as a query string.
    pub fn url(&self, path: &str) -> String {
        match serde_qs::to_string(self) {
            Ok(query) if !query.is_empty() => format!("{path}?{query}"),
            _ => path.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthPageQuery {
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthPageQuery {
    pub fn wants_signup(&self) -> bool {
        self.view.as_deref() == Some("signup")
    }
}
