use regex::Regex;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

pub const PASSWORD_RULE_MESSAGE: &str = "Password must contain uppercase, lowercase, number, special character and minimum 8 character";

const PASSWORD_SPECIALS: &[char] = &['@', '$', '!', '%', '?', '&'];

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(violation("required", "Email is required"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(violation("email", "Invalid email"));
    }
    Ok(())
}

/// At least eight characters drawn from letters, digits and `@$!%?&`, with
/// one of each class present.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(violation("required", "Password is required"));
    }

    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(&c));
    let strong = password.chars().count() >= 8
        && allowed
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(&c));

    if strong {
        Ok(())
    } else {
        Err(violation("password_strength", PASSWORD_RULE_MESSAGE))
    }
}

/// Exactly six characters, reported the way the recovery dialog words it.
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    let len = otp.chars().count();
    let message = match len {
        0 => "OTP is required",
        1..=5 => "Invalid OTP<6",
        6 => return Ok(()),
        _ => "Invalid OTP>6",
    };

    Err(violation("otp", message))
}

/// First failing message, walking `fields` in form order so the user sees
/// the topmost problem. Struct-level failures live under `"__all__"`.
pub fn first_violation(errors: &ValidationErrors, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| match errors.errors().get(*field) {
        Some(ValidationErrorsKind::Field(list)) => list.first().map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        }),
        _ => None,
    })
}
