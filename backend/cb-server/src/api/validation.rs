//! Input checks applied before a request reaches the domain

use crate::{ApiError, ApiResult};

use cb_config::ValidationConfig;
use cb_core::Score;

/// Non-empty after trimming and no longer than `max_length` characters
#[track_caller]
pub fn validate_text(value: &str, field: &str, max_length: usize) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(
            format!("{} cannot be empty", field),
            field,
        ));
    }

    if value.chars().count() > max_length {
        return Err(ApiError::validation(
            format!("{} must not exceed {} characters", field, max_length),
            field,
        ));
    }

    Ok(())
}

/// Loose shape check: one '@' with something on both sides
#[track_caller]
pub fn validate_email(email: &str, limits: &ValidationConfig) -> ApiResult<()> {
    validate_text(email, "email", limits.max_email_length)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ApiError::validation("email must contain '@'", "email")),
    }
}

#[track_caller]
pub fn validate_password(password: &str) -> ApiResult<()> {
    if password.is_empty() {
        return Err(ApiError::validation("password cannot be empty", "password"));
    }
    Ok(())
}

/// Reject negative scores and anything above the configured ceiling
#[track_caller]
pub fn validate_score(raw: i64, limits: &ValidationConfig) -> ApiResult<Score> {
    let score = Score::new(raw)?;

    if score.value() > limits.max_score {
        return Err(ApiError::validation(
            format!("score must not exceed {}", limits.max_score),
            "score",
        ));
    }

    Ok(score)
}
