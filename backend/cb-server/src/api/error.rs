//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use cb_auth::AuthError;
use cb_core::CoreError;
use cb_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Body of every credential failure, whatever the underlying reason
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "EMAIL_IN_USE", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Login refused (401). The reason is logged, never returned.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Registration for an address that already has an account (409)
    #[error("Email already in use {location}")]
    EmailInUse { location: ErrorLocation },

    /// Too many login attempts (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        retry_after_secs: u64,
        location: ErrorLocation,
    },

    /// Transient storage failure; the client may retry (503)
    #[error("Service unavailable: {message} {location}")]
    ServiceUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body, retry_after) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
                None,
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: INVALID_CREDENTIALS_MESSAGE.into(),
                    field: None,
                },
                None,
            ),
            ApiError::EmailInUse { .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "EMAIL_IN_USE".into(),
                    message: "An account with that email already exists".into(),
                    field: Some("email".into()),
                },
                None,
            ),
            ApiError::TooManyRequests {
                message,
                retry_after_secs,
                ..
            } => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiErrorBody {
                    code: "RATE_LIMITED".into(),
                    message,
                    field: None,
                },
                Some(retry_after_secs),
            ),
            ApiError::ServiceUnavailable { ref message, .. } => {
                log::error!("{}", self);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiErrorBody {
                        code: "SERVICE_UNAVAILABLE".into(),
                        message: message.clone(),
                        field: None,
                    },
                    None,
                )
            }
            ApiError::Internal { ref message, .. } => {
                log::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".into(),
                        message: message.clone(),
                        field: None,
                    },
                    None,
                )
            }
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        if e.is_retryable() {
            ApiError::ServiceUnavailable {
                message: "Database is busy, try again shortly".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

/// Convert authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        if e.is_credential_failure() {
            log::warn!("Login refused ({}): {}", e.error_code(), e);
            return ApiError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            };
        }

        match e {
            AuthError::EmailAlreadyInUse { .. } => ApiError::EmailInUse {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::TooManyRequests {
                message: format!(
                    "Too many login attempts: {} per {}s allowed",
                    limit, window_secs
                ),
                retry_after_secs: window_secs,
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Storage { source, .. } => ApiError::from(source),
            other => {
                log::error!("Authentication error: {}", other);
                ApiError::Internal {
                    message: "Authentication failed unexpectedly".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NegativeScore { value, .. } => ApiError::Validation {
                message: format!("score must not be negative, got {}", value),
                field: Some("score".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
