use crate::ApiError;
use crate::api::error::INVALID_CREDENTIALS_MESSAGE;

use cb_auth::AuthError;
use cb_core::CoreError;
use cb_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("name cannot be empty", "name");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_every_credential_failure_maps_to_same_401_body() {
    let failures = vec![
        AuthError::NoSuchUser {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::MissingPassword {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::CorruptAccount {
            user_id: "u1".into(),
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::WrongPassword {
            location: ErrorLocation::from(Location::caller()),
        },
    ];

    let mut bodies = Vec::new();
    for failure in failures {
        let response = ApiError::from(failure).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(body_json(response).await);
    }

    for json in &bodies {
        assert_eq!(json, &bodies[0]);
    }
    assert_eq!(bodies[0]["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(bodies[0]["error"]["message"], INVALID_CREDENTIALS_MESSAGE);
}

#[tokio::test]
async fn test_email_in_use_returns_409() {
    let error = ApiError::from(AuthError::EmailAlreadyInUse {
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "EMAIL_IN_USE");
}

#[tokio::test]
async fn test_rate_limit_returns_429_with_retry_after() {
    let error = ApiError::from(AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()["retry-after"], "60");
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_retryable_db_error_returns_503() {
    let error = ApiError::from(DbError::Timeout {
        message: "pool exhausted".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_constraint_violation_returns_500_without_details() {
    let error = ApiError::from(DbError::ConstraintViolation {
        message: "CHECK constraint failed: best_score".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(!json["error"]["message"].as_str().unwrap().contains("CHECK"));
}

#[tokio::test]
async fn test_storage_auth_error_uses_db_mapping() {
    let error = ApiError::from(AuthError::from(DbError::ConnectionLost {
        message: "pool closed".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    assert_eq!(error.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_negative_score_maps_to_validation_error() {
    let error = ApiError::from(CoreError::NegativeScore {
        value: -3,
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["field"], "score");
}
