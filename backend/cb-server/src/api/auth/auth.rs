//! Registration, login and logout handlers

use crate::api::validation::{validate_email, validate_password, validate_text};
use crate::{
    ApiResult, AppState, CurrentUser, FormResponse, Guest, LoginRequest, RegisterRequest,
    UserDto, UserResponse,
};

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// GET /register
pub async fn register_form(_guest: Guest) -> Json<FormResponse> {
    Json(FormResponse::register())
}

/// POST /register
///
/// Create an account. A duplicate email is reported as 409 `EMAIL_IN_USE`.
pub async fn register(
    _guest: Guest,
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    validate_text(&req.name, "name", state.validation.max_name_length)?;
    validate_email(&req.email, &state.validation)?;
    validate_password(&req.password)?;

    let user = state
        .registrar
        .register(req.name.trim(), &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserDto::from(user),
        }),
    ))
}

/// GET /login
pub async fn login_form(_guest: Guest) -> Json<FormResponse> {
    Json(FormResponse::login())
}

/// POST /login
///
/// Verify credentials and bind a new session to the response cookie. Every
/// credential failure produces the same 401 body.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Response> {
    validate_text(&req.email, "email", state.validation.max_email_length)?;

    state.login_limiter.check(&req.email)?;

    let user = state
        .verifier
        .verify_credentials(&req.email, &req.password)
        .await?;

    let token = state.sessions.bind(&user).await?;
    let cookie = state.cookie.issue(&token)?;
    info!("User {} logged in", user.id);

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie);

    Ok((
        headers,
        Json(UserResponse {
            user: UserDto::from(user),
        }),
    )
        .into_response())
}

/// POST /logout
///
/// Drop the session and clear the cookie, then send the browser to `/login`.
pub async fn logout(user: CurrentUser, State(state): State<AppState>) -> ApiResult<Response> {
    state.sessions.unbind(&user.token).await?;
    let cookie = state.cookie.clear()?;
    info!("User {} logged out", user.user_id);

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/login")).into_response())
}
