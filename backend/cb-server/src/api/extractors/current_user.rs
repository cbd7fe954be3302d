//! Route guard for pages that need a signed-in user

use crate::{ApiError, AppState};

use cb_auth::SessionToken;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use uuid::Uuid;

/// The user bound to the request's session cookie.
///
/// Requests without a resolvable session are redirected to `/login`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub token: SessionToken,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(token) = state.cookie.read(&parts.headers) else {
                log::debug!("No session cookie on {}", parts.uri.path());
                return Err(Redirect::to("/login").into_response());
            };

            match state.sessions.resolve(&token).await {
                Ok(Some(user_id)) => Ok(CurrentUser { user_id, token }),
                Ok(None) => {
                    log::debug!("Stale session cookie on {}", parts.uri.path());
                    Err(Redirect::to("/login").into_response())
                }
                Err(e) => Err(ApiError::from(e).into_response()),
            }
        }
    }
}
