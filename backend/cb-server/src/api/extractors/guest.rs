//! Route guard for pages only anonymous visitors may see

use crate::AppState;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

/// Marker for requests without a live session.
///
/// Signed-in users are redirected to `/dashboard`.
#[derive(Debug, Clone, Copy)]
pub struct Guest;

impl FromRequestParts<AppState> for Guest {
    type Rejection = Response;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(token) = state.cookie.read(&parts.headers) else {
                return Ok(Guest);
            };

            match state.sessions.resolve(&token).await {
                Ok(Some(_)) => Err(Redirect::to("/dashboard").into_response()),
                Ok(None) => Ok(Guest),
                Err(e) => {
                    // Guest pages stay reachable when the session store is down
                    log::warn!("Session lookup failed, treating request as guest: {}", e);
                    Ok(Guest)
                }
            }
        }
    }
}
