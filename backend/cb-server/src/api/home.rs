use crate::CurrentUser;

use axum::response::{IntoResponse, Redirect, Response};

/// GET /
///
/// Send signed-in users to their dashboard and everyone else to the login form.
pub async fn home(user: Result<CurrentUser, Response>) -> Response {
    match user {
        Ok(_) => Redirect::to("/dashboard").into_response(),
        Err(rejection) => rejection,
    }
}
