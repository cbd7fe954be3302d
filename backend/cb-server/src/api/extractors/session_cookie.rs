//! Session cookie parsing and `Set-Cookie` construction

use crate::{ApiError, ApiResult};

use cb_auth::SessionToken;

use std::panic::Location;

use axum::http::{HeaderMap, HeaderValue, header};
use error_location::ErrorLocation;

/// How the session cookie is written
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
    pub max_age_secs: u64,
}

impl CookieSettings {
    /// Find this cookie in the request's `Cookie` headers.
    ///
    /// Empty values count as absent.
    pub fn read(&self, headers: &HeaderMap) -> Option<SessionToken> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, value)| *name == self.name && !value.is_empty())
            .map(|(_, value)| SessionToken::from(value))
    }

    /// `Set-Cookie` value that stores `token` in the browser
    pub fn issue(&self, token: &SessionToken) -> ApiResult<HeaderValue> {
        self.header_value(token.as_str(), self.max_age_secs)
    }

    /// `Set-Cookie` value that removes the cookie
    pub fn clear(&self) -> ApiResult<HeaderValue> {
        self.header_value("", 0)
    }

    #[track_caller]
    fn header_value(&self, value: &str, max_age_secs: u64) -> ApiResult<HeaderValue> {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name, value, max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }

        HeaderValue::from_str(&cookie).map_err(|e| ApiError::Internal {
            message: format!("Invalid session cookie header: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
