use crate::CookieSettings;

use cb_auth::SessionToken;

use axum::http::{HeaderMap, HeaderValue, header};
use googletest::prelude::*;

fn settings(secure: bool) -> CookieSettings {
    CookieSettings {
        name: "clickboard_session".into(),
        secure,
        max_age_secs: 3600,
    }
}

fn headers_with_cookie(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static(value));
    headers
}

#[test]
fn given_cookie_among_others_when_reading_then_finds_session() {
    let headers = headers_with_cookie("theme=dark; clickboard_session=abc123; lang=en");

    let token = settings(false).read(&headers);

    assert_that!(token, some(eq(&SessionToken::from("abc123"))));
}

#[test]
fn given_no_cookie_header_when_reading_then_none() {
    assert_that!(settings(false).read(&HeaderMap::new()), none());
}

#[test]
fn given_empty_session_value_when_reading_then_none() {
    let headers = headers_with_cookie("clickboard_session=");

    assert_that!(settings(false).read(&headers), none());
}

#[test]
fn given_similarly_named_cookie_when_reading_then_ignored() {
    let headers = headers_with_cookie("clickboard_session_old=abc");

    assert_that!(settings(false).read(&headers), none());
}

#[test]
fn given_token_when_issuing_then_cookie_is_http_only_with_max_age() {
    let value = settings(false)
        .issue(&SessionToken::from("abc123"))
        .unwrap();
    let value = value.to_str().unwrap();

    assert!(value.starts_with("clickboard_session=abc123;"));
    assert!(value.contains("HttpOnly"));
    assert!(value.contains("Max-Age=3600"));
    assert!(!value.contains("Secure"));
}

#[test]
fn given_secure_settings_when_clearing_then_expires_now_and_secure() {
    let value = settings(true).clear().unwrap();
    let value = value.to_str().unwrap();

    assert!(value.starts_with("clickboard_session=;"));
    assert!(value.contains("Max-Age=0"));
    assert!(value.ends_with("; Secure"));
}
