#![allow(dead_code)]

//! Test infrastructure for cb-server HTTP tests

use cb_config::Config;
use cb_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    cb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Config with the cheapest bcrypt cost so the suite stays fast
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.bcrypt_cost = 4;
    config
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await, &test_config())
}

pub async fn create_test_app_state_with(config: &Config) -> AppState {
    AppState::new(create_test_pool().await, config)
}

/// Send one request through a fresh router over `state`
pub async fn send(state: &AppState, request: Request<Body>) -> Response<Body> {
    build_router(state.clone())
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub fn json_request(method: &str, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// `name=value` pair from the response's `Set-Cookie` header, ready to send back
pub fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie
        .split(';')
        .next()
        .unwrap()
        .trim()
        .to_string()
}

pub async fn register_user(state: &AppState, name: &str, email: &str, password: &str) {
    let response = send(
        state,
        json_request(
            "POST",
            "/register",
            json!({ "name": name, "email": email, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), 201, "registration of {email} failed");
}

/// Register and log in, returning the session cookie
pub async fn signed_in_user(state: &AppState, name: &str, email: &str) -> String {
    register_user(state, name, email, "pw123").await;

    let response = send(
        state,
        json_request(
            "POST",
            "/login",
            json!({ "email": email, "password": "pw123" }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), 200, "login of {email} failed");

    session_cookie(&response)
}

pub async fn play(state: &AppState, cookie: &str, score: i64) -> Response<Body> {
    send(
        state,
        json_request("POST", "/game", json!({ "score": score }), Some(cookie)),
    )
    .await
}
