use crate::Guest;
use crate::tests::create_test_state;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode, header},
};

#[tokio::test]
async fn test_guest_without_cookie_passes() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Guest::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_guest_with_stale_cookie_passes() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(header::COOKIE, format!("{}=expired", state.cookie.name))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Guest::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_signed_in_user_is_redirected_to_dashboard() {
    let state = create_test_state().await;
    let user = state
        .registrar
        .register("Alice", "a@x.com", "pw123")
        .await
        .unwrap();
    let token = state.sessions.bind(&user).await.unwrap();

    let request = Request::builder()
        .header(
            header::COOKIE,
            format!("{}={}", state.cookie.name, token.as_str()),
        )
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let rejection = Guest::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();

    assert_eq!(rejection.status(), StatusCode::SEE_OTHER);
    assert_eq!(rejection.headers()[header::LOCATION], "/dashboard");
}
