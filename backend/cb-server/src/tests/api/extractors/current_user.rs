use crate::CurrentUser;
use crate::tests::create_test_state;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode, header},
};

#[tokio::test]
async fn test_extractor_with_live_session() {
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
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    let current = result.unwrap();
    assert_eq!(current.user_id, user.id);
    assert_eq!(current.token, token);
}

#[tokio::test]
async fn test_extractor_redirects_to_login_without_cookie() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let rejection = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();

    assert_eq!(rejection.status(), StatusCode::SEE_OTHER);
    assert_eq!(rejection.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_extractor_redirects_to_login_with_unknown_token() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(header::COOKIE, format!("{}=forged", state.cookie.name))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let rejection = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();

    assert_eq!(rejection.status(), StatusCode::SEE_OTHER);
    assert_eq!(rejection.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_extractor_redirects_after_unbind() {
    let state = create_test_state().await;
    let user = state
        .registrar
        .register("Alice", "a@x.com", "pw123")
        .await
        .unwrap();
    let token = state.sessions.bind(&user).await.unwrap();
    state.sessions.unbind(&token).await.unwrap();

    let request = Request::builder()
        .header(
            header::COOKIE,
            format!("{}={}", state.cookie.name, token.as_str()),
        )
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_extractor_returns_503_when_database_closed() {
    let state = create_test_state().await;
    state.pool.close().await;

    let request = Request::builder()
        .header(header::COOKIE, format!("{}=anything", state.cookie.name))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let rejection = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap_err();

    assert_eq!(rejection.status(), StatusCode::SERVICE_UNAVAILABLE);
}
