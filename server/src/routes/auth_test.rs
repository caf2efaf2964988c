use axum::http::header::SET_COOKIE;
use client::net::identity::Principal;
use client::state::session::{DEMO_LAWYER_EMAIL, Role};

use super::*;
use crate::services::identity::DEMO_LAWYER_PASSWORD;
use crate::state::test_helpers::{empty_app_state, test_app_state};

fn sign_in_body(email: &str, password: &str) -> Json<SignInRequest> {
    Json(SignInRequest { email: email.to_owned(), password: password.to_owned() })
}

fn register_body(email: &str) -> Json<RegisterRequest> {
    Json(RegisterRequest {
        full_name: "Jane Doe".to_owned(),
        email: email.to_owned(),
        password: "hunter22".to_owned(),
        role: Role::Client,
        lawyer: None,
    })
}

fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Token from a `Set-Cookie: legalcloud_session=<token>; ...` header.
fn token_from(response: &Response) -> String {
    let header = set_cookie(response);
    let pair = header.split(';').next().unwrap_or_default();
    pair.strip_prefix(&format!("{COOKIE_NAME}=")).unwrap_or_default().to_owned()
}

fn jar_with(token: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(COOKIE_NAME, token.to_owned()))
}

async fn principal_from(response: Response) -> Principal {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// identity_error_to_status
// =============================================================================

#[test]
fn error_status_mapping() {
    assert_eq!(identity_error_to_status(&IdentityServiceError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(identity_error_to_status(&IdentityServiceError::AccountExists), StatusCode::CONFLICT);
    assert_eq!(identity_error_to_status(&IdentityServiceError::InvalidInput("x")), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_attributes() {
    let cookie = session_cookie("abc".to_owned(), true, Duration::hours(24));
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.secure(), Some(false));
}

#[test]
fn empty_cookie_is_no_session() {
    assert_eq!(session_token(&jar_with("")), None);
    assert_eq!(session_token(&CookieJar::new()), None);
    assert_eq!(session_token(&jar_with("t1")).as_deref(), Some("t1"));
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn demo_lawyer_signs_in() {
    let state = test_app_state();
    let response = sign_in(State(state), CookieJar::new(), sign_in_body(DEMO_LAWYER_EMAIL, DEMO_LAWYER_PASSWORD)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with(&format!("{COOKIE_NAME}=")));
    assert!(cookie.contains("HttpOnly"));
    assert_eq!(token_from(&response).len(), 64);

    let principal = principal_from(response).await;
    assert_eq!(principal.email, DEMO_LAWYER_EMAIL);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let state = test_app_state();
    let response = sign_in(State(state), CookieJar::new(), sign_in_body(DEMO_LAWYER_EMAIL, "nope")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&response).is_empty());
}

#[tokio::test]
async fn register_creates_session() {
    let state = empty_app_state();
    let response = register(State(state.clone()), CookieJar::new(), register_body("new@example.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let token = token_from(&response);

    let me_response = me(State(state), jar_with(&token)).await;
    assert_eq!(me_response.status(), StatusCode::OK);
    let principal = principal_from(me_response).await;
    assert_eq!(principal.email, "new@example.com");
    assert_eq!(principal.display_name.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let state = empty_app_state();
    let first = register(State(state.clone()), CookieJar::new(), register_body("dup@example.com")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = register(State(state), CookieJar::new(), register_body("DUP@example.com")).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_registration_is_bad_request() {
    let state = empty_app_state();
    let Json(mut body) = register_body("bad@example.com");
    body.password = "abc".to_owned();
    let response = register(State(state), CookieJar::new(), Json(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_without_cookie_is_unauthorized() {
    let state = test_app_state();
    assert_eq!(me(State(state.clone()), CookieJar::new()).await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(me(State(state), jar_with("forged")).await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn sign_out_ends_session_and_clears_cookie() {
    let state = test_app_state();
    let response =
        sign_in(State(state.clone()), CookieJar::new(), sign_in_body(DEMO_LAWYER_EMAIL, DEMO_LAWYER_PASSWORD)).await;
    let token = token_from(&response);

    let out = sign_out(State(state.clone()), jar_with(&token)).await.into_response();
    assert_eq!(out.status(), StatusCode::NO_CONTENT);
    assert!(set_cookie(&out).contains("Max-Age=0"));
    assert_eq!(state.identity.read().await.session_count(), 0);

    assert_eq!(me(State(state), jar_with(&token)).await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn sign_out_without_session_still_succeeds() {
    let state = test_app_state();
    let out = sign_out(State(state), CookieJar::new()).await.into_response();
    assert_eq!(out.status(), StatusCode::NO_CONTENT);
}
