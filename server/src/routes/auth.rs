//! Auth routes: sign-in, registration, current principal and sign-out.
//!
//! The browser never sees the session token outside the HttpOnly cookie.
//! Every handler answers with the principal JSON the client's identity
//! provider expects, or a bare status code.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{RegisterRequest, SignInRequest};
use client::state::session::Role;
use time::{Duration, OffsetDateTime};

use crate::services::identity::IdentityServiceError;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "legalcloud_session";

/// HTTP status for an identity service failure.
#[must_use]
pub fn identity_error_to_status(error: &IdentityServiceError) -> StatusCode {
    match error {
        IdentityServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        IdentityServiceError::AccountExists => StatusCode::CONFLICT,
        IdentityServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
    }
}

fn session_cookie(token: String, secure: bool, ttl: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(ttl)
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .filter(|token| !token.is_empty())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/sign-in`: verify credentials, open a session.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignInRequest>) -> Response {
    let mut identity = state.identity.write().await;
    let principal = match identity.verify(&body.email, &body.password) {
        Ok(principal) => principal,
        Err(e) => {
            tracing::info!(error = %e, "sign-in rejected");
            return identity_error_to_status(&e).into_response();
        }
    };
    let (role, specialization) = identity
        .account(&principal.email)
        .map_or((Role::default(), None), |account| (account.role, account.specialization().map(str::to_owned)));
    let token = identity.create_session(&principal.email, OffsetDateTime::now_utc());
    drop(identity);

    tracing::info!(uid = %principal.uid, role = %role, specialization = ?specialization, "signed in");
    let jar = jar.add(session_cookie(token, state.config.cookie_secure, state.config.session_ttl));
    (jar, Json(principal)).into_response()
}

/// `POST /api/auth/register`: create an account and sign in as it.
pub async fn register(State(state): State<AppState>, jar: CookieJar, Json(body): Json<RegisterRequest>) -> Response {
    let mut identity = state.identity.write().await;
    let principal = match identity.register(&body) {
        Ok(principal) => principal,
        Err(e) => {
            tracing::info!(error = %e, "registration rejected");
            return identity_error_to_status(&e).into_response();
        }
    };
    let token = identity.create_session(&principal.email, OffsetDateTime::now_utc());
    drop(identity);

    tracing::info!(uid = %principal.uid, role = %body.role, "account registered");
    let jar = jar.add(session_cookie(token, state.config.cookie_secure, state.config.session_ttl));
    (StatusCode::CREATED, jar, Json(principal)).into_response()
}

/// `GET /api/auth/me`: principal for the session cookie.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(token) = session_token(&jar) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let principal = state
        .identity
        .write()
        .await
        .principal_for_token(&token, OffsetDateTime::now_utc());
    match principal {
        Some(principal) => Json(principal).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

/// `POST /api/auth/sign-out`: delete session, clear cookie.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = session_token(&jar) {
        if state.identity.write().await.delete_session(&token) {
            tracing::info!("signed out");
        }
    }
    let jar = jar.add(cleared_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
