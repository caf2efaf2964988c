//! Identity provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs two things from the provider: a stream of
//! "current principal changed" notifications and a way to sign out.
//! `IdentityProvider` captures exactly that; `HttpIdentityProvider` backs it
//! with the host's `/api/auth/*` endpoints.
//!
//! Listener registration returns a `Subscription` guard. Dropping the guard
//! unregisters the listener, so a subscription lives exactly as long as the
//! component that owns it.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): no requests are made and no notifications are emitted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::types::RegisterRequest;

/// Signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Principal {
    /// Display name, falling back to the local part of the email.
    #[must_use]
    pub fn display_name_or_handle(&self) -> String {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.email.split('@').next().unwrap_or_default().to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account already exists for this email")]
    AccountExists,
    #[error("identity request failed: {0}")]
    Transport(String),
    #[error("identity provider returned status {0}")]
    Status(u16),
    #[error("identity provider is not available during server rendering")]
    Unavailable,
}

/// Listener invoked with the current principal (or `None` when signed out).
pub type AuthListener = Arc<dyn Fn(Option<Principal>) + Send + Sync>;

/// Provider operations the session store depends on.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Register `on_change`; the listener stays registered until the
    /// returned guard is dropped.
    fn subscribe(&self, on_change: AuthListener) -> Subscription;

    /// End the provider-side session.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider rejects or cannot be reached.
    async fn sign_out(&self) -> Result<(), IdentityError>;
}

/// Guard for a registered listener. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Unsubscribe now instead of at drop.
    pub fn cancel(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, AuthListener)>,
}

/// Listener registry shared by provider implementations.
#[derive(Clone, Default)]
pub struct ListenerSet {
    inner: Arc<Mutex<Listeners>>,
}

impl ListenerSet {
    /// Register a listener and return its guard.
    pub fn add(&self, listener: AuthListener) -> Subscription {
        let id = {
            let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = guard.next_id;
            guard.next_id += 1;
            guard.entries.push((id, listener));
            id
        };
        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            let mut guard = inner.lock().unwrap_or_else(PoisonError::into_inner);
            guard.entries.retain(|(entry_id, _)| *entry_id != id);
        })
    }

    /// Notify every registered listener.
    ///
    /// Listeners run outside the lock so they may subscribe or unsubscribe.
    pub fn notify(&self, principal: Option<&Principal>) {
        let listeners: Vec<AuthListener> = {
            let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            guard.entries.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(principal.cloned());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identity provider backed by the host's `/api/auth/*` endpoints.
#[derive(Clone, Default)]
pub struct HttpIdentityProvider {
    listeners: ListenerSet,
}

impl HttpIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the current principal and notify listeners.
    pub fn refresh(&self) {
        #[cfg(feature = "hydrate")]
        {
            let listeners = self.listeners.clone();
            leptos::task::spawn_local(async move {
                let principal = fetch_current_principal().await;
                listeners.notify(principal.as_ref());
            });
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` on rejection, `Transport`/`Status` otherwise.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Principal, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "password": password });
            let principal = post_for_principal("/api/auth/sign-in", &body).await?;
            self.listeners.notify(Some(&principal));
            Ok(principal)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(IdentityError::Unavailable)
        }
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// `AccountExists` when the email is taken, `Transport`/`Status` otherwise.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Principal, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let principal = post_for_principal("/api/auth/register", request).await?;
            self.listeners.notify(Some(&principal));
            Ok(principal)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(IdentityError::Unavailable)
        }
    }
}

impl IdentityProvider for HttpIdentityProvider {
    fn subscribe(&self, on_change: AuthListener) -> Subscription {
        let subscription = self.listeners.add(on_change);
        self.refresh();
        subscription
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/sign-out")
                .send()
                .await
                .map_err(|e| IdentityError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(IdentityError::Status(resp.status()));
            }
            self.listeners.notify(None);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(IdentityError::Unavailable)
        }
    }
}

/// Map a provider HTTP status to an error.
#[must_use]
pub fn status_to_error(status: u16) -> IdentityError {
    match status {
        401 => IdentityError::InvalidCredentials,
        409 => IdentityError::AccountExists,
        other => IdentityError::Status(other),
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_current_principal() -> Option<Principal> {
    let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<Principal>().await.ok()
}

#[cfg(feature = "hydrate")]
async fn post_for_principal<B: Serialize>(url: &str, body: &B) -> Result<Principal, IdentityError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| IdentityError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(status_to_error(resp.status()));
    }
    resp.json::<Principal>()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))
}
