//! Session store: authentication and role state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider is the only authority on whether someone is signed
//! in. Every provider notification goes through `SessionStore::on_auth_event`,
//! which rewrites both the in-memory `Session` and the persisted flag set.
//! Route guards read the resulting `Session` synchronously on each render.
//!
//! ROLE RESOLUTION
//! ===============
//! The cached `userRole` flag is the single source of truth when a principal
//! arrives; a missing or unreadable value resolves to `Role::Client`. The
//! auth event never looks at the email. Sign-in and registration forms seed
//! the cache before calling the provider (see `role_hint_for_email`).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::flags::{BrowserFlags, FlagStore, PersistedFlags};
use crate::net::identity::{IdentityError, IdentityProvider, Principal};

/// Sign-in email that maps to the lawyer role in the demo deployment.
pub const DEMO_LAWYER_EMAIL: &str = "lawyer@gmail.com";

/// Access role of a signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Client,
    Lawyer,
}

impl Role {
    /// Wire/storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Lawyer => "lawyer",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Lawyer => "Lawyer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "client" => Ok(Self::Client),
            "lawyer" => Ok(Self::Lawyer),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}

/// Resolve the role of a freshly authenticated principal from the cache.
#[must_use]
pub fn resolve_role(cached: Option<Role>) -> Role {
    cached.unwrap_or_default()
}

/// Placeholder role inference from a sign-in email.
///
/// This is a demo stub, not a security boundary: it must be replaced by a
/// real claims source before any production use.
#[must_use]
pub fn role_hint_for_email(email: &str) -> Role {
    if email.trim().eq_ignore_ascii_case(DEMO_LAWYER_EMAIL) {
        Role::Lawyer
    } else {
        Role::Client
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the first provider notification. Blocks routing.
    Unknown,
    Anonymous,
    Authenticated(Role),
}

/// Authenticated/role/loading triple governing route access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    /// Always `Some` when authenticated and `None` otherwise.
    pub role: Option<Role>,
    pub is_loading: bool,
    pub display_name: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Session {
    /// Initial state before the provider has reported anything.
    #[must_use]
    pub fn unknown() -> Self {
        Self { is_authenticated: false, role: None, is_loading: true, display_name: None }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { is_authenticated: false, role: None, is_loading: false, display_name: None }
    }

    #[must_use]
    pub fn authenticated(role: Role, display_name: impl Into<String>) -> Self {
        Self { is_authenticated: true, role: Some(role), is_loading: false, display_name: Some(display_name.into()) }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            return SessionPhase::Unknown;
        }
        match (self.is_authenticated, self.role) {
            (true, Some(role)) => SessionPhase::Authenticated(role),
            (true, None) => SessionPhase::Authenticated(Role::default()),
            (false, _) => SessionPhase::Anonymous,
        }
    }
}

/// Owns the current `Session` and its persisted mirror.
///
/// `on_auth_event` and the sign-out path are the only writers.
#[derive(Clone, Debug)]
pub struct SessionStore<F> {
    session: Session,
    flags: F,
}

impl<F: FlagStore> SessionStore<F> {
    pub fn new(flags: F) -> Self {
        Self { session: Session::unknown(), flags }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn flags(&self) -> &F {
        &self.flags
    }

    /// Flags left by a previous visit, for optimistic display only.
    pub fn cached_flags(&self) -> PersistedFlags {
        PersistedFlags::load(&self.flags)
    }

    /// Reconcile the session with a provider notification.
    pub fn on_auth_event(&mut self, principal: Option<&Principal>) {
        let Some(principal) = principal else {
            self.reset();
            return;
        };

        let role = resolve_role(PersistedFlags::load(&self.flags).role);
        let name = principal.display_name_or_handle();
        PersistedFlags { is_authenticated: true, role: Some(role), user_name: Some(name.clone()) }.save(&self.flags);
        self.session = Session::authenticated(role, name);
    }

    /// Return to the anonymous state and delete the persisted flags.
    pub fn reset(&mut self) {
        self.session = Session::anonymous();
        PersistedFlags::clear(&self.flags);
    }

    /// Apply the outcome of a provider sign-out.
    ///
    /// Failures are logged and leave the session untouched.
    ///
    /// # Errors
    ///
    /// Hands the provider error back to the caller.
    pub fn complete_sign_out(&mut self, result: Result<(), IdentityError>) -> Result<(), IdentityError> {
        match result {
            Ok(()) => {
                self.reset();
                Ok(())
            }
            Err(e) => {
                leptos::logging::warn!("sign-out failed: {e}");
                Err(e)
            }
        }
    }

    /// Sign out through `provider`, then reset on success.
    ///
    /// # Errors
    ///
    /// Returns the provider error; the session is unchanged in that case.
    pub async fn sign_out<P: IdentityProvider + ?Sized>(&mut self, provider: &P) -> Result<(), IdentityError> {
        let result = provider.sign_out().await;
        self.complete_sign_out(result)
    }
}

/// Session store shared through Leptos context.
///
/// Copyable handle; the store itself lives in a signal owned by the app shell.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    store: RwSignal<SessionStore<BrowserFlags>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self { store: RwSignal::new(SessionStore::new(BrowserFlags)) }
    }

    /// Current session (tracked).
    pub fn session(&self) -> Session {
        self.store.with(|s| s.session().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.store.with(|s| s.session().is_loading)
    }

    pub fn cached_flags(&self) -> PersistedFlags {
        self.store.with_untracked(SessionStore::cached_flags)
    }

    /// Storage backend, for forms that seed the cached role.
    pub fn flags(&self) -> BrowserFlags {
        BrowserFlags
    }

    /// Single update entry point for provider notifications.
    pub fn on_auth_event(&self, principal: Option<&Principal>) {
        self.store.update(|s| s.on_auth_event(principal));
    }

    /// Apply a finished provider sign-out.
    ///
    /// # Errors
    ///
    /// Returns the provider error unchanged.
    pub fn finish_sign_out(&self, result: Result<(), IdentityError>) -> Result<(), IdentityError> {
        let mut outcome = Ok(());
        self.store.update(|s| outcome = s.complete_sign_out(result));
        outcome
    }

    /// Fire-and-forget sign-out from an event handler.
    pub fn sign_out<P>(self, provider: P)
    where
        P: IdentityProvider + 'static,
    {
        leptos::task::spawn_local(async move {
            let result = provider.sign_out().await;
            let _ = self.finish_sign_out(result);
        });
    }
}
