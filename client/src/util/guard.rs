//! Route guard: render, redirect to login, or redirect to the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its view in `components::guarded::Guarded`,
//! which evaluates `decide_for_session` on each render. The decision is a
//! pure function of the current session, so it cannot go stale relative to
//! the session store.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, Session};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Default landing route for authenticated users.
pub const LANDING_PATH: &str = "/dashboard";
pub const CASES_PATH: &str = "/cases";
pub const LEGAL_AI_PATH: &str = "/legal-ai";
pub const LAWYER_PATH: &str = "/lawyer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(String),
    /// Session not yet known; nothing may be decided.
    Pending,
}

/// Core guard contract.
///
/// 1. Not authenticated: redirect to `redirect_path`.
/// 2. Wrong role: redirect to the landing page, never to login.
/// 3. Otherwise render.
#[must_use]
pub fn decide(
    is_authenticated: bool,
    role: Option<Role>,
    required_role: Option<Role>,
    redirect_path: &str,
) -> RouteDecision {
    if !is_authenticated {
        return RouteDecision::Redirect(redirect_path.to_owned());
    }
    if let Some(required) = required_role {
        if role != Some(required) {
            return RouteDecision::Redirect(LANDING_PATH.to_owned());
        }
    }
    RouteDecision::Render
}

/// `decide` against a live session, deferring while it is still loading.
#[must_use]
pub fn decide_for_session(session: &Session, required_role: Option<Role>, redirect_path: &str) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Pending;
    }
    decide(session.is_authenticated, session.role, required_role, redirect_path)
}

/// Access rule attached to a route path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

impl Access {
    #[must_use]
    pub fn required_role(self) -> Option<Role> {
        match self {
            Self::Role(role) => Some(role),
            Self::Public | Self::Authenticated => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub path: &'static str,
    pub access: Access,
}

/// Static route policy. Paths not listed are public.
pub const ROUTE_POLICY: &[RouteRule] = &[
    RouteRule { path: HOME_PATH, access: Access::Public },
    RouteRule { path: LOGIN_PATH, access: Access::Public },
    RouteRule { path: REGISTER_PATH, access: Access::Public },
    RouteRule { path: LANDING_PATH, access: Access::Authenticated },
    RouteRule { path: CASES_PATH, access: Access::Authenticated },
    RouteRule { path: LEGAL_AI_PATH, access: Access::Authenticated },
    RouteRule { path: LAWYER_PATH, access: Access::Role(Role::Lawyer) },
];

fn normalize(path: &str) -> &str {
    let trimmed = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Access rule for `path`, ignoring query, fragment and trailing slashes.
#[must_use]
pub fn access_for(path: &str) -> Access {
    let path = normalize(path);
    ROUTE_POLICY
        .iter()
        .find(|rule| rule.path == path)
        .map_or(Access::Public, |rule| rule.access)
}

/// Full decision for an access rule. Public routes always render.
#[must_use]
pub fn decide_access(session: &Session, access: Access, redirect_path: &str) -> RouteDecision {
    match access {
        Access::Public => RouteDecision::Render,
        Access::Authenticated | Access::Role(_) => {
            decide_for_session(session, access.required_role(), redirect_path)
        }
    }
}

/// Full decision for a path under the static policy.
#[must_use]
pub fn decide_path(session: &Session, path: &str) -> RouteDecision {
    decide_access(session, access_for(path), LOGIN_PATH)
}
