//! Development identity provider: accounts, password checks and sessions.
//!
//! ARCHITECTURE
//! ============
//! Everything lives in memory behind the `AppState` lock; a restart forgets
//! every account and session except the seeded demo lawyer. Passwords are
//! stored as `sha256(salt || password)` with a random per-account salt.
//!
//! Session tokens are opaque random hex strings handed to the browser in an
//! HttpOnly cookie. Expired sessions are dropped lazily on lookup and in
//! bulk by `purge_expired`.

use std::collections::HashMap;
use std::fmt::Write;

use client::net::identity::Principal;
use client::net::types::{LawyerDetails, MIN_PASSWORD_LEN, RegisterRequest};
use client::state::session::{DEMO_LAWYER_EMAIL, Role};
use rand::Rng;
use sha2::{Digest, Sha256};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

pub const DEMO_LAWYER_PASSWORD: &str = "lawyer123";
const DEMO_LAWYER_NAME: &str = "Demo Lawyer";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityServiceError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account already exists for this email")]
    AccountExists,
    #[error("invalid registration: {0}")]
    InvalidInput(&'static str),
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Lowercase and sanity-check an email address.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Stored account.
#[derive(Debug, Clone)]
pub struct Account {
    pub uid: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub lawyer: Option<LawyerDetails>,
    salt: String,
    password_hash: String,
}

impl Account {
    fn new(email: String, display_name: String, role: Role, lawyer: Option<LawyerDetails>, password: &str) -> Self {
        let salt = generate_salt();
        let password_hash = hash_password(&salt, password);
        Self { uid: Uuid::new_v4(), email, display_name, role, lawyer, salt, password_hash }
    }

    fn password_matches(&self, password: &str) -> bool {
        hash_password(&self.salt, password) == self.password_hash
    }

    /// Practice area of a lawyer account, if one was registered.
    #[must_use]
    pub fn specialization(&self) -> Option<&str> {
        self.lawyer.as_ref().map(|details| details.specialization.as_str())
    }

    #[must_use]
    pub fn principal(&self) -> Principal {
        Principal { uid: self.uid.to_string(), email: self.email.clone(), display_name: Some(self.display_name.clone()) }
    }
}

#[derive(Debug, Clone)]
struct SessionRecord {
    email: String,
    expires_at: OffsetDateTime,
}

/// Accounts keyed by normalized email, plus live sessions keyed by token.
#[derive(Debug)]
pub struct IdentityStore {
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, SessionRecord>,
    session_ttl: Duration,
}

impl IdentityStore {
    #[must_use]
    pub fn new(session_ttl: Duration) -> Self {
        Self { accounts: HashMap::new(), sessions: HashMap::new(), session_ttl }
    }

    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn account(&self, email: &str) -> Option<&Account> {
        self.accounts.get(&normalize_email(email)?)
    }

    /// Create the demo lawyer account unless it already exists.
    pub fn seed_demo_accounts(&mut self) {
        if self.accounts.contains_key(DEMO_LAWYER_EMAIL) {
            return;
        }
        let account = Account::new(
            DEMO_LAWYER_EMAIL.to_owned(),
            DEMO_LAWYER_NAME.to_owned(),
            Role::Lawyer,
            None,
            DEMO_LAWYER_PASSWORD,
        );
        self.accounts.insert(account.email.clone(), account);
    }

    /// Create an account from a registration request.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for missing or malformed fields, `AccountExists` when
    /// the email is already registered.
    pub fn register(&mut self, request: &RegisterRequest) -> Result<Principal, IdentityServiceError> {
        let full_name = request.full_name.trim();
        if full_name.is_empty() {
            return Err(IdentityServiceError::InvalidInput("full name is required"));
        }
        let email = normalize_email(&request.email).ok_or(IdentityServiceError::InvalidInput("invalid email"))?;
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(IdentityServiceError::InvalidInput("password is too short"));
        }
        let lawyer = match (request.role, &request.lawyer) {
            (Role::Lawyer, None) => return Err(IdentityServiceError::InvalidInput("lawyer details are required")),
            (Role::Lawyer, Some(details)) if details.bar_number.trim().is_empty() => {
                return Err(IdentityServiceError::InvalidInput("bar number is required"));
            }
            (Role::Lawyer, Some(details)) => Some(details.clone()),
            (Role::Client, _) => None,
        };
        if self.accounts.contains_key(&email) {
            return Err(IdentityServiceError::AccountExists);
        }

        let account = Account::new(email.clone(), full_name.to_owned(), request.role, lawyer, &request.password);
        let principal = account.principal();
        self.accounts.insert(email, account);
        Ok(principal)
    }

    /// Check credentials.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for an unknown email or a wrong password.
    pub fn verify(&self, email: &str, password: &str) -> Result<Principal, IdentityServiceError> {
        let account = self.account(email).ok_or(IdentityServiceError::InvalidCredentials)?;
        if !account.password_matches(password) {
            return Err(IdentityServiceError::InvalidCredentials);
        }
        Ok(account.principal())
    }

    /// Open a session for `email`, returning its token.
    pub fn create_session(&mut self, email: &str, now: OffsetDateTime) -> String {
        let token = generate_token();
        let record = SessionRecord { email: email.to_ascii_lowercase(), expires_at: now + self.session_ttl };
        self.sessions.insert(token.clone(), record);
        token
    }

    /// Principal for a live session. Expired sessions are removed.
    pub fn principal_for_token(&mut self, token: &str, now: OffsetDateTime) -> Option<Principal> {
        let record = self.sessions.get(token)?;
        if record.expires_at <= now {
            self.sessions.remove(token);
            return None;
        }
        self.accounts.get(&record.email).map(Account::principal)
    }

    /// End a session. Unknown tokens are ignored.
    pub fn delete_session(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub fn purge_expired(&mut self, now: OffsetDateTime) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, record| record.expires_at > now);
        before - self.sessions.len()
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
