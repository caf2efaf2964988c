//! Host configuration parsed from environment variables.
//!
//! `main` loads `.env` (if present) through `dotenvy` before calling
//! `ServerConfig::from_env`, so both real environment variables and a local
//! `.env` file are honoured. Real variables win.

use time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but its value could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
    /// Seed the demo lawyer account at startup.
    pub seed_demo_accounts: bool,
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cookie_secure: false,
            seed_demo_accounts: true,
            session_ttl: Duration::hours(DEFAULT_SESSION_TTL_HOURS),
        }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: default false
    /// - `SEED_DEMO_ACCOUNTS`: default true
    /// - `SESSION_TTL_HOURS`: default 24, must be positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for any set-but-unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for any set-but-unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| invalid("PORT", raw))?,
            None => defaults.port,
        };
        let cookie_secure = lookup_bool(&lookup, "COOKIE_SECURE")?.unwrap_or(defaults.cookie_secure);
        let seed_demo_accounts = lookup_bool(&lookup, "SEED_DEMO_ACCOUNTS")?.unwrap_or(defaults.seed_demo_accounts);
        let session_ttl = match lookup("SESSION_TTL_HOURS") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(hours) if hours > 0 => Duration::hours(hours),
                _ => return Err(invalid("SESSION_TTL_HOURS", raw)),
            },
            None => defaults.session_ttl,
        };

        Ok(Self { port, cookie_secure, seed_demo_accounts, session_ttl })
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { key, value }
}

/// Parse a boolean flag. Accepts `1/true/yes/on` and `0/false/no/off`,
/// case-insensitively.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn lookup_bool(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<bool>, ConfigError> {
    match lookup(key) {
        Some(raw) => parse_bool(&raw).map(Some).ok_or_else(|| invalid(key, raw)),
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
