//! Persisted flag set mirroring the session for reload continuity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flags are a cache, never a source of truth. They are read once at
//! startup so the shell can greet a returning user before the identity
//! provider answers, and they are overwritten by every auth event.

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

use std::cell::RefCell;
use std::collections::HashMap;

use super::session::Role;

pub const AUTHENTICATED_KEY: &str = "isAuthenticated";
pub const ROLE_KEY: &str = "userRole";
pub const NAME_KEY: &str = "userName";

/// String key-value storage backing the persisted flags.
///
/// Writes are best-effort: a backend that cannot store a value drops it.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed view of the three persisted keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedFlags {
    pub is_authenticated: bool,
    pub role: Option<Role>,
    pub user_name: Option<String>,
}

impl PersistedFlags {
    /// Read the flags. Unknown role strings read as `None`.
    pub fn load<F: FlagStore + ?Sized>(store: &F) -> Self {
        Self {
            is_authenticated: store.get(AUTHENTICATED_KEY).is_some_and(|v| v == "true"),
            role: store.get(ROLE_KEY).and_then(|v| v.parse().ok()),
            user_name: store.get(NAME_KEY).filter(|v| !v.is_empty()),
        }
    }

    /// Write every flag, removing keys whose value is absent.
    pub fn save<F: FlagStore + ?Sized>(&self, store: &F) {
        if self.is_authenticated {
            store.set(AUTHENTICATED_KEY, "true");
        } else {
            store.remove(AUTHENTICATED_KEY);
        }
        match self.role {
            Some(role) => store.set(ROLE_KEY, role.as_str()),
            None => store.remove(ROLE_KEY),
        }
        match &self.user_name {
            Some(name) => store.set(NAME_KEY, name),
            None => store.remove(NAME_KEY),
        }
    }

    /// Delete all three keys.
    pub fn clear<F: FlagStore + ?Sized>(store: &F) {
        store.remove(AUTHENTICATED_KEY);
        store.remove(ROLE_KEY);
        store.remove(NAME_KEY);
    }
}

/// Seed the cached role ahead of a sign-in so the next auth event picks it up.
///
/// Returns the raw value it replaced, for `restore_role`.
pub fn remember_role<F: FlagStore + ?Sized>(store: &F, role: Role) -> Option<String> {
    let previous = store.get(ROLE_KEY);
    store.set(ROLE_KEY, role.as_str());
    previous
}

/// Undo a seeded role after a failed sign-in, putting back whatever was
/// cached before. A signed-in user keeps their role.
pub fn restore_role<F: FlagStore + ?Sized>(store: &F, previous: Option<String>) {
    match previous {
        Some(value) => store.set(ROLE_KEY, &value),
        None => store.remove(ROLE_KEY),
    }
}

/// Browser `localStorage` backend.
///
/// Outside the browser (SSR) every read misses and every write is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFlags;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl FlagStore for BrowserFlags {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryFlags {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl FlagStore for MemoryFlags {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
