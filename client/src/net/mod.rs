//! Network boundary modules.
//!
//! ARCHITECTURE
//! ============
//! `identity` talks to the identity provider, `api` serves page data, and
//! `types` holds the request bodies shared with the host.

pub mod api;
pub mod identity;
pub mod mock;
pub mod types;
