//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and state transitions so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod identity;
