//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `cases`, `appointments`, etc.) so
//! individual pages can depend on small focused models. Only `session` is
//! shared through context; the rest is page-local.

pub mod appointments;
pub mod cases;
pub mod clients;
pub mod flags;
pub mod legal_ai;
pub mod session;
