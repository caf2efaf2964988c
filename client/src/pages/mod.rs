//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control lives in the route table, not in pages.

pub mod cases;
pub mod client_dashboard;
pub mod dashboard;
pub mod home;
pub mod lawyer_dashboard;
pub mod legal_ai;
pub mod login;
pub mod not_found;
pub mod register;
