//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared lists while reading session
//! state from the Leptos context provided by `app::App`.

pub mod appointment_list;
pub mod case_list;
pub mod footer;
pub mod guarded;
pub mod loading_screen;
pub mod navbar;
pub mod session_gate;
pub mod stat_card;
pub mod suggested_questions;
