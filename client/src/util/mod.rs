//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing policy and formatting concerns from page
//! and component logic to improve reuse and testability.

pub mod format;
pub mod guard;
pub mod markdown;
