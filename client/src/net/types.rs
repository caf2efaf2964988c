//! Request DTOs for the identity endpoints.
//!
//! DESIGN
//! ======
//! Field names match the host's JSON bodies so serde round-trips need no
//! renaming on either side.

use serde::{Deserialize, Serialize};

use crate::state::session::Role;

/// Shortest password the host accepts at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /api/auth/sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Professional details collected when registering as a lawyer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawyerDetails {
    pub bar_number: String,
    pub specialization: String,
    pub years_of_experience: u32,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lawyer: Option<LawyerDetails>,
}
