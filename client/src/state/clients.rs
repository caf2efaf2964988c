//! Client directory entries shown to lawyers.

use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined_at: Date,
    pub cases_count: u32,
}
