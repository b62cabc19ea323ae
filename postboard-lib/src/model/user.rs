//! User types

use serde::Deserialize;
use serde::Serialize;

/// An author/user as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned id.
    pub id: u64,
    /// Full display name.
    pub name: String,
    /// Login handle.
    pub username: String,
    /// Contact email address.
    pub email: String,
}
