use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Affiliate,
}

impl Default for Role {
    fn default() -> Self {
        Role::Affiliate
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Affiliate => write!(f, "affiliate"),
        }
    }
}

/// Account profile row. Usernames are stored normalized (see
/// `service::account::normalize_username`); the raw form never reaches
/// this struct.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub must_change_password: bool,
}

impl Profile {
    /// New accounts start on a temporary password, so the flag is set
    /// until the identity provider reports a password change.
    pub fn new(username: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            role,
            must_change_password: true,
        }
    }
}
