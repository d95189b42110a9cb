use serde::{Deserialize, Serialize};

pub type UserId = i64;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A user record as resolved from the directory.
///
/// Foreign data: this crate only reads users, it never creates or mutates
/// them. Payment creation requires the referenced user to be `Active`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub status: UserStatus,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, status: UserStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }
}
