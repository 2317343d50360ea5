//! Per-member trust records.

use serde::{Deserialize, Serialize};

/// Trust state of one chat member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    pub id: String,
    /// Platform user id of the member.
    pub external_user_id: i64,
    pub trusted: bool,
    pub valid_messages: u32,
    #[serde(default)]
    pub joined_at: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `PATCH /chats/{id}/user-states/{state_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserStateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted: Option<bool>,
}

impl UserStateUpdate {
    pub fn trusted(trusted: bool) -> Self {
        Self {
            trusted: Some(trusted),
        }
    }
}
