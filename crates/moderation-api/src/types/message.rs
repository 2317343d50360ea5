//! Messages removed by the moderation bot.

use serde::{Deserialize, Serialize};

/// A message the bot deleted, as reported by `GET /deleted-messages/{chat_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedMessage {
    pub job_id: String,
    pub chat_id: i64,
    pub chat_uuid: String,
    pub platform_user_id: i64,
    #[serde(default)]
    pub user_state_id: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    pub message_text: String,
    /// Unix seconds.
    pub timestamp: i64,
}
