//! Moderated chat settings.

use serde::{Deserialize, Serialize};

/// A moderated chat or group and its cleanup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub chat_link: Option<String>,
    /// Platform chat type (e.g., "supergroup").
    #[serde(rename = "type")]
    pub chat_type: String,
    pub platform_chat_id: i64,
    pub user_id: String,

    pub enable_ai_check: bool,
    #[serde(default)]
    pub prompts_threshold: Option<f64>,
    #[serde(default)]
    pub custom_prompt_threshold: Option<f64>,

    pub cleanup_mentions: bool,
    #[serde(default)]
    pub allowed_mentions: Option<Vec<String>>,

    pub cleanup_emojis: bool,
    pub max_emoji_count: u32,

    pub cleanup_links: bool,
    #[serde(default)]
    pub allowed_link_domains: Option<Vec<String>>,

    pub cleanup_emails: bool,

    /// Valid messages a member needs before being trusted.
    #[serde(default)]
    pub min_messages_required: Option<u32>,
    #[serde(default)]
    pub min_observation_minutes: Option<u32>,

    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Chat {
    /// Title for display, falling back to the platform id.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => self.platform_chat_id.to_string(),
        }
    }
}

/// Partial update for `PATCH /chats/{id}`.
///
/// Only fields that are `Some` are sent; the backend keeps the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ai_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_mentions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_emojis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_emoji_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_link_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_messages_required: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_observation_minutes: Option<u32>,
}

impl ChatUpdate {
    /// True when no field is set; sending it would be a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn enable_ai_check(mut self, enabled: bool) -> Self {
        self.enable_ai_check = Some(enabled);
        self
    }

    pub fn cleanup_links(mut self, enabled: bool, allowed_domains: Vec<String>) -> Self {
        self.cleanup_links = Some(enabled);
        self.allowed_link_domains = Some(allowed_domains);
        self
    }

    pub fn cleanup_mentions(mut self, enabled: bool, allowed: Vec<String>) -> Self {
        self.cleanup_mentions = Some(enabled);
        self.allowed_mentions = Some(allowed);
        self
    }

    pub fn cleanup_emojis(mut self, enabled: bool, max_count: u32) -> Self {
        self.cleanup_emojis = Some(enabled);
        self.max_emoji_count = Some(max_count);
        self
    }

    pub fn cleanup_emails(mut self, enabled: bool) -> Self {
        self.cleanup_emails = Some(enabled);
        self
    }
}
