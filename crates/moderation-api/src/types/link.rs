//! Links between chats and the prompts that moderate them.

use serde::{Deserialize, Serialize};

/// A system prompt attached to a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedPrompt {
    pub id: String,
    pub prompt_id: String,
    #[serde(default)]
    pub prompt_name: Option<String>,
    pub threshold: f64,
    #[serde(default)]
    pub priority: Option<i32>,
    pub is_active: bool,
}

/// A custom prompt attached to a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedCustomPrompt {
    pub id: String,
    pub custom_prompt_id: String,
    #[serde(default)]
    pub custom_prompt_text: Option<String>,
    pub threshold: f64,
    #[serde(default)]
    pub priority: Option<i32>,
    pub is_active: bool,
}

/// Response of `GET /chats/{id}/linked_prompts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedPrompts {
    #[serde(default)]
    pub system_prompts: Vec<LinkedPrompt>,
    #[serde(default)]
    pub custom_prompts: Vec<LinkedCustomPrompt>,
}

impl LinkedPrompts {
    pub fn is_empty(&self) -> bool {
        self.system_prompts.is_empty() && self.custom_prompts.is_empty()
    }
}

/// Body of `POST /chats/{id}/prompts`.
///
/// Unset fields fall back to the backend defaults (threshold 0.3, active).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkPromptRequest {
    pub prompt_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl LinkPromptRequest {
    pub fn new(prompt_id: impl Into<String>) -> Self {
        Self {
            prompt_id: prompt_id.into(),
            threshold: None,
            priority: None,
            is_active: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Body of `POST /chats/{id}/custom-prompts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkCustomPromptRequest {
    pub custom_prompt_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl LinkCustomPromptRequest {
    pub fn new(custom_prompt_id: impl Into<String>) -> Self {
        Self {
            custom_prompt_id: custom_prompt_id.into(),
            threshold: None,
            priority: None,
            is_active: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}
