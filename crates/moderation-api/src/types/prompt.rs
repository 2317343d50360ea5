//! System and custom prompts.

use serde::{Deserialize, Serialize};

/// A backend-defined prompt. Read-only for dashboard operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemPrompt {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prompt_text: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A prompt authored by the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPrompt {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prompt_text: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /prompts/custom`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomPromptCreate {
    pub name: String,
    pub prompt_text: String,
}

impl CustomPromptCreate {
    pub fn new(name: impl Into<String>, prompt_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt_text: prompt_text.into(),
        }
    }
}

/// Body of `PATCH /prompts/custom/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomPromptUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CustomPromptUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn prompt_text(mut self, text: impl Into<String>) -> Self {
        self.prompt_text = Some(text.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }
}
