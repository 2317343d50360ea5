//! Prompt list state.

use moderation_api::{CustomPrompt, SystemPrompt};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptsState {
    pub system_prompts: Vec<SystemPrompt>,
    pub custom_prompts: Vec<CustomPrompt>,
    pub is_loading: bool,
}
