//! Prompt links under `/chats/{id}`.

use serde::de::IgnoredAny;

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::resources::segment;
use crate::types::{
    LinkCustomPromptRequest, LinkPromptRequest, LinkedCustomPrompt, LinkedPrompt, LinkedPrompts,
};

/// Which prompts moderate a chat.
#[derive(Debug, Clone, Copy)]
pub struct ChatPrompts<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatPrompts<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn linked_prompts(&self, chat_id: &str) -> Result<LinkedPrompts> {
        self.client
            .execute(ApiRequest::get(format!(
                "/chats/{}/linked_prompts",
                segment(chat_id)
            )))
            .await
    }

    pub async fn link_prompt(
        &self,
        chat_id: &str,
        request: &LinkPromptRequest,
    ) -> Result<LinkedPrompt> {
        self.client
            .execute(
                ApiRequest::post(format!("/chats/{}/prompts", segment(chat_id))).json(request)?,
            )
            .await
    }

    pub async fn unlink_prompt(&self, chat_id: &str, prompt_id: &str) -> Result<()> {
        let _: IgnoredAny = self
            .client
            .execute(ApiRequest::delete(format!(
                "/chats/{}/prompts/{}",
                segment(chat_id),
                segment(prompt_id)
            )))
            .await?;
        Ok(())
    }

    pub async fn link_custom_prompt(
        &self,
        chat_id: &str,
        request: &LinkCustomPromptRequest,
    ) -> Result<LinkedCustomPrompt> {
        self.client
            .execute(
                ApiRequest::post(format!("/chats/{}/custom-prompts", segment(chat_id)))
                    .json(request)?,
            )
            .await
    }

    pub async fn unlink_custom_prompt(&self, chat_id: &str, custom_prompt_id: &str) -> Result<()> {
        let _: IgnoredAny = self
            .client
            .execute(ApiRequest::delete(format!(
                "/chats/{}/custom-prompts/{}",
                segment(chat_id),
                segment(custom_prompt_id)
            )))
            .await?;
        Ok(())
    }
}
