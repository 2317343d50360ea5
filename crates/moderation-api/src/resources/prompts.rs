//! `/prompts` endpoints.

use serde::de::IgnoredAny;

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::resources::segment;
use crate::types::{
    CustomPrompt, CustomPromptCreate, CustomPromptUpdate, Page, PageQuery, SystemPrompt,
};

/// Read-only system prompts and the operator's own custom prompts.
#[derive(Debug, Clone, Copy)]
pub struct Prompts<'a> {
    client: &'a ApiClient,
}

impl<'a> Prompts<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// First page of system prompts.
    pub async fn list_system(&self) -> Result<Vec<SystemPrompt>> {
        Ok(self
            .list_system_page(&PageQuery::default())
            .await?
            .into_items())
    }

    /// One page of system prompts; `search` filters by name.
    pub async fn list_system_page(&self, query: &PageQuery) -> Result<Page<SystemPrompt>> {
        self.client
            .execute(ApiRequest::get("/prompts").query(query))
            .await
    }

    pub async fn get_system(&self, prompt_id: &str) -> Result<SystemPrompt> {
        self.client
            .execute(ApiRequest::get(format!("/prompts/{}", segment(prompt_id))))
            .await
    }

    /// First page of custom prompts.
    pub async fn list_custom(&self) -> Result<Vec<CustomPrompt>> {
        Ok(self
            .list_custom_page(&PageQuery::default())
            .await?
            .into_items())
    }

    pub async fn list_custom_page(&self, query: &PageQuery) -> Result<Page<CustomPrompt>> {
        self.client
            .execute(ApiRequest::get("/prompts/custom").query(query))
            .await
    }

    pub async fn get_custom(&self, prompt_id: &str) -> Result<CustomPrompt> {
        self.client
            .execute(ApiRequest::get(format!(
                "/prompts/custom/{}",
                segment(prompt_id)
            )))
            .await
    }

    pub async fn create(&self, request: &CustomPromptCreate) -> Result<CustomPrompt> {
        self.client
            .execute(ApiRequest::post("/prompts/custom").json(request)?)
            .await
    }

    pub async fn update(
        &self,
        prompt_id: &str,
        request: &CustomPromptUpdate,
    ) -> Result<CustomPrompt> {
        self.client
            .execute(
                ApiRequest::patch(format!("/prompts/custom/{}", segment(prompt_id)))
                    .json(request)?,
            )
            .await
    }

    /// Delete a custom prompt. The backend answers 204.
    pub async fn delete(&self, prompt_id: &str) -> Result<()> {
        let _: IgnoredAny = self
            .client
            .execute(ApiRequest::delete(format!(
                "/prompts/custom/{}",
                segment(prompt_id)
            )))
            .await?;
        Ok(())
    }
}
