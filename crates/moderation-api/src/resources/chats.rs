//! `/chats` endpoints.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::resources::segment;
use crate::types::{Chat, ChatUpdate, Page, PageQuery};

/// Moderated chats owned by the current account.
#[derive(Debug, Clone, Copy)]
pub struct Chats<'a> {
    client: &'a ApiClient,
}

impl<'a> Chats<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// First page of chats, using the backend's default page size.
    pub async fn list(&self) -> Result<Vec<Chat>> {
        Ok(self.list_page(&PageQuery::default()).await?.into_items())
    }

    /// One page of chats with the envelope intact.
    pub async fn list_page(&self, query: &PageQuery) -> Result<Page<Chat>> {
        self.client
            .execute(ApiRequest::get("/chats").query(query))
            .await
    }

    pub async fn get(&self, chat_id: &str) -> Result<Chat> {
        self.client
            .execute(ApiRequest::get(format!("/chats/{}", segment(chat_id))))
            .await
    }

    /// Apply a partial settings update and return the stored chat.
    pub async fn update(&self, chat_id: &str, update: &ChatUpdate) -> Result<Chat> {
        self.client
            .execute(ApiRequest::patch(format!("/chats/{}", segment(chat_id))).json(update)?)
            .await
    }
}
