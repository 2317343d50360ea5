//! `/deleted-messages` endpoint.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::resources::segment;
use crate::types::{DeletedMessage, Page, PageQuery};

/// Log of messages the bot removed.
#[derive(Debug, Clone, Copy)]
pub struct DeletedMessages<'a> {
    client: &'a ApiClient,
}

impl<'a> DeletedMessages<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Most recent deletions, using the backend's default count.
    pub async fn list(&self, chat_id: &str) -> Result<Vec<DeletedMessage>> {
        Ok(self
            .list_page(chat_id, &PageQuery::default())
            .await?
            .into_items())
    }

    /// Deletions with the envelope intact. Only `limit` is honored by the
    /// backend.
    pub async fn list_page(&self, chat_id: &str, query: &PageQuery) -> Result<Page<DeletedMessage>> {
        self.client
            .execute(
                ApiRequest::get(format!("/deleted-messages/{}", segment(chat_id))).query(query),
            )
            .await
    }
}
