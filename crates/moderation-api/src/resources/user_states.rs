//! `/chats/{id}/user-states` endpoints.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::resources::segment;
use crate::types::{Page, PageQuery, UserState, UserStateUpdate};

/// Trust records of chat members.
#[derive(Debug, Clone, Copy)]
pub struct UserStates<'a> {
    client: &'a ApiClient,
}

impl<'a> UserStates<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// First window of members.
    pub async fn list(&self, chat_id: &str) -> Result<Vec<UserState>> {
        Ok(self
            .list_page(chat_id, &PageQuery::default())
            .await?
            .into_items())
    }

    /// One window of members; use [`PageQuery::window`].
    pub async fn list_page(&self, chat_id: &str, query: &PageQuery) -> Result<Page<UserState>> {
        self.client
            .execute(
                ApiRequest::get(format!("/chats/{}/user-states", segment(chat_id))).query(query),
            )
            .await
    }

    pub async fn update(
        &self,
        chat_id: &str,
        state_id: &str,
        update: &UserStateUpdate,
    ) -> Result<UserState> {
        self.client
            .execute(
                ApiRequest::patch(format!(
                    "/chats/{}/user-states/{}",
                    segment(chat_id),
                    segment(state_id)
                ))
                .json(update)?,
            )
            .await
    }

    /// Revoke trust and reset the member's valid-message count.
    pub async fn make_untrusted(&self, chat_id: &str, state_id: &str) -> Result<UserState> {
        self.client
            .execute(ApiRequest::post(format!(
                "/chats/{}/user-states/{}/make-untrusted",
                segment(chat_id),
                segment(state_id)
            )))
            .await
    }
}
