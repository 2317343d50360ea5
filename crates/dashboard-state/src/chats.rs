//! Chat list state.

use moderation_api::Chat;

/// The operator's chats and the one being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatsState {
    pub chats: Vec<Chat>,
    pub active_chat: Option<Chat>,
    pub is_loading: bool,
}

impl ChatsState {
    pub fn find(&self, chat_id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    /// Store a fresh copy of a chat in the list, and as the active chat if it
    /// is the one being edited.
    pub fn replace_chat(&mut self, chat: Chat) {
        if let Some(slot) = self.chats.iter_mut().find(|c| c.id == chat.id) {
            *slot = chat.clone();
        }
        if self.active_chat.as_ref().is_some_and(|c| c.id == chat.id) {
            self.active_chat = Some(chat);
        }
    }
}
