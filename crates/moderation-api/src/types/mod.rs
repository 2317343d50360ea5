//! Records exchanged with the moderation backend.

mod auth;
mod chat;
mod link;
mod message;
mod page;
mod prompt;
mod user_state;

pub use auth::{LoginRequest, RegisterRequest, TelegramConnect, TokenResponse, User};
pub use chat::{Chat, ChatUpdate};
pub use link::{
    LinkCustomPromptRequest, LinkPromptRequest, LinkedCustomPrompt, LinkedPrompt, LinkedPrompts,
};
pub use message::DeletedMessage;
pub use page::{Page, PageQuery};
pub use prompt::{CustomPrompt, CustomPromptCreate, CustomPromptUpdate, SystemPrompt};
pub use user_state::{UserState, UserStateUpdate};
