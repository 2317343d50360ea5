//! Typed wrappers, one per backend resource family.

mod auth;
mod chat_prompts;
mod chats;
mod deleted_messages;
mod prompts;
mod user_states;

pub use auth::Auth;
pub use chat_prompts::ChatPrompts;
pub use chats::Chats;
pub use deleted_messages::DeletedMessages;
pub use prompts::Prompts;
pub use user_states::UserStates;

use std::borrow::Cow;

/// Percent-encode a caller-supplied id for use as a path segment.
fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
