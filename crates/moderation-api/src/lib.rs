//! Chat-moderation dashboard API client.
//!
//! This crate provides a Rust client for the moderation backend's REST API.
//! It covers:
//!
//! - Registration, login and the persisted bearer token
//! - Chat moderation settings
//! - System and custom prompts, and which of them moderate a chat
//! - Member trust records and the deleted message log
//!
//! # Example
//!
//! ```no_run
//! use moderation_api::{ApiClient, ChatUpdate, ClientConfig, LoginRequest};
//!
//! # async fn example() -> Result<(), moderation_api::ApiError> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:8000"))?;
//!
//! // Log in; the token is attached to every later request
//! client
//!     .auth()
//!     .login(&LoginRequest::new("owner@example.com", "hunter22"))
//!     .await?;
//!
//! // Turn on AI checks for every chat
//! for chat in client.chats().list().await? {
//!     let update = ChatUpdate::default().enable_ai_check(true);
//!     let chat = client.chats().update(&chat.id, &update).await?;
//!     println!("{}: ai check {}", chat.display_title(), chat.enable_ai_check);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod token;
pub mod types;

pub use client::{ApiClient, ApiRequest};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use token::{FileStore, KeyValueStore, MemoryStore, TokenStore, TOKEN_KEY};
pub use types::*;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
