//! Observable dashboard state for the chat-moderation client.
//!
//! [`DashboardState`] bundles one [`StateContainer`] per concern (session,
//! chats, prompts, navigation). The functions in [`actions`] call the
//! backend through [`moderation_api::ApiClient`] and publish the results.
//!
//! # Example
//!
//! ```no_run
//! use dashboard_state::{actions, DashboardState};
//! use futures::StreamExt;
//! use moderation_api::{ApiClient, ClientConfig, LoginRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:8000"))?;
//! let state = DashboardState::new();
//!
//! let mut sessions = state.auth.subscribe();
//! actions::sign_in(&client, &state, &LoginRequest::new("a@b.com", "pw")).await?;
//! actions::load_chats(&client, &state).await?;
//!
//! while let Some(auth) = sessions.next().await {
//!     println!("authenticated: {}", auth.is_authenticated);
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod auth;
pub mod chats;
pub mod container;
pub mod context;
pub mod error;
pub mod prompts;
pub mod ui;

pub use auth::AuthState;
pub use chats::ChatsState;
pub use container::{StateContainer, Subscription, WatchContainer};
pub use context::DashboardState;
pub use error::{Result, StateError};
pub use prompts::PromptsState;
pub use ui::{SettingsTab, Tab, UiState};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
