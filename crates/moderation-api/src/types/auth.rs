//! Account and session records.

use serde::{Deserialize, Serialize};

/// A dashboard operator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Linked Telegram account, once the operator connected the bot.
    #[serde(default)]
    pub telegram_user_id: Option<i64>,
    #[serde(default)]
    pub discord_user_id: Option<i64>,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl RegisterRequest {
    /// Registration without a username.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: None,
        }
    }

    /// Set the display username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Credentials to log in with after registering.
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest::new(&self.email, &self.password)
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Response of `GET /auth/me/connect_telegram`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelegramConnect {
    /// `"pending"` or `"already_connected"`.
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub bot_link: Option<String>,
}

impl TelegramConnect {
    pub fn is_connected(&self) -> bool {
        self.status == "already_connected"
    }
}
