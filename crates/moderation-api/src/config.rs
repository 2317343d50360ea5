//! Configuration for the moderation API client.

use std::env;
use std::path::PathBuf;

use crate::error::ApiError;

/// Directory name used under the platform data dir for the token slot.
pub const DEFAULT_TOKEN_DIR_NAME: &str = "moderation-dashboard";

/// Configuration for connecting to the moderation backend.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8000").
    ///
    /// Paths are appended verbatim, so any API prefix belongs here.
    pub base_url: String,
    /// Log in with the same credentials right after a successful register.
    pub login_after_register: bool,
    /// Directory holding the persisted token. `None` keeps the token in memory only.
    pub token_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Chain a login call after every successful registration.
    pub fn with_login_after_register(mut self, enabled: bool) -> Self {
        self.login_after_register = enabled;
        self
    }

    /// Persist the token under the given directory.
    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = Some(dir.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `MODERATION_API_URL` | Backend base URL | empty |
    /// | `MODERATION_LOGIN_AFTER_REGISTER` | Auto-login after register | `false` |
    /// | `MODERATION_TOKEN_DIR` | Token storage directory | `<data dir>/moderation-dashboard` |
    ///
    /// An unset URL is not treated as "same origin": there is no page to be
    /// relative to, so [`ClientConfig::validate`] rejects it and
    /// `ApiClient::new` fails with [`ApiError::Config`].
    pub fn from_env() -> Self {
        let base_url = env::var("MODERATION_API_URL").unwrap_or_default();

        let login_after_register = env::var("MODERATION_LOGIN_AFTER_REGISTER")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        let token_dir = env::var("MODERATION_TOKEN_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(default_token_dir);

        Self {
            base_url,
            login_after_register,
            token_dir,
        }
    }

    /// Build the full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Check that the configuration can be used to build a client.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::Config(
                "MODERATION_API_URL is not set".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "base URL must be absolute: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn default_token_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DEFAULT_TOKEN_DIR_NAME))
}
