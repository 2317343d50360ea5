//! Error types for moderation-api.

use thiserror::Error;

/// Errors that can occur when talking to the moderation backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// `body` is the raw response text, left unparsed so callers can decode
    /// whatever error payload the backend chose to send.
    #[error("{body}")]
    Http { status: u16, body: String },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the persisted token failed.
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for 401 responses, which mean the stored token is missing or stale.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
