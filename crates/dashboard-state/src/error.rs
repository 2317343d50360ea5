//! Error types for dashboard-state.

use moderation_api::ApiError;
use thiserror::Error;

/// Errors from dashboard actions.
#[derive(Debug, Error)]
pub enum StateError {
    /// The backend call failed; the container kept its previous data.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A tab name that the dashboard does not have.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

/// Result type for dashboard actions.
pub type Result<T> = std::result::Result<T, StateError>;
