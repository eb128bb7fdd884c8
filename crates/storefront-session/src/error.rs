//! Session error types.

use storefront_commerce::CommerceError;
use storefront_data::FetchError;
use thiserror::Error;

/// Errors surfaced by the session controller and runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A request to the storefront API failed.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Rejected user input.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// A scripted event line could not be parsed.
    #[error("Invalid event on line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    /// The runtime task has stopped.
    #[error("Session closed")]
    Closed,
}

impl SessionError {
    pub fn invalid_event(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidEvent {
            line,
            message: message.into(),
        }
    }
}
