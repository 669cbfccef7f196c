//! Shared primitives for all Rust crates in Roledesk.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Roledesk crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Underlying store failure, carrying the store's error messages.
    #[error("store error: {}", .0.join("; "))]
    Store(Vec<String>),
}

impl AppError {
    /// Creates a store error from a single message.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(vec![message.into()])
    }

    /// Returns the user-facing messages carried by this error.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(message) | Self::NotFound(message) | Self::Conflict(message) => {
                vec![message.clone()]
            }
            Self::Store(messages) => messages.clone(),
        }
    }
}
