//! View-specific error types.

use thiserror::Error;

/// Errors that can occur while serving views.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The requested view was not found.
    #[error("View not found: {0}")]
    NotFound(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ViewError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
