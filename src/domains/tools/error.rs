//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool dispatch.
///
/// The mapper tools themselves have no failure modes (unknown selection codes
/// degrade to the fallback message), so this covers dispatch-level problems:
/// a tool name the registry does not know, or unusable arguments.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
