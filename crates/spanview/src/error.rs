//! Error types for span rendering.
//!
//! This module provides [`RenderError`], the single error type returned by
//! views, table layouts and renderers.

use std::io;

/// Error type for rendering operations.
///
/// Running out of vertical space is not an error: line advances past the
/// bottom of a region are silently ignored by the view.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing to the output surface failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A formatter or a cell render function could not produce a span.
    #[error("format error: {0}")]
    Format(String),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// A caller broke an argument contract at the call boundary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RenderError {
    /// Create a format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Config(err.to_string())
    }
}
