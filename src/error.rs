//! Error types for layout lookup and configuration.

use thiserror::Error;

/// Errors raised by the keyboard library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyboardError {
    /// The requested layout name is not in the registry.
    #[error("Layout not found: {0}")]
    LayoutNotFound(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias for keyboard library operations.
pub type KeyboardResult<T> = std::result::Result<T, KeyboardError>;
