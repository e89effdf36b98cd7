//! Error types for nook-core

use thiserror::Error;

/// Result type alias using nook-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nook-core operations
///
/// Palette and quick search flows never fail: empty queries and missing
/// callbacks are no-ops. These variants cover settings and route parsing.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Keyboard shortcut could not be parsed
    #[error("Invalid shortcut '{shortcut}': {reason}")]
    InvalidShortcut { shortcut: String, reason: String },

    /// Path does not name a known route
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Search mode is neither `search` nor `ask`
    #[error("Invalid search mode '{0}' (expected 'search' or 'ask')")]
    InvalidSearchMode(String),
}
