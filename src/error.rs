//! Error types for warden.

use std::io;
use thiserror::Error;

/// Result type alias for warden operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in warden operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on the bridge streams or a config file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host failed to read or append session history.
    #[error("Session history error: {0}")]
    History(String),

    /// Command name not registered by any plugin.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
