use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the editor core.
pub type PeResult<T> = std::result::Result<T, PeError>;

#[derive(Error, Debug)]
pub enum PeError {
    #[error("Unknown component category '{0}'")]
    UnknownComponentCategory(String),

    #[error("Connection endpoint '{0}' is not a placed component")]
    ConnectionEndpointMissing(String),

    #[error("Component '{0}' cannot be connected to itself")]
    SelfLoop(String),

    #[error("Connection '{from}' -> '{to}' already exists")]
    DuplicateConnection { from: String, to: String },

    #[error("Circuit name '{0}' cannot be used as a file name")]
    InvalidCircuitName(String),

    #[error("Failed to write '{}': {source}", .path.display())]
    ExportWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{}': {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render output: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
