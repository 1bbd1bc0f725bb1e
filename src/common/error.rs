//! Error types for the harness
//!
//! The taxonomy mirrors the failure sources of the pipeline: the
//! enablement gate, the JSON deserializer and the filesystem. No
//! failure is retried; every error is terminal for its request.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Recorder Errors ===
    #[error("Result recording is disabled outside dev/test mode")]
    RecorderDisabled,

    #[error("Invalid suite name '{0}': must be non-empty and must not contain path segments")]
    InvalidSuiteName(String),

    #[error("Failed to render report XML: {0}")]
    XmlRender(String),

    // === Discovery Errors ===
    #[error("Test page '{path}' is not under the public root '{root}'")]
    OutsidePublicRoot { path: String, root: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
