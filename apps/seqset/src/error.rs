//! # Application Errors
//!
//! Failures of the binary itself: configuration, file access and script
//! parsing. Registry calls never produce errors here; they answer through
//! the sentinel surface.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the seqset binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading a file or a standard stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path was rejected before reading.
    #[error("Invalid path '{}': {message}", .path.display())]
    Path { path: PathBuf, message: String },

    /// The configuration file could not be parsed.
    #[error("Config error in '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// A script line could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A hash provider name did not match any built-in provider.
    #[error("Unknown hash function '{0}' (see `seqset hashes`)")]
    UnknownHash(String),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
