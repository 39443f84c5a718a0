//! Error types for muxup.
//!
//! All errors in muxup are represented by [`MuxupError`], which covers
//! profile discovery, file reading, and parse failures.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in muxup.
#[derive(Error, Debug)]
pub enum MuxupError {
    /// No profile file exists for the given name at any registered extension.
    #[error("No config file found for profile '{0}'")]
    ProfileNotFound(String),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read a file from disk.
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML/JSON parsing failed, or the content doesn't match the schema.
    #[error("Failed to parse {}: {message}", path.display())]
    ParseError {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Deserializer error message.
        message: String,
    },

    /// Replacing the process with the shell failed.
    #[error("Failed to launch shell: {0}")]
    ExecError(std::io::Error),
}

/// Convenient Result type alias for muxup operations.
pub type Result<T> = std::result::Result<T, MuxupError>;
