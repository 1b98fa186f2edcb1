/*!
 * Error types for the vttclean application.
 *
 * Every error here is terminal for the process: it is reported on stderr
 * and the process exits with code 1.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a subtitle file
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The path does not reference anything on disk
    #[error("File {0:?} does not exist")]
    NotFound(PathBuf),

    /// The file exists but could not be opened or decoded as UTF-8
    #[error("Unable to read file {path:?} - {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O or decoding failure
        #[source]
        source: std::io::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// No subtitle file path on the command line
    #[error("Missing subtitle file path")]
    Usage,

    /// Error from subtitle loading
    #[error(transparent)]
    Subtitle(#[from] SubtitleError),

    /// Error loading the configuration file
    #[error("Config error: {0}")]
    Config(String),

    /// Error writing output
    #[error("File error: {0}")]
    File(String),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
