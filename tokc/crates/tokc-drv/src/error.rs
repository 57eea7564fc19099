//! Error types for the tokc driver.
//!
//! Lexical errors are not represented here: they are part of the report.
//! Everything in [`DriverError`] stops the run.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Direction a file was being opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Opening the input file.
    Reading,
    /// Creating the output file.
    Writing,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reading => f.write_str("reading"),
            Self::Writing => f.write_str("writing"),
        }
    }
}

/// Main error type for the tokc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Fewer than two paths were given.
    #[error("Usage: tokc inputFile outputFile")]
    Usage,

    /// A file could not be opened.
    #[error("ERROR: could not open {} for {mode}", .path.display())]
    Open {
        /// The path that failed.
        path: PathBuf,
        /// Whether it was the input or the output.
        mode: OpenMode,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO failure while scanning or reporting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
