//! Error types for the typogly library.
//!
//! All failures are represented by the [`TypoglyError`] enum. Every error is
//! terminal: there are no retries and no partial recovery, the pipeline
//! aborts on the first failure.
//!
//! # Examples
//!
//! ```
//! use typogly::error::{TypoglyError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TypoglyError::analysis("invalid token stream"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use anyhow;
use thiserror::Error;

/// The main error type for typogly operations.
///
/// The I/O variants carry the offending path so that every message a user
/// sees names the file that caused the failure.
#[derive(Error, Debug)]
pub enum TypoglyError {
    /// The input file does not exist.
    #[error("input file '{}' does not exist", path.display())]
    InputNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The input file exists but could not be read (permissions, invalid
    /// UTF-8, or any other read failure).
    #[error("cannot read input file '{}': {source}", path.display())]
    InputUnreadable {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("cannot write output file '{}': {source}", path.display())]
    OutputUnwritable {
        /// The path that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization errors (CLI report output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TypoglyError.
pub type Result<T> = std::result::Result<T, TypoglyError>;

impl TypoglyError {
    /// Create a new input-not-found error.
    pub fn input_not_found<P: Into<PathBuf>>(path: P) -> Self {
        TypoglyError::InputNotFound { path: path.into() }
    }

    /// Create a new input-unreadable error.
    pub fn input_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        TypoglyError::InputUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a new output-unwritable error.
    pub fn output_unwritable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        TypoglyError::OutputUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TypoglyError::Analysis(msg.into())
    }
}
