//! Error types for the patmatch library.
//!
//! All errors are represented by the [`PatmatchError`] enum. Matchers can only
//! fail at construction time; searching never fails, a text without an
//! occurrence simply yields no position.
//!
//! # Examples
//!
//! ```
//! use patmatch::error::{PatmatchError, Result};
//! use patmatch::matcher::NaiveMatcher;
//!
//! fn build() -> Result<NaiveMatcher> {
//!     NaiveMatcher::new("")
//! }
//!
//! match build() {
//!     Err(PatmatchError::InvalidPattern(_)) => {}
//!     _ => panic!("an empty pattern must be rejected"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for patmatch operations.
#[derive(Error, Debug)]
pub enum PatmatchError {
    /// The pattern cannot be searched for (currently: it is empty).
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// I/O errors (corpus, config and report files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Benchmark configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Corpus-related errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Thread pool construction errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PatmatchError.
pub type Result<T> = std::result::Result<T, PatmatchError>;

impl PatmatchError {
    /// Create a new invalid pattern error.
    pub fn invalid_pattern<S: Into<String>>(msg: S) -> Self {
        PatmatchError::InvalidPattern(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PatmatchError::InvalidConfig(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        PatmatchError::Corpus(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        PatmatchError::ThreadPool(msg.into())
    }
}
