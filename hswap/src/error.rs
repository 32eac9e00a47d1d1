//! Error types for the hswap library.
//!
//! Only genuinely exceptional conditions live here. Failing to find a
//! counterpart is a normal outcome and is reported through
//! [`Resolution::NotFound`](crate::swap::Resolution::NotFound) instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an hswap error.
///
/// # Examples
///
/// ```
/// use hswap::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hswap library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A resolved counterpart could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    OpenFailed {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// A filesystem walk failed.
    #[error("search under {} failed: {reason}", root.display())]
    SearchFailed {
        /// The directory the search started from.
        root: PathBuf,
        /// The reason the search failed.
        reason: String,
    },

    /// A search was cancelled before it completed.
    #[error("search cancelled")]
    SearchCancelled,
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use hswap::Error;
    ///
    /// let err: Error = std::io::Error::from(std::io::ErrorKind::NotFound).into();
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if error is the result of cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::SearchCancelled)
    }
}
