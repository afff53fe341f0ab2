//! Error types for the jobboard plugin.
//!
//! [`JobBoardError`] covers the fallible edges of the plugin: loading the
//! catalog fixture, reading theme files, worker IPC and configuration. The
//! browsing state machine itself never fails; out-of-range navigation and
//! empty results degrade to an unchanged or empty view instead.

use thiserror::Error;

/// The main error type for jobboard operations.
///
/// # Examples
///
/// ```
/// use jobboard::JobBoardError;
///
/// fn validate_breakpoint(cols: usize) -> Result<(), JobBoardError> {
///     if cols == 0 {
///         return Err(JobBoardError::Config("compact_breakpoint must be positive".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum JobBoardError {
    /// The catalog fixture could not be read or does not describe a valid catalog.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Raised when a message cannot be serialized or the worker has no catalog
    /// source to answer from.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for jobboard operations.
pub type Result<T> = std::result::Result<T, JobBoardError>;
