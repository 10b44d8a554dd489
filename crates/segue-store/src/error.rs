//! Error types for the transition log.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the transition log.
///
/// The log adds no retry or recovery logic of its own; callers see the
/// underlying failure unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite-level error on open, append, or read.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Filesystem error while preparing the database location.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
