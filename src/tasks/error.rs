// src/tasks/error.rs

//! Error taxonomy for the task core. Backends speak [`StorageError`]; the
//! manager wraps it into [`TaskError`] together with its own precondition
//! failure.

use thiserror::Error;

/// A storage backend failed to read or write its medium.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The remote todos service answered with a non-success status.
    #[error("Remote API error (status {status}): {message}")]
    RemoteApi { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Failures surfaced by [`TaskManager`](crate::tasks::TaskManager) to its
/// callers.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The caller referenced an id that is not in the current collection.
    /// Raised before any backend call is made.
    #[error("Wrong task id: {0}")]
    WrongTaskId(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
