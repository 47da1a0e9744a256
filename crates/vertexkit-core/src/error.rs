//! Error handling for VertexKit
//!
//! The geometry engine itself never fails: generators, hit testing and scene
//! mutations degrade to no-ops instead of returning errors. Errors only appear
//! at the edges where the engine talks to storage:
//! - Storage errors (project lookup, naming, snapshot validation)
//! - I/O and JSON errors from the file-backed project store
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Storage error type
///
/// Represents failures of the persistence collaborator that are not plain
/// I/O problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No project is stored under the given name
    #[error("Project not found: {name}")]
    ProjectNotFound {
        /// The requested project name.
        name: String,
    },

    /// The project name cannot be used as a storage key
    #[error("Invalid project name: {name:?}")]
    InvalidProjectName {
        /// The rejected project name.
        name: String,
    },

    /// A stored snapshot could not be interpreted
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot {
        /// Why the snapshot was rejected.
        reason: String,
    },
}

/// Main error type for VertexKit
///
/// A unified error type used by every fallible public API in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error means the requested project does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Storage(StorageError::ProjectNotFound { .. }))
    }

    /// Check if this is a storage error
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
