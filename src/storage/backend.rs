//! The backend trait and its error type.

use thiserror::Error;

/// Failure reported by a [`StorageBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The resource does not exist yet.
    #[error("'{resource}' does not exist")]
    NotFound {
        /// The resource that was looked up.
        resource: String,
    },

    /// The resource exists (or should) but cannot be read or written.
    #[error("cannot access '{resource}': {message}")]
    Access {
        /// The resource that failed.
        resource: String,
        /// The underlying OS or backend message.
        message: String,
    },
}

impl BackendError {
    /// Returns the backend-specific message without the resource prefix.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { resource } => format!("'{}' does not exist", resource),
            Self::Access { message, .. } => message.clone(),
        }
    }
}

/// Abstract line-oriented storage for the record collection.
///
/// Every call acquires the underlying resource, finishes its work and
/// releases it before returning, on success and on error.
pub trait StorageBackend {
    /// Human readable name of the resource (a path, or a virtual name).
    fn describe(&self) -> String;

    /// Reads every line of the resource, without line terminators.
    fn read_all_lines(&self) -> Result<Vec<String>, BackendError>;

    /// Replaces the whole resource with `lines`.
    ///
    /// Implementations MUST leave the previous content in place when this fails.
    fn write_all_lines(&self, lines: &[String]) -> Result<(), BackendError>;

    /// Creates an empty resource. Called when the first read reports `NotFound`.
    fn create(&self) -> Result<(), BackendError>;
}
