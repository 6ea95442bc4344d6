/// Errors from profile storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The filename failed the filename policy.
    #[error("invalid filename {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// No file with this name exists.
    #[error("file not found: {0}")]
    NotFound(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
