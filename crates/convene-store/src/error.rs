/// Errors from key-value storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A partition value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The write would push the backend past its byte quota.
    #[error("quota exceeded: write needs {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    /// The key cannot be used with this backend.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// A lock guarding backend state was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
