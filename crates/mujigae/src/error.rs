//! The storage error.

/// An error while reading or writing a persisted record.
///
/// The stores never surface this error to their callers. They log it and
/// carry on with the in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record that does not (de)serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record that does not fit into the remaining storage.
    #[error("saving {size} bytes under \"{key}\" exceeds quota of {quota} bytes")]
    QuotaExceeded { key: String, size: usize, quota: usize },
}
