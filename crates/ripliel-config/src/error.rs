use thiserror::Error;

/// Failure reading or writing a settings store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings blob is not a JSON object")]
    NotAnObject,
}

/// Convenience type alias for Results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
