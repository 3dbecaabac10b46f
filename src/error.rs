use thiserror::Error;

/// Rejected add-word input. Nothing is persisted when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in both fields")]
    EmptyTerm,

    #[error("Please fill in both fields")]
    EmptyDefinition,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to persist vocabulary: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid vocabulary file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid data format: missing \"{0}\" vocabulary")]
    MissingLanguage(&'static str),

    #[error("Could not read import file: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
