//! Error types for manifest-doc

/// Result type for manifest-doc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading manifest documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Manifest root must be an object, found {found}")]
    UnexpectedRoot { found: &'static str },
}
