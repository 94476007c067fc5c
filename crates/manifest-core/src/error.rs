//! Error types for manifest-core

use std::path::PathBuf;

/// Result type for manifest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a sync run.
///
/// Collaborator failures abort the run and surface unchanged; the
/// reconciliation itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template manifest file does not exist
    #[error("Template manifest not found at {path}")]
    TemplateNotFound { path: PathBuf },

    /// Deployed manifest file does not exist
    #[error("Deployed manifest not found at {path}")]
    DeployedNotFound { path: PathBuf },

    /// I/O failure reading a manifest
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A deployed-manifest source failed for a non-I/O reason
    #[error("Failed to fetch deployed manifest: {message}")]
    Fetch { message: String },

    // Transparent wrappers for underlying crate errors
    /// Document error from manifest-doc
    #[error(transparent)]
    Doc(#[from] manifest_doc::Error),

    /// Store error from manifest-env
    #[error(transparent)]
    Env(#[from] manifest_env::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
