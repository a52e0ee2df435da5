//! Error types for form-core

/// Result type for form-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in form-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A table is inconsistent; detected while decoding or resolving
    #[error(transparent)]
    Configuration(#[from] form_meta::ConfigurationError),

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from form-fs
    #[error(transparent)]
    Fs(#[from] form_fs::Error),

    /// Schema error from form-meta
    #[error(transparent)]
    Meta(#[from] form_meta::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
