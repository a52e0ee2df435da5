//! Error types for form-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from form-core
    #[error(transparent)]
    Core(#[from] form_core::Error),

    /// Error from form-meta
    #[error(transparent)]
    Meta(#[from] form_meta::Error),

    /// Error from form-fs
    #[error(transparent)]
    Fs(#[from] form_fs::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

impl From<form_meta::ConfigurationError> for CliError {
    fn from(error: form_meta::ConfigurationError) -> Self {
        Self::Core(error.into())
    }
}
