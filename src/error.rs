use thiserror::Error;

/// Unified error type for the release note tools
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid version pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-notes-tools
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }
}
