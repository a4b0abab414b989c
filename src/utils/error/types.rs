//! Error types for folder authorization

use thiserror::Error;

/// Result type alias for folder authorization
pub type Result<T> = std::result::Result<T, FolderAuthError>;

/// Main error type for folder authorization
#[derive(Error, Debug)]
pub enum FolderAuthError {
    /// Malformed input, e.g. an empty folder set
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Create with a role name that already exists
    #[error("Duplicate role name: {0}")]
    DuplicateName(String),

    /// Operation on an unknown role
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller lacks the delegate permission on the target folder
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The folder-based strategy is not the active authorization strategy
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
