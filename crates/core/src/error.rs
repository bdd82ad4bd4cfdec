//! Error types for histver operations.

use thiserror::Error;

/// Result type alias for histver operations.
pub type Result<T> = std::result::Result<T, HistverError>;

/// Main error type for histver operations.
#[derive(Error, Debug)]
pub enum HistverError {
    #[error("Git repository not found at path: {0}")]
    RepoNotFound(String),

    #[error("HEAD has no commits")]
    UnbornHead,

    #[error("Invalid version part: {0}")]
    InvalidVersionPart(String),

    #[error("Invalid major.minor: {0}")]
    InvalidMajorMinor(String),

    #[error("Invalid verbosity level: {0}")]
    InvalidVerbosity(String),

    #[error("Invalid semantic version: {0}")]
    InvalidSemver(String),

    #[error("Invalid pre-release identifiers: {0}")]
    InvalidPreReleaseIdentifiers(String),

    #[error("Invalid build metadata: {0}")]
    InvalidBuildMetadata(String),

    #[error("Git operation failed: {0}")]
    Git(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
