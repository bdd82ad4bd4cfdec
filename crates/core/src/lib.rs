//! # histver core library
//! Version calculation from Git history: find the most recent
//! version-bearing ancestor of HEAD, count the commit height above it, and
//! derive a SemVer 2.0 version.
//!
//! ## Quick Start
//!
//! Get the version for the current Git repository.
//!
//! ```rust,no_run
//! # use histver::HistverError;
//! use histver::{calculate_version, Config};
//!
//! // Use default configuration
//! let config = Config::default();
//!
//! // Calculate version from the current directory
//! let result = calculate_version(".", &config)?;
//!
//! println!("Calculated version: {}", result);
//! # Ok::<_, HistverError>(())
//! ```
//!
//! ## Strict vs. fallback entry points
//! - [`calculate_version`] — requires a real Git repository and errors otherwise.
//! - [`calculate_version_with_fallback`] — returns the default version when
//!   no repository is found.

pub mod candidates;
pub mod config;
pub mod error;
pub mod git;
pub mod tags;
pub mod version;

mod resolver;

pub use config::{Config, Verbosity, VersionPart};
pub use error::{HistverError, Result};
pub use git::Repository;
pub use version::Version;

use std::path::Path;

/// Calculate the version for the given repository.
///
/// # Examples
/// Returning an error when the target is not a Git repository:
/// ```rust
/// use histver::{calculate_version, Config, HistverError};
///
/// let config = Config::default();
/// let err = calculate_version("/tmp/not-a-repo-histver", &config).unwrap_err();
/// match err {
///     HistverError::RepoNotFound(_) => {},
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
///
/// # Errors
/// - [`HistverError::RepoNotFound`] if the path is not inside a Git repository.
/// - [`HistverError::Git`] for underlying Git failures.
/// - [`HistverError::InvalidSemver`] if the version override is invalid.
/// - [`HistverError::InvalidBuildMetadata`] if the configured build metadata
///   is invalid.
pub fn calculate_version(
    work_dir: impl Into<std::path::PathBuf>,
    config: &Config,
) -> Result<CalculationResult> {
    let work_dir = work_dir.into();

    if let Some(result) = override_result(&work_dir, config)? {
        return Ok(result);
    }

    let resolution = resolver::resolve(&work_dir, config)?;

    Ok(CalculationResult {
        version: resolution.version,
        height: resolution.height,
        is_from_tag: resolution.is_from_tag,
        work_dir,
    })
}

/// Calculate the version, falling back to the default version when no
/// repository is found.
///
/// # Examples
/// Using a non-repository directory will return the default version instead
/// of erroring:
/// ```rust
/// use histver::{calculate_version_with_fallback, Config, HistverError};
///
/// let config = Config::default();
/// let result = calculate_version_with_fallback("/tmp/not-a-repo-histver", &config)?;
/// assert_eq!(result.to_string(), "0.0.0-alpha.0");
/// assert!(!result.is_from_tag);
/// # Ok::<_, HistverError>(())
/// ```
///
/// # Errors
/// - [`HistverError::Git`] for unexpected Git failures past discovery.
pub fn calculate_version_with_fallback(
    work_dir: impl Into<std::path::PathBuf>,
    config: &Config,
) -> Result<CalculationResult> {
    let work_dir = work_dir.into();

    if let Some(result) = override_result(&work_dir, config)? {
        return Ok(result);
    }

    let resolution = match resolver::resolve(&work_dir, config) {
        Ok(resolution) => resolution,
        Err(HistverError::RepoNotFound(path)) => {
            tracing::warn!(
                "'{}' is not a Git working directory. Using default version.",
                path
            );
            resolver::default_resolution(config)?
        }
        Err(e) => return Err(e),
    };

    Ok(CalculationResult {
        version: resolution.version,
        height: resolution.height,
        is_from_tag: resolution.is_from_tag,
        work_dir,
    })
}

/// The version-override short circuit: when configured, the Git layer is
/// never consulted.
fn override_result(work_dir: &Path, config: &Config) -> Result<Option<CalculationResult>> {
    let Some(text) = config.version_override.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let version = Version::parse(text, "")?;
    tracing::debug!("Using version override {}", version);

    Ok(Some(CalculationResult {
        version,
        height: 0,
        is_from_tag: false,
        work_dir: work_dir.to_path_buf(),
    }))
}

/// Result of a version calculation.
///
/// # Examples
/// ```rust
/// use histver::{calculate_version_with_fallback, Config, HistverError};
///
/// let result = calculate_version_with_fallback("/tmp/not-a-repo-histver", &Config::default())?;
/// assert_eq!(result.version.to_string(), "0.0.0-alpha.0");
/// assert_eq!(result.height, 0);
/// assert!(!result.is_from_tag);
/// # Ok::<_, HistverError>(())
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct CalculationResult {
    pub version: Version,
    pub height: u32,
    pub is_from_tag: bool,
    pub work_dir: std::path::PathBuf,
}

impl std::fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.version)
    }
}
