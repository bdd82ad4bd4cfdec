//! Configuration for histver operations.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{HistverError, Result};

/// Verbosity levels for diagnostic output.
///
/// Levels map one-to-one onto `tracing` levels; none of them affects the
/// computed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for Verbosity {
    type Err = HistverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "e" | "error" => Ok(Verbosity::Error),
            "w" | "warn" | "warning" => Ok(Verbosity::Warn),
            "i" | "info" => Ok(Verbosity::Info),
            "d" | "debug" => Ok(Verbosity::Debug),
            "t" | "trace" | "diag" | "diagnostic" => Ok(Verbosity::Trace),
            _ => Err(HistverError::InvalidVerbosity(s.to_string())),
        }
    }
}

/// Version parts that can be auto-incremented above a release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

impl FromStr for VersionPart {
    type Err = HistverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionPart::Major),
            "minor" => Ok(VersionPart::Minor),
            "patch" => Ok(VersionPart::Patch),
            _ => Err(HistverError::InvalidVersionPart(s.to_string())),
        }
    }
}

/// Major.minor lower-bound gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorMinor {
    pub major: u64,
    pub minor: u64,
}

impl MajorMinor {
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Parse a MajorMinor from a string in the format "major.minor".
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 2 {
            return Err(HistverError::InvalidMajorMinor(format!(
                "expected 'major.minor', got '{}'",
                s
            )));
        }

        let major = parts[0].parse::<u64>().map_err(|_| {
            HistverError::InvalidMajorMinor(format!("invalid major version '{}'", parts[0]))
        })?;
        let minor = parts[1].parse::<u64>().map_err(|_| {
            HistverError::InvalidMajorMinor(format!("invalid minor version '{}'", parts[1]))
        })?;

        Ok(MajorMinor { major, minor })
    }
}

/// Parse a pre-release identifier list separated by commas or dots.
///
/// An empty string yields no identifiers, which makes derived default
/// versions releases. Identifier validity (charset, no leading zeros on
/// numeric identifiers) follows SemVer 2.0.
pub fn parse_pre_release_identifiers(s: &str) -> Result<Vec<String>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let identifiers: Vec<String> = s.split([',', '.']).map(str::to_string).collect();

    semver::Prerelease::new(&identifiers.join("."))
        .map_err(|e| HistverError::InvalidPreReleaseIdentifiers(format!("'{}': {}", s, e)))?;

    Ok(identifiers)
}

/// Runtime configuration for histver operations.
///
/// # Defaults
/// - `work_dir`: current directory (`.`)
/// - `tag_prefix`: empty (accept all tags)
/// - `auto_increment`: [`VersionPart::Patch`]
/// - `default_pre_release_identifiers`: `alpha.0`
/// - `ignore_height`: `false`
/// - `verbosity`: [`Verbosity::Warn`]
///
/// # Examples
/// ```rust
/// use histver::{Config, VersionPart};
///
/// let mut config = Config::default();
/// config.tag_prefix = "v".into();
/// config.auto_increment = VersionPart::Minor;
/// config.ignore_height = true;
///
/// assert_eq!(config.tag_prefix, "v");
/// assert_eq!(config.auto_increment, VersionPart::Minor);
/// assert!(config.ignore_height);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: PathBuf,
    pub tag_prefix: String,
    pub auto_increment: VersionPart,
    pub minimum_major_minor: Option<MajorMinor>,
    pub default_pre_release_identifiers: Vec<String>,
    pub build_metadata: Option<String>,
    pub ignore_height: bool,
    pub version_override: Option<String>,
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: ".".into(),
            tag_prefix: "".into(),
            auto_increment: VersionPart::Patch,
            minimum_major_minor: None,
            default_pre_release_identifiers: vec!["alpha".into(), "0".into()],
            build_metadata: None,
            ignore_height: false,
            version_override: None,
            verbosity: Verbosity::Warn,
        }
    }
}
