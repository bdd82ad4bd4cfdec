//! Version representation, ordering, and derivation.

use crate::config::{MajorMinor, VersionPart};
use crate::error::{HistverError, Result};

/// Semantic version as used throughout the resolver.
///
/// All derivation operators are pure functions returning new values; nothing
/// mutates in place.
///
/// # Examples
/// Parsing and formatting a version:
/// ```rust
/// use histver::{Version, HistverError};
///
/// let version: Version = "1.2.3-beta.1+ci.77".parse()?;
/// assert_eq!(version.to_string(), "1.2.3-beta.1+ci.77");
/// # Ok::<_, HistverError>(())
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Vec<String>,
    pub build_metadata: Vec<String>,
}

impl Version {
    /// Create a release version with no pre-release identifiers.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// The initial `0.0.0` version carrying the given pre-release
    /// identifiers. Used for untagged roots and repository-less fallbacks.
    pub fn initial(pre_release: &[String]) -> Self {
        Self {
            major: 0,
            minor: 0,
            patch: 0,
            pre_release: pre_release.to_vec(),
            build_metadata: Vec::new(),
        }
    }

    /// Parse `text` as a SemVer 2.0 version behind an optional tag prefix.
    ///
    /// The text must begin with `tag_prefix` (the empty prefix matches
    /// anything) and the remainder must be exact SemVer 2.0. A leading `v`
    /// is rejected unless it is part of the prefix, as are leading zeros on
    /// numeric identifiers, empty identifiers, and non-ASCII input.
    ///
    /// # Errors
    /// [`HistverError::InvalidSemver`] when the prefix does not match or the
    /// remainder is not valid SemVer 2.0.
    pub fn parse(text: &str, tag_prefix: &str) -> Result<Self> {
        let unprefixed = text.strip_prefix(tag_prefix).ok_or_else(|| {
            HistverError::InvalidSemver(format!(
                "'{text}' does not start with tag prefix '{tag_prefix}'"
            ))
        })?;

        let semver = semver::Version::parse(unprefixed)
            .map_err(|e| HistverError::InvalidSemver(format!("'{unprefixed}': {e}")))?;

        Ok(Self::from_semver(&semver))
    }

    /// Convert from a parsed `semver` version, keeping all fields.
    pub fn from_semver(semver: &semver::Version) -> Self {
        Self {
            major: semver.major,
            minor: semver.minor,
            patch: semver.patch,
            pre_release: split_identifiers(semver.pre.as_str()),
            build_metadata: split_identifiers(semver.build.as_str()),
        }
    }

    /// Check if this version has pre-release identifiers.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Bump one part, zeroing the lower parts and clearing pre-release and
    /// build metadata.
    pub fn increment(&self, part: &VersionPart) -> Self {
        match part {
            VersionPart::Major => Self::new(self.major + 1, 0, 0),
            VersionPart::Minor => Self::new(self.major, self.minor + 1, 0),
            VersionPart::Patch => Self::new(self.major, self.minor, self.patch + 1),
        }
    }

    /// Fold a commit height into the version.
    ///
    /// Height zero is the identity. Above a pre-release tag the height is
    /// appended to the existing identifiers; above a release tag the chosen
    /// part is bumped, the default identifiers are attached, and the height
    /// is appended. Build metadata from the tag never survives a non-zero
    /// height.
    ///
    /// # Examples
    /// ```rust
    /// use histver::{Version, VersionPart};
    ///
    /// let release: Version = "1.2.3".parse().unwrap();
    /// let derived = release.with_height(5, &VersionPart::Patch, &["alpha".into(), "0".into()]);
    /// assert_eq!(derived.to_string(), "1.2.4-alpha.0.5");
    ///
    /// let pre: Version = "1.2.3-beta.1".parse().unwrap();
    /// let derived = pre.with_height(5, &VersionPart::Patch, &["alpha".into(), "0".into()]);
    /// assert_eq!(derived.to_string(), "1.2.3-beta.1.5");
    /// ```
    pub fn with_height(
        &self,
        height: u32,
        auto_increment: &VersionPart,
        default_pre_release: &[String],
    ) -> Self {
        if height == 0 {
            return self.clone();
        }

        if self.is_pre_release() {
            let mut pre_release = self.pre_release.clone();
            pre_release.push(height.to_string());

            Self {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                pre_release,
                build_metadata: Vec::new(),
            }
        } else {
            let incremented = self.increment(auto_increment);
            let mut pre_release = default_pre_release.to_vec();
            pre_release.push(height.to_string());

            Self {
                pre_release,
                ..incremented
            }
        }
    }

    /// Replace the build metadata with the dot-split identifiers of `bm`.
    ///
    /// An empty `bm` leaves the version unchanged.
    ///
    /// # Errors
    /// [`HistverError::InvalidBuildMetadata`] when any identifier is empty
    /// or contains characters outside `[0-9A-Za-z-]`.
    pub fn add_build_metadata(&self, bm: &str) -> Result<Self> {
        if bm.is_empty() {
            return Ok(self.clone());
        }

        let validated = semver::BuildMetadata::new(bm)
            .map_err(|e| HistverError::InvalidBuildMetadata(format!("'{bm}': {e}")))?;

        Ok(Self {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: self.pre_release.clone(),
            build_metadata: split_identifiers(validated.as_str()),
        })
    }

    /// Enforce a minimum major.minor floor.
    ///
    /// A version at or above the floor is returned unchanged. Below it, the
    /// result is `min.major.min.minor.0` with the default pre-release
    /// identifiers and no build metadata.
    pub fn satisfying(&self, minimum: &MajorMinor, default_pre_release: &[String]) -> Self {
        if (self.major, self.minor) >= (minimum.major, minimum.minor) {
            return self.clone();
        }

        Self {
            major: minimum.major,
            minor: minimum.minor,
            patch: 0,
            pre_release: default_pre_release.to_vec(),
            build_metadata: Vec::new(),
        }
    }
}

fn split_identifiers(s: &str) -> Vec<String> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split('.').map(str::to_string).collect()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }

        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata.join("."))?;
        }

        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = HistverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s, "")
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        // Build metadata never participates in precedence
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// SemVer 2.0 §11 precedence.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }
}

fn compare_pre_release(a: &[String], b: &[String]) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A release has higher precedence than any pre-release of it
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ordering = compare_identifier(x, y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            // All shared identifiers equal: the shorter sequence is lower
            a.len().cmp(&b.len())
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> std::cmp::Ordering {
    // Numeric identifiers compare numerically and are always lower than
    // alphanumeric ones; alphanumeric identifiers compare in ASCII order.
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
