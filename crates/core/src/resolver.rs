//! Candidate ranking and version derivation.

use std::path::Path;

use crate::candidates::{self, Candidate};
use crate::config::Config;
use crate::error::{HistverError, Result};
use crate::git::Repository;
use crate::tags;
use crate::version::Version;

/// Outcome of one resolve run.
#[derive(Debug, Clone)]
pub(crate) struct Resolution {
    pub version: Version,
    pub height: u32,
    pub is_from_tag: bool,
}

/// Resolve the version for the repository at or above `work_dir`.
///
/// The repository handle lives only long enough to build the tag index and
/// the candidate list; all derivation below runs on owned data.
pub(crate) fn resolve(work_dir: &Path, config: &Config) -> Result<Resolution> {
    let candidates = {
        let repo = Repository::discover(work_dir)?;

        if repo.is_shallow() {
            tracing::warn!(
                "Shallow repository detected. Version calculation may be incorrect. \
                 Fetch full history with 'git fetch --unshallow'."
            );
        }

        let index = tags::collect(&repo, config)?;

        let head = match repo.head_commit() {
            Ok(id) => id,
            Err(HistverError::UnbornHead) => {
                tracing::info!("HEAD has no commits. Using default version.");
                return default_resolution(config);
            }
            Err(e) => return Err(e),
        };

        candidates::search(&repo, head, &index, &config.default_pre_release_identifiers)?
    };

    match select(candidates) {
        Some(selected) => derive(selected, config),
        None => {
            tracing::debug!("No candidates found. Using default version.");
            default_resolution(config)
        }
    }
}

/// The default-version outcome used outside a repository and on an unborn
/// HEAD. Build metadata and the minimum floor still apply.
pub(crate) fn default_resolution(config: &Config) -> Result<Resolution> {
    let version = finish(
        Version::initial(&config.default_pre_release_identifiers),
        config,
    )?;

    Ok(Resolution {
        version,
        height: 0,
        is_from_tag: false,
    })
}

/// Rank candidates by `(version ASC, index DESC)` and select the last.
///
/// The winner is the highest version; between equal versions the stable
/// insertion index decides, never commit time.
fn select(mut candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| b.index.cmp(&a.index)));

    let selected = candidates.pop();
    if let Some(ref candidate) = selected {
        tracing::info!(
            "Selected candidate {} with tag '{}' and version {} at height {}",
            candidate.commit_id,
            candidate.tag,
            candidate.version,
            candidate.height
        );
    }

    selected
}

/// Fold height and configuration into the selected candidate.
pub(crate) fn derive(selected: Candidate, config: &Config) -> Result<Resolution> {
    let height = selected.height;
    let is_from_tag = height == 0 && !selected.tag.is_empty();

    let effective_height = if config.ignore_height {
        if height > 0 {
            tracing::debug!("Ignoring height {}", height);
        }
        0
    } else {
        height
    };

    let version = selected.version.with_height(
        effective_height,
        &config.auto_increment,
        &config.default_pre_release_identifiers,
    );

    // Tag build metadata only survives exactly on the tag; with the height
    // ignored the derivation above cannot have stripped it.
    let version = if height > 0 && !version.build_metadata.is_empty() {
        Version {
            build_metadata: Vec::new(),
            ..version
        }
    } else {
        version
    };

    let version = finish(version, config)?;
    tracing::debug!("Calculated version {}", version);

    Ok(Resolution {
        version,
        height,
        is_from_tag,
    })
}

/// Apply configured build metadata, then the minimum major.minor floor.
///
/// Configured metadata is appended after any metadata already on the
/// version, joined with a dot. A floor rewrite drops the metadata again:
/// carrying it across a forced bump would misrepresent provenance.
fn finish(version: Version, config: &Config) -> Result<Version> {
    let version = match config.build_metadata.as_deref().filter(|bm| !bm.is_empty()) {
        Some(bm) => {
            let merged = if version.build_metadata.is_empty() {
                bm.to_string()
            } else {
                format!("{}.{}", version.build_metadata.join("."), bm)
            };
            version.add_build_metadata(&merged)?
        }
        None => version,
    };

    Ok(match &config.minimum_major_minor {
        Some(minimum) => version.satisfying(minimum, &config.default_pre_release_identifiers),
        None => version,
    })
}
