//! Tag-version index construction.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::Result;
use crate::git::Repository;
use crate::version::Version;

/// Map from commit ids to the version tags pointing at them.
pub type TagIndex = HashMap<gix::ObjectId, Vec<TaggedVersion>>;

/// A tag whose name parsed as a version behind the configured prefix.
#[derive(Debug, Clone)]
pub struct TaggedVersion {
    pub name: String,
    pub version: Version,
}

/// Build the tag-version index from every tag in the repository.
///
/// Tags that do not start with the configured prefix, or whose remainder is
/// not valid SemVer 2.0, are logged at debug level and dropped. Multiple
/// tags pointing at the same commit all enter the index.
pub fn collect(repo: &Repository, config: &Config) -> Result<TagIndex> {
    let mut index: TagIndex = HashMap::new();

    for (name, target_id) in repo.tags()? {
        match Version::parse(&name, &config.tag_prefix) {
            Ok(version) => {
                index
                    .entry(target_id)
                    .or_default()
                    .push(TaggedVersion { name, version });
            }
            Err(e) => {
                tracing::debug!("Ignoring tag '{}': {}", name, e);
            }
        }
    }

    Ok(index)
}
