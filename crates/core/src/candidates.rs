//! Candidate search over the commit graph.

use std::collections::HashSet;

use crate::error::Result;
use crate::tags::TagIndex;
use crate::version::Version;

/// Parent-traversal capability of a commit store.
///
/// The resolver runs against [`crate::git::Repository`]; tests substitute
/// in-memory graphs.
pub trait CommitGraph {
    /// Parents of a commit in recorded order, first parent first.
    fn parents_of(&self, id: &gix::ObjectId) -> Result<Vec<gix::ObjectId>>;
}

/// A version-bearing commit considered for selection.
///
/// `tag` is empty for the synthetic candidate emitted at an untagged root
/// commit. `index` is the insertion order within one search and is the
/// deterministic tie-breaker between equal versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub commit_id: gix::ObjectId,
    pub height: u32,
    pub tag: String,
    pub version: Version,
    pub index: usize,
}

/// Search the ancestors of `head` for version candidates.
///
/// Depth-first with a LIFO frontier: parents are pushed in reverse recorded
/// order so the first parent is explored first. A tagged commit emits one
/// candidate per tag and its parents are not explored; an untagged root
/// emits a synthetic `0.0.0` candidate with the default pre-release
/// identifiers. Heights are discovery-path distances from `head`.
///
/// Every commit id is processed at most once, so the search terminates on
/// any graph, and the candidate list (including `index` values) is identical
/// across runs over identical inputs.
pub fn search<G: CommitGraph>(
    graph: &G,
    head: gix::ObjectId,
    tags: &TagIndex,
    default_pre_release: &[String],
) -> Result<Vec<Candidate>> {
    let mut frontier: Vec<(gix::ObjectId, u32)> = vec![(head, 0)];
    let mut visited: HashSet<gix::ObjectId> = HashSet::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    while let Some((id, height)) = frontier.pop() {
        if !visited.insert(id) {
            continue;
        }

        if let Some(tagged) = tags.get(&id) {
            for tag in tagged {
                if tracing::enabled!(tracing::Level::TRACE) {
                    tracing::trace!(
                        "Found candidate {} with tag '{}' and version {} at height {}",
                        id,
                        tag.name,
                        tag.version,
                        height
                    );
                }
                candidates.push(Candidate {
                    commit_id: id,
                    height,
                    tag: tag.name.clone(),
                    version: tag.version.clone(),
                    index: candidates.len(),
                });
            }
            // Stop on tag: the parents of a tagged commit are not explored
            continue;
        }

        let parents = graph.parents_of(&id)?;
        if parents.is_empty() {
            tracing::trace!("Found root commit {} at height {}", id, height);
            candidates.push(Candidate {
                commit_id: id,
                height,
                tag: String::new(),
                version: Version::initial(default_pre_release),
                index: candidates.len(),
            });
            continue;
        }

        for parent in parents.into_iter().rev() {
            frontier.push((parent, height + 1));
        }
    }

    Ok(candidates)
}
