//! Git repository discovery and access.

use std::path::{Path, PathBuf};

use crate::candidates::CommitGraph;
use crate::error::{HistverError, Result};

/// Git repository wrapper exposing the few operations the resolver needs:
/// HEAD, the tag set, and parent traversal.
pub struct Repository {
    inner: gix::Repository,
    is_shallow: bool,
}

impl Repository {
    /// Discover and open a Git repository at or above the given directory.
    ///
    /// # Errors
    /// [`HistverError::RepoNotFound`] when no ancestor of `path` contains a
    /// repository.
    pub fn discover(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let repo = gix::discover(&path)
            .map_err(|e| HistverError::RepoNotFound(format!("{}: {}", path.display(), e)))?;

        let is_shallow = repo.is_shallow();

        Ok(Self {
            inner: repo,
            is_shallow,
        })
    }

    /// Check if the repository is shallow. Heights computed in a shallow
    /// clone may be wrong.
    pub fn is_shallow(&self) -> bool {
        self.is_shallow
    }

    /// Get the repository's work directory.
    pub fn work_dir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    /// The commit id at HEAD.
    ///
    /// # Errors
    /// [`HistverError::UnbornHead`] when the branch has no commits yet.
    pub fn head_commit(&self) -> Result<gix::ObjectId> {
        let mut head = self
            .inner
            .head()
            .map_err(|e| HistverError::Git(format!("Failed to get HEAD: {}", e)))?;

        match head.try_peel_to_id() {
            Ok(Some(id)) => Ok(id.detach()),
            Ok(None) | Err(_) => Err(HistverError::UnbornHead),
        }
    }

    /// All tags as `(name, peeled target commit id)` pairs, in reference
    /// iteration order. Tags that cannot be peeled to a commit are skipped.
    pub fn tags(&self) -> Result<Vec<(String, gix::ObjectId)>> {
        let refs = self
            .inner
            .references()
            .map_err(|e| HistverError::Git(format!("Failed to get references: {}", e)))?;

        let tag_refs = refs
            .tags()
            .map_err(|e| HistverError::Git(format!("Failed to get tags: {}", e)))?;

        let mut tags = Vec::new();
        for mut tag_ref in tag_refs.flatten() {
            let name = tag_ref.name().shorten().to_string();

            match tag_ref.peel_to_id() {
                Ok(id) => tags.push((name, id.detach())),
                Err(e) => {
                    tracing::debug!("Skipping unpeelable tag '{}': {}", name, e);
                }
            }
        }

        Ok(tags)
    }
}

impl CommitGraph for Repository {
    fn parents_of(&self, id: &gix::ObjectId) -> Result<Vec<gix::ObjectId>> {
        let commit = self
            .inner
            .find_object(*id)
            .map_err(|e| HistverError::Git(format!("Failed to find commit {}: {}", id, e)))?
            .try_into_commit()
            .map_err(|e| HistverError::Git(format!("Object {} is not a commit: {}", id, e)))?;

        Ok(commit.parent_ids().map(|parent| parent.detach()).collect())
    }
}

/// Check if the given directory is inside a Git repository.
pub fn is_git_directory(path: impl Into<PathBuf>) -> bool {
    gix::discover(path.into()).is_ok()
}
