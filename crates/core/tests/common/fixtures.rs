//! Shared repository histories for integration tests

/// A realistic tagged history with a feature branch merged back into main.
/// Run after `ensure_empty_repository_and_commit` (the initial commit is the
/// root). Each entry is one git invocation.
#[allow(dead_code)]
pub const REPO_WITH_HISTORY: &[&[&str]] = &[
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "0.0.0-alpha.1"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "0.0.0"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "0.1.0-beta.1"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "0.1.0"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.0.0-alpha.1"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.0.0-rc.1"],
    &["tag", "1.0.0"],
    &["checkout", "-b", "foo"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.0.1-alpha.1"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.0.1"],
    &["commit", "--allow-empty", "-m", "."],
    &["checkout", "main"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.1.0-alpha.1"],
    &["commit", "--allow-empty", "-m", "."],
    &["merge", "foo", "--no-edit"],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.1.0-beta.2"],
    &["tag", "1.1.0-beta.10"],
    &["commit", "--allow-empty", "-m", "."],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.1.0-rc.1"],
    &["tag", "1.1.0"],
];

/// A history ending in an octopus merge, with a non-version tag and a
/// pre-release tag on a merged branch. Run after
/// `ensure_empty_repository` (no initial commit).
#[allow(dead_code)]
pub const OCTOPUS_MERGE: &[&[&str]] = &[
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "not-a-version"],
    &["checkout", "-b", "foo"],
    &["commit", "--allow-empty", "-m", "."],
    &["tag", "1.0.0-foo.1"],
    &["checkout", "main"],
    &["merge", "foo", "--no-edit", "--no-ff"],
    &["checkout", "-b", "bar"],
    &["commit", "--allow-empty", "-m", "."],
    &["checkout", "main"],
    &["checkout", "-b", "baz"],
    &["commit", "--allow-empty", "-m", "."],
    &["checkout", "main"],
    &["merge", "bar", "baz", "--no-edit", "--no-ff", "--strategy=octopus"],
];
