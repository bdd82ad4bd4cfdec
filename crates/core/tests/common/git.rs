//! Git test helpers for creating and manipulating test repositories

use std::path::Path;
use std::process::Command;

/// Result type for test operations
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Run a git command and check for success
pub fn run_git_command(args: &[&str], cwd: &Path) -> TestResult {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| format!("Failed to run git command: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Git command failed: {}", stderr).into());
    }

    Ok(())
}

/// Create an empty git repository and make an initial commit
#[allow(dead_code)]
pub async fn ensure_empty_repository_and_commit(path: &Path) -> TestResult {
    ensure_empty_repository(path).await?;
    commit(path).await
}

/// Create an empty git repository
pub async fn ensure_empty_repository(path: &Path) -> TestResult {
    // Create directory
    std::fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {}", e))?;

    // Initialize repository
    run_git_command(&["init", "--initial-branch=main"], path)?;

    // Configure git user
    run_git_command(&["config", "user.email", "test@example.com"], path)?;
    run_git_command(&["config", "user.name", "Test User"], path)?;
    // Disable GPG signing
    run_git_command(&["config", "commit.gpgsign", "false"], path)?;

    Ok(())
}

/// Create a commit
#[allow(dead_code)]
pub async fn commit(path: &Path) -> TestResult {
    run_git_command(&["commit", "--allow-empty", "-m", "."], path)
}

/// Create a tag
#[allow(dead_code)]
pub async fn tag(path: &Path, tag_name: &str) -> TestResult {
    run_git_command(&["tag", tag_name], path)
}

/// Create an annotated tag
#[allow(dead_code)]
pub async fn annotated_tag(path: &Path, tag_name: &str, message: &str) -> TestResult {
    run_git_command(&["tag", "-a", tag_name, "-m", message], path)
}

/// Checkout a specific commit or branch
#[allow(dead_code)]
pub async fn checkout(path: &Path, ref_name: &str) -> TestResult {
    run_git_command(&["checkout", ref_name], path)
}

/// Get the SHA of a revision
#[allow(dead_code)]
pub async fn rev_parse(path: &Path, rev: &str) -> TestResult<String> {
    let output = Command::new("git")
        .args(["rev-parse", rev])
        .current_dir(path)
        .output()
        .map_err(|e| format!("Failed to run git rev-parse: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git rev-parse failed: {}", stderr).into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Get the SHA of the most recent merge commit reachable from `rev`
#[allow(dead_code)]
pub async fn latest_merge_commit(path: &Path, rev: &str) -> TestResult<String> {
    let output = Command::new("git")
        .args(["log", rev, "--merges", "-1", "--pretty=format:%H"])
        .current_dir(path)
        .output()
        .map_err(|e| format!("Failed to run git log: {}", e))?;

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() {
        return Err("No merge commit found".into());
    }

    Ok(sha)
}
