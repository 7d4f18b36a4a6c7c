//! Repository materialization operations
//!
//! This module wraps the system `git` binary for the three steps the
//! fetch driver performs per project: a no-checkout clone, a recursive
//! submodule update, and a checkout of the pinned commit. A validity
//! probe distinguishes a corrupt clone from a failed clone command.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Clone a repository into the target directory without populating a
/// working tree. History and metadata only; the working tree is created
/// later by [`checkout_commit`].
pub fn clone_no_checkout(url: &str, target_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["clone", "--no-checkout", url])
        .arg(target_dir)
        .output()
        .context("Failed to execute git clone command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Failed to clone repository: {}", stderr.trim());
    }

    Ok(())
}

/// Check whether a directory holds a valid git repository
pub fn is_repository(dir: &Path) -> bool {
    // The .git check keeps the probe from resolving to an enclosing
    // repository when the clone left nothing behind.
    if !dir.join(".git").exists() {
        return false;
    }

    Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .current_dir(dir)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Initialize and update all submodules of a cloned repository,
/// recursively
pub fn update_submodules(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["submodule", "update", "--init", "--recursive"])
        .current_dir(dir)
        .output()
        .context("Failed to execute git submodule command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Failed to update submodules: {}", stderr.trim());
    }

    Ok(())
}

/// Check out a commit identifier (hash, branch or tag) in a cloned
/// repository
pub fn checkout_commit(dir: &Path, commit: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["checkout", commit])
        .current_dir(dir)
        .output()
        .context("Failed to execute git checkout command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Failed to check out '{}': {}", commit, stderr.trim());
    }

    Ok(())
}
