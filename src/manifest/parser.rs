//! Manifest file loading and parsing

use super::Project;
use crate::constants;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a manifest file and return the projects it lists, in file order.
///
/// A missing or unreadable manifest is fatal and propagates to the caller.
pub fn read_manifest(path: &Path) -> Result<Vec<Project>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

    Ok(parse_manifest(&content))
}

/// Parse manifest text into an ordered sequence of projects.
///
/// Records are three lines each: remote URL, commit identifier, and a
/// reserved line that is read but unused. Trailing partial records are
/// dropped, as are records whose first line is not a git remote; neither
/// case emits a diagnostic.
pub fn parse_manifest(content: &str) -> Vec<Project> {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();

    lines
        .chunks_exact(constants::manifest::RECORD_LINES)
        .filter_map(|record| Project::from_record(record[0], record[1]))
        .collect()
}
