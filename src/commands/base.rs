//! Base types and traits for the command pattern

use crate::manifest::Project;
use anyhow::Result;
use std::path::PathBuf;

/// Context passed to all commands containing the parsed manifest and
/// target location
#[derive(Clone)]
pub struct CommandContext {
    /// Projects parsed from the manifest, in manifest order
    pub projects: Vec<Project>,
    /// Base directory the working copies are materialized under
    pub target_dir: PathBuf,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
