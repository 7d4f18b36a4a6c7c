//! Fetch command implementation

use super::{Command, CommandContext};
use crate::constants;
use crate::git::{self, Logger};
use crate::manifest::Project;
use crate::utils;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::Path;

/// Fetch command: clone each project and pin it at its target commit
///
/// Projects are processed strictly in manifest order, one at a time.
/// Every per-project failure is reported and swallowed so the run
/// continues with the next project; the command itself only fails on
/// setup errors (creating the base directory) or a panicked worker.
pub struct FetchCommand {
    /// Protocol prefix prepended to each project path to form the
    /// clone URL
    pub remote_prefix: String,
}

impl Default for FetchCommand {
    fn default() -> Self {
        Self {
            remote_prefix: constants::git::CLONE_URL_PREFIX.to_string(),
        }
    }
}

#[async_trait]
impl Command for FetchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        if context.projects.is_empty() {
            println!("{}", "No projects found in manifest".yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!("Fetching {} projects...", context.projects.len()).green()
        );

        utils::ensure_directory_exists(&context.target_dir)?;

        for project in &context.projects {
            let project = project.clone();
            let url = project.clone_url(&self.remote_prefix);
            let target = context.target_dir.join(project.target_dir_name());

            tokio::task::spawn_blocking(move || fetch_project(&project, &url, &target)).await?;
        }

        Ok(())
    }
}

/// Clone one project, initialize its submodules and check out the
/// pinned commit. Failures are reported per step and never propagate;
/// a partially cloned directory is left in place.
fn fetch_project(project: &Project, url: &str, target: &Path) {
    let logger = Logger;

    logger.info(project, &format!("Cloning from {}", url));

    if let Err(e) = git::clone_no_checkout(url, target) {
        logger.error(project, &format!("Could not clone: {e}"));
        logger.error(project, "Check if the repository exists (i.e., is public)");
        return;
    }

    if !git::is_repository(target) {
        logger.error(project, "Could not clone");
        return;
    }

    if let Err(e) = git::update_submodules(target) {
        logger.error(project, &format!("Could not clone: {e}"));
        logger.error(project, "Check if the repository exists (i.e., is public)");
        return;
    }

    if let Err(e) = git::checkout_commit(target, &project.commit) {
        logger.error(
            project,
            &format!("Could not check out commit {}: {e}", project.commit),
        );
        return;
    }

    logger.success(project, &format!("Pinned at {}", project.commit));
}
