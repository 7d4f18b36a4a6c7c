//! Common git utilities and shared helpers

use crate::manifest::Project;
use colored::*;

/// Logger for git operations with consistent formatting
///
/// Each message is prefixed with the project path in cyan/bold so that
/// interleaved output from a long run stays attributable.
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, project: &Project, msg: &str) {
        println!("{} | {}", project.path.cyan().bold(), msg);
    }

    pub fn success(&self, project: &Project, msg: &str) {
        println!("{} | {}", project.path.cyan().bold(), msg.green());
    }

    pub fn error(&self, project: &Project, msg: &str) {
        eprintln!("{} | {}", project.path.cyan().bold(), msg.red());
    }
}
