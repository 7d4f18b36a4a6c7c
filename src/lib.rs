//! Repofetch - a CLI tool for cloning repositories pinned at target commits

pub mod commands;
pub mod constants;
pub mod git;
pub mod manifest;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext, FetchCommand};
pub use manifest::{Project, RemoteUrl};
