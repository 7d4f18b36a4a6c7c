//! Command implementations following the command pattern

pub mod base;
pub mod fetch;

pub use base::{Command, CommandContext};
pub use fetch::FetchCommand;
