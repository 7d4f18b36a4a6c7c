//! Git operations using system git commands for maximum compatibility
//!
//! ## Sub-modules
//!
//! - [`clone`]: Repository materialization operations
//!   - `clone_no_checkout()` - Clone metadata only, no working tree
//!   - `is_repository()` - Probe a directory for a valid repository
//!   - `update_submodules()` - Initialize and update submodules recursively
//!   - `checkout_commit()` - Check out a commit, branch or tag
//!
//! - [`common`]: Shared utilities and helpers
//!   - `Logger` - Consistent per-project logging

pub mod clone;
pub mod common;

// Re-export all public functions at the module level
pub use clone::{checkout_commit, clone_no_checkout, is_repository, update_submodules};
pub use common::Logger;
