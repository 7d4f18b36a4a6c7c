//! Manifest parsing module
//!
//! The manifest is a plain-text file listing repositories to fetch, three
//! lines per record: remote URL, commit identifier, and a reserved line.
//!
//! ## Sub-modules
//!
//! - [`project`]: The [`Project`] reference type and remote URL classification
//! - [`parser`]: Reading a manifest file into an ordered list of projects

pub mod parser;
pub mod project;

pub use parser::{parse_manifest, read_manifest};
pub use project::{Project, RemoteUrl};
