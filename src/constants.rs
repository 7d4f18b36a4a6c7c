//! Central constants for the repofetch application

/// Default values for Git operations
pub mod git {
    /// Substring that marks a manifest line as a git remote
    pub const REMOTE_MARKER: &str = ".git";

    /// Prefix identifying SSH-style GitHub remotes
    pub const SSH_PREFIX: &str = "git@github.com:";

    /// Protocol prefix prepended to an owner/repo path to form a clone URL
    pub const CLONE_URL_PREFIX: &str = "https://github.com/";
}

/// Default values for manifest parsing
pub mod manifest {
    /// Number of lines in one manifest record (URL, commit, reserved)
    pub const RECORD_LINES: usize = 3;
}
