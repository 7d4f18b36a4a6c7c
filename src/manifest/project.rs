//! Project references derived from manifest records

use crate::constants;

/// Shape of a remote line in the manifest
///
/// Closed two-case variant: a remote is either an SSH-style GitHub
/// reference or a generic URL. Each case has its own pure extraction
/// rule for the trailing `owner/repo` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteUrl {
    /// SSH-style remote, e.g. `git@github.com:owner/repo.git`
    Ssh(String),
    /// Any other URL form, e.g. `https://github.com/owner/repo.git`
    Generic(String),
}

impl RemoteUrl {
    /// Classify a manifest line, or `None` when the line does not look
    /// like a git remote at all (no `.git` marker).
    pub fn classify(line: &str) -> Option<Self> {
        if !line.contains(constants::git::REMOTE_MARKER) {
            return None;
        }

        if line.contains(constants::git::SSH_PREFIX) {
            Some(RemoteUrl::Ssh(line.to_string()))
        } else {
            Some(RemoteUrl::Generic(line.to_string()))
        }
    }

    /// Extract the normalized `owner/repo` path from the remote.
    ///
    /// SSH remotes take everything after the first colon; generic URLs
    /// take the last two path segments.
    pub fn owner_repo(&self) -> String {
        match self {
            RemoteUrl::Ssh(url) => match url.split_once(':') {
                Some((_, rest)) => rest.to_string(),
                None => url.clone(),
            },
            RemoteUrl::Generic(url) => {
                let segments: Vec<&str> = url.split('/').collect();
                segments[segments.len().saturating_sub(2)..].join("/")
            }
        }
    }
}

/// One parsed manifest record: a repository path and the commit to pin
///
/// Immutable after parsing; consumed once per run by the fetch driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Normalized repository path in `owner/repo` form
    pub path: String,
    /// Commit identifier accepted by `git checkout` (hash, branch or tag)
    pub commit: String,
}

impl Project {
    pub fn new(path: String, commit: String) -> Self {
        Self { path, commit }
    }

    /// Build a project from the first two lines of a manifest record.
    ///
    /// Returns `None` when the URL line is not recognizable as a git
    /// remote; such records are dropped without a diagnostic.
    pub fn from_record(url_line: &str, commit_line: &str) -> Option<Self> {
        let remote = RemoteUrl::classify(url_line)?;
        Some(Self::new(remote.owner_repo(), commit_line.to_string()))
    }

    /// Flat directory name for this project: the `owner/repo` path with
    /// every separator replaced by `#`.
    ///
    /// `#` cannot appear in repository path segments, so distinct
    /// projects never collide under this transform.
    pub fn target_dir_name(&self) -> String {
        self.path.replace('/', "#")
    }

    /// Clone URL built from a protocol prefix and the repository path
    pub fn clone_url(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.path)
    }
}
