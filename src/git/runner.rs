//! Running the system `git` binary.
//!
//! All operations shell out to `git`, inheriting the user's existing git
//! config, hooks, and signing setup.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

/// Something that can run a git subcommand and return its stdout.
///
/// This abstraction allows substituting a fake git in tests.
pub trait GitRunner {
    /// Run `git <args>`. `operation` is a short label used in error messages.
    fn run(&self, args: &[&str], operation: &str) -> Result<String, GitError>;
}

/// Runs the real `git` binary inside a repository's working tree.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    /// Bind to an explicit working directory without any discovery.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Find the repository enclosing `path` and bind to its working tree.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo = Repository::discover(path.as_ref()).map_err(GitError::NotARepository)?;
        let workdir = repo.workdir().ok_or(GitError::BareRepository)?;
        debug!("Using repository at {}", workdir.display());
        Ok(Self::new(workdir))
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        debug!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::SpawnFailed {
                operation: operation.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                operation: operation.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check that the `git` executable is available on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// Short name of the checked-out branch, if HEAD points at one.
///
/// Returns `None` for unborn branches, detached HEADs, or when the
/// repository cannot be opened.
pub fn current_branch(path: impl AsRef<Path>) -> Option<String> {
    let repo = Repository::discover(path.as_ref()).ok()?;
    let head = repo.head().ok()?;
    if !head.is_branch() {
        return None;
    }
    head.shorthand().map(str::to_string)
}
