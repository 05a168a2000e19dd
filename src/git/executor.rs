//! git command executor
//!
//! Handles running `git log` and capturing its output.

use std::path::PathBuf;
use std::process::Command;

use super::parser::parse_log;
use super::{CommitSource, GitError};
use crate::model::CommitRecord;

/// git command binary name
const GIT_COMMAND: &str = "git";

/// Log format: hash, author name, unix timestamp, subject
const LOG_FORMAT: &str = "--pretty=format:%H|%an|%at|%s";

/// Error pattern indicating not a git repository
const NOT_A_REPO: &str = "not a git repository";

/// Executor for `git log`
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg("-C").arg(path);
        }

        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.to_lowercase().contains(NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Raw `git log` output with per-commit change statistics
    pub fn log_raw(&self, days: u32) -> Result<String, GitError> {
        let since = format!("--since={days}.days.ago");
        self.run(&["log", "--all", LOG_FORMAT, "--shortstat", &since])
    }
}

impl CommitSource for GitExecutor {
    fn fetch(&self, days: u32) -> Result<Vec<CommitRecord>, GitError> {
        let output = self.log_raw(days)?;
        Ok(parse_log(&output))
    }
}
