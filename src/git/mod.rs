//! Commit source adapter
//!
//! This module handles executing `git log` and parsing its output into
//! [`CommitRecord`](crate::model::CommitRecord) batches. Malformed records
//! are skipped at this boundary so synthesis never sees a partial commit.

mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

use crate::model::CommitRecord;

/// Errors that can occur when reading commit history
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

/// A producer of ordered commit batches.
///
/// The subprocess-backed [`GitExecutor`] is the default implementation;
/// tests supply in-memory batches instead.
pub trait CommitSource {
    /// Fetch commits from the last `days` days.
    fn fetch(&self, days: u32) -> Result<Vec<CommitRecord>, GitError>;
}
