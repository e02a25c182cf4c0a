//! # Repository Access
//!
//! The harvester only ever asks one thing of the repository it works on:
//! "switch the working tree to this tag". That request goes through the
//! [`GitOperations`] trait so the control flow of a harvest can be exercised
//! without a real `git` binary.
//!
//! In the main application, [`DefaultGitOperations`] is used, which wraps the
//! system `git` command. In tests it can be replaced with a fake that rewrites
//! the working tree itself.

use crate::error::Result;
use std::path::Path;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Switches the working tree of `repo` to the state recorded by `tag`.
    fn checkout(&self, repo: &Path, tag: &str) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn checkout(&self, repo: &Path, tag: &str) -> Result<()> {
        crate::git::checkout(repo, tag)
    }
}
