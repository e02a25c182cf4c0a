//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for the two directories every harvest run
//! involves: the working directory the tool runs in (where `glibc/` is
//! created) and the git repository it reads from.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let repo = GitRepo::new().with_release("glibc-2.23", &[("libc.abilist", "x")]);
//!     let fixture = TestFixture::new();
//!     fixture.command().arg(repo.path()).arg("--versions").arg("2.23").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    #[allow(unused_imports)]
    pub use super::GitRepo;
    pub use super::TestFixture;
}

/// Check whether a usable `git` binary is on `PATH`.
#[allow(dead_code)]
pub fn git_available() -> bool {
    if env::var("SKIP_GIT_TESTS").is_ok() {
        return false;
    }
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A working directory for running the CLI.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory, with plain output
    /// and no configuration leaking in from the environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("abilist-harvester");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("ABILIST_HARVESTER_OUTPUT")
            .env_remove("ABILIST_HARVESTER_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A throwaway git repository with one tag per simulated release.
#[allow(dead_code)]
pub struct GitRepo {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl GitRepo {
    /// Initialize an empty repository.
    pub fn new() -> Self {
        let repo = Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        };
        repo.git(&["init", "-q"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run git in the repository with a fixed identity, panicking on failure.
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args([
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
                "-c",
                "tag.gpgsign=false",
            ])
            .args(args)
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    /// Write `files`, commit everything, and tag the commit.
    pub fn with_release(self, tag: &str, files: &[(&str, &str)]) -> Self {
        self.with_release_removing(tag, files, &[])
    }

    /// Like `with_release`, also deleting `removed` before committing.
    pub fn with_release_removing(self, tag: &str, files: &[(&str, &str)], removed: &[&str]) -> Self {
        for (path, content) in files {
            self.temp_dir
                .child(path)
                .write_str(content)
                .expect("Failed to write file");
        }
        for path in removed {
            std::fs::remove_file(self.path().join(path)).expect("Failed to remove file");
        }
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "--allow-empty", "-m", tag]);
        self.git(&["tag", tag]);
        self
    }
}
