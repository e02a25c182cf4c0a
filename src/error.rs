//! # Error Handling
//!
//! This module defines the centralized error type for `abilist-harvester`.
//! It uses the `thiserror` library to describe every failure the harvester
//! can run into, with enough context to tell the user which repository, tag,
//! or path was involved.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum covering invalid invocations, checkout
//!   failures, filesystem and path errors, and configuration problems.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Every variant maps onto a process exit status through
//! [`Error::exit_code`]. Checkout failures carry the status reported by the
//! `git` subprocess so the binary can exit with that same status.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Main error type for abilist-harvester operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repository argument was not supplied.
    #[error("please provide glibc repository directory")]
    MissingRepository,

    /// The repository argument does not name an existing directory.
    #[error("provided glibc path is not a directory: {}", path.display())]
    InvalidRepository { path: PathBuf },

    /// `git checkout` ran but reported failure.
    ///
    /// `code` is the subprocess exit status, absent when the process was
    /// terminated by a signal.
    #[error("checkout {tag} in {}: {stderr}", repo.display())]
    Checkout {
        repo: PathBuf,
        tag: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A git command could not be executed at all.
    #[error("Git command failed: {command} - {message}")]
    GitCommand { command: String, message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An error occurred while preparing the output tree.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// The harvest configuration is invalid.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error raised while walking the repository tree.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

impl Error {
    /// The process exit status this error should terminate the run with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Checkout { code, .. } => match code {
                Some(code) if *code != exit_codes::SUCCESS => *code,
                _ => exit_codes::ERROR,
            },
            _ => exit_codes::ERROR,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
