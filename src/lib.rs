//! # abilist-harvester
//!
//! This library builds a historical corpus of glibc ABI manifests
//! (`*.abilist` files) from a local clone of the glibc repository. It is used
//! by the `abilist-harvester` command-line tool but can also be driven
//! directly, for example with a custom version list or a fake checkout in
//! tests.
//!
//! ## Quick Example
//!
//! ```no_run
//! use abilist_harvester::config::HarvestConfig;
//! use abilist_harvester::harvest::Harvester;
//! use std::path::PathBuf;
//!
//! let mut config = HarvestConfig::new(
//!     PathBuf::from("/src/glibc"),
//!     PathBuf::from("/data/abilists/glibc"),
//! );
//! config.versions = vec!["2.32".to_string(), "2.33".to_string()];
//!
//! let summary = Harvester::new(config).run(|_| {}).unwrap();
//! println!("{} files harvested", summary.total_files());
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`, `defaults`)**: Which versions to harvest, how
//!   they map to tags, which files to copy and where they go.
//! - **Repository access (`repository`, `git`)**: Switching the working tree
//!   to a release tag, behind the `GitOperations` trait.
//! - **Filesystem (`filesystem`, `path`)**: Finding matching files and copying
//!   them to mirrored locations under the output root.
//! - **Harvesting (`harvest`)**: The per-version loop tying it together.
//!
//! The resulting layout is `<output_root>/<version>/<path inside repository>`.

pub mod config;
pub mod defaults;
pub mod error;
pub mod exit_codes;
pub mod filesystem;
pub mod git;
pub mod harvest;
pub mod output;
pub mod path;
pub mod repository;

#[cfg(test)]
mod path_proptest;
