//! # Version Harvester
//!
//! Walks a fixed, ordered list of releases and, for each one, checks the
//! repository out at the release tag and copies every matching manifest into
//! `<output_root>/<version>/`, mirroring the file's location inside the
//! repository.
//!
//! ## Per-version steps
//!
//! 1. Create the version's output directory (reused if it already exists).
//! 2. Check out `<tag_prefix>-<version>`. A failure stops the whole run.
//! 3. Find files whose name matches the pattern, skipping `.git`.
//! 4. Copy each one to the mirrored path, creating directories as needed.
//!
//! Output from earlier runs is never removed, so files that disappeared from a
//! later checkout remain in the corpus.
//!
//! ## Example
//!
//! ```no_run
//! use abilist_harvester::config::HarvestConfig;
//! use abilist_harvester::harvest::Harvester;
//! use std::path::PathBuf;
//!
//! let config = HarvestConfig::new(PathBuf::from("/src/glibc"), PathBuf::from("glibc"));
//! let harvester = Harvester::new(config);
//! let summary = harvester
//!     .run(|report| println!("copied {} files for {}", report.files.len(), report.tag))
//!     .unwrap();
//! assert_eq!(summary.versions.len(), 11);
//! ```

use std::path::PathBuf;

use log::{debug, info};

use crate::config::HarvestConfig;
use crate::error::Result;
use crate::filesystem;
use crate::git::tag_name;
use crate::path::{mirror_destination, relative_to};
use crate::repository::{DefaultGitOperations, GitOperations};

/// What was harvested for one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub version: String,
    pub tag: String,
    /// `<output_root>/<version>`
    pub output_dir: PathBuf,
    /// Repository-relative paths of the copied files, in walk order.
    pub files: Vec<PathBuf>,
}

/// Reports for every version of a completed run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    pub versions: Vec<VersionReport>,
}

impl HarvestSummary {
    /// Total number of files copied across all versions.
    pub fn total_files(&self) -> usize {
        self.versions.iter().map(|v| v.files.len()).sum()
    }
}

/// Copies manifests out of a repository, one release tag at a time.
pub struct Harvester {
    config: HarvestConfig,
    git_ops: Box<dyn GitOperations>,
}

impl Harvester {
    /// Creates a harvester that checks tags out with the system `git`.
    pub fn new(config: HarvestConfig) -> Self {
        Self::with_operations(config, Box::new(DefaultGitOperations))
    }

    /// Creates a harvester with a custom `GitOperations` implementation.
    pub fn with_operations(config: HarvestConfig, git_ops: Box<dyn GitOperations>) -> Self {
        Self { config, git_ops }
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Harvest every configured version in order.
    ///
    /// `on_version` is called as soon as a version is finished, so progress
    /// for earlier versions is reported even when a later one fails. The first
    /// error ends the run.
    pub fn run<F>(&self, mut on_version: F) -> Result<HarvestSummary>
    where
        F: FnMut(&VersionReport),
    {
        let mut summary = HarvestSummary::default();

        for version in &self.config.versions {
            let report = self.harvest_version(version)?;
            on_version(&report);
            summary.versions.push(report);
        }

        info!(
            "harvested {} files across {} versions",
            summary.total_files(),
            summary.versions.len()
        );
        Ok(summary)
    }

    /// Harvest a single version: prepare its output directory, check out its
    /// tag, and copy every match.
    pub fn harvest_version(&self, version: &str) -> Result<VersionReport> {
        let repo = &self.config.repo_path;
        let output_dir = self.config.version_dir(version);
        let tag = tag_name(&self.config.tag_prefix, version);

        filesystem::ensure_dir(&output_dir)?;

        info!("checking out {} in {}", tag, repo.display());
        self.git_ops.checkout(repo, &tag)?;

        let mut files = Vec::new();
        for source in filesystem::find_matching_files(repo, &self.config.pattern)? {
            let relative = relative_to(&source, repo)?;
            let destination = mirror_destination(&output_dir, &relative);
            filesystem::copy_file(&source, &destination)?;
            files.push(relative);
        }

        debug!("{}: {} files -> {}", tag, files.len(), output_dir.display());

        Ok(VersionReport {
            version: version.to_string(),
            tag,
            output_dir,
            files,
        })
    }
}
