//! # Harvest Configuration
//!
//! A harvest is described by a [`HarvestConfig`]: the repository to read, the
//! ordered list of versions, how versions map to tags, which files to copy,
//! and where to put them.
//!
//! Values come from, in decreasing priority: command-line flags (and their
//! environment variables), an optional YAML [`ConfigFile`], and the built-in
//! values in [`crate::defaults`].
//!
//! ## Config file
//!
//! ```yaml
//! versions: ["2.31", "2.32", "2.33"]
//! tag_prefix: glibc
//! pattern: "*.abilist"
//! output: corpus/glibc
//! ```
//!
//! Every key is optional. Unknown keys are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Deserialize;

use crate::defaults;
use crate::error::{Error, Result};

/// Overrides read from a YAML configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub versions: Option<Vec<String>>,
    pub tag_prefix: Option<String>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
}

impl ConfigFile {
    /// Parse a configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self> {
        // An empty or comment-only document means "no overrides"
        if yaml.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with('#')
        }) {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
            hint: Some(
                "supported keys are 'versions', 'tag_prefix', 'pattern' and 'output'".to_string(),
            ),
        })
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// Everything a harvest run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    /// Canonical path of the repository working tree.
    pub repo_path: PathBuf,
    /// Directory receiving one subdirectory per version.
    pub output_root: PathBuf,
    /// Versions to harvest, in order.
    pub versions: Vec<String>,
    /// Joined with a version as `<prefix>-<version>` to name the tag.
    pub tag_prefix: String,
    /// Glob matched against file names.
    pub pattern: String,
}

impl HarvestConfig {
    /// Configuration with built-in defaults for everything but the paths.
    pub fn new(repo_path: PathBuf, output_root: PathBuf) -> Self {
        Self {
            repo_path,
            output_root,
            versions: defaults::target_versions(),
            tag_prefix: defaults::TAG_PREFIX.to_string(),
            pattern: defaults::FILE_PATTERN.to_string(),
        }
    }

    /// Apply the values present in a configuration file.
    ///
    /// A relative `output` is resolved against `cwd`.
    pub fn merge_file(mut self, file: ConfigFile, cwd: &Path) -> Self {
        if let Some(versions) = file.versions {
            self.versions = versions;
        }
        if let Some(prefix) = file.tag_prefix {
            self.tag_prefix = prefix;
        }
        if let Some(pattern) = file.pattern {
            self.pattern = pattern;
        }
        if let Some(output) = file.output {
            self.output_root = cwd.join(output);
        }
        self
    }

    /// Check the configuration before anything touches the disk.
    pub fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(Error::ConfigParse {
                message: "version list is empty".to_string(),
                hint: Some("list at least one release under 'versions'".to_string()),
            });
        }
        if let Some(bad) = self
            .versions
            .iter()
            .find(|v| {
                v.trim().is_empty()
                    || v.contains('/')
                    || v.contains('\\')
                    || v.as_str() == "."
                    || v.as_str() == ".."
            })
        {
            return Err(Error::ConfigParse {
                message: format!("invalid version identifier '{}'", bad),
                hint: Some("versions become directory names, e.g. \"2.23\"".to_string()),
            });
        }
        if self.tag_prefix.trim().is_empty() {
            return Err(Error::ConfigParse {
                message: "tag prefix is empty".to_string(),
                hint: None,
            });
        }
        Pattern::new(&self.pattern).map_err(|e| Error::ConfigParse {
            message: format!("invalid file pattern '{}': {}", self.pattern, e),
            hint: Some("use a file-name glob such as \"*.abilist\"".to_string()),
        })?;
        Ok(())
    }

    /// Output directory for one version.
    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.output_root.join(version)
    }
}

/// Resolve the repository argument into a canonical directory path.
///
/// Errors when the argument is missing, does not exist, or is not a directory.
pub fn resolve_repository(arg: Option<&Path>) -> Result<PathBuf> {
    let path = arg.ok_or(Error::MissingRepository)?;
    if !path.is_dir() {
        return Err(Error::InvalidRepository {
            path: path.to_path_buf(),
        });
    }
    Ok(path.canonicalize()?)
}
