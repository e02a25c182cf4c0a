//! Default values for abilist-harvester configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! configuration loader, ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Release versions harvested when no override is given, in processing order.
pub const TARGET_VERSIONS: &[&str] = &[
    "2.23", "2.24", "2.25", "2.26", "2.27", "2.28", "2.29", "2.30", "2.31", "2.32", "2.33",
];

/// Prefix joined to each version with `-` to form the tag name.
pub const TAG_PREFIX: &str = "glibc";

/// File name pattern selecting the manifests to copy.
pub const FILE_PATTERN: &str = "*.abilist";

/// Name of the directory created under the working directory.
pub const OUTPUT_DIR_NAME: &str = "glibc";

/// Returns the default version list as owned strings.
pub fn target_versions() -> Vec<String> {
    TARGET_VERSIONS.iter().map(|v| v.to_string()).collect()
}

/// Returns the default output root, `<cwd>/glibc`.
///
/// This can be overridden by the `--output` CLI flag, the
/// `ABILIST_HARVESTER_OUTPUT` environment variable, or the `output` key of
/// the configuration file.
pub fn default_output_root(cwd: &Path) -> PathBuf {
    cwd.join(OUTPUT_DIR_NAME)
}
