//! Path manipulation utilities for abilist-harvester

use crate::error::{Error, Result};
use glob::Pattern;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Compile a file-name glob such as `*.abilist`.
pub fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(Error::Glob)
}

/// Match a file name against a compiled glob.
///
/// Names that are not valid UTF-8 never match.
pub fn glob_match(pattern: &Pattern, name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| pattern.matches(name))
}

/// Compute `path` relative to `root`.
///
/// Relativization works on whole path components, so `/src/glibc2/a` is not
/// considered to be under `/src/glibc`.
pub fn relative_to(path: &Path, root: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| Error::Path {
            message: format!(
                "{} is not inside {}",
                path.display(),
                root.display()
            ),
        })
}

/// Destination of a repository-relative file under a version's output directory.
pub fn mirror_destination(output_dir: &Path, relative: &Path) -> PathBuf {
    output_dir.join(relative)
}
