//! On-disk helpers for discovering and copying harvested files

use crate::error::{Error, Result};
use crate::path::{compile_pattern, glob_match};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory never descended into while walking a repository.
const GIT_DIR: &str = ".git";

/// Recursively find files under `root` whose file name matches `pattern`.
///
/// The walk skips `.git`, never descends through directory symlinks, and
/// yields paths in file-name order so repeated runs see the same sequence.
/// A symlink whose target is a regular file is reported like the file itself.
pub fn find_matching_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = compile_pattern(pattern)?;
    let mut matches = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != GIT_DIR)
    {
        let entry = entry?;
        if glob_match(&pattern, entry.file_name()) && is_file_or_file_link(&entry) {
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}

fn is_file_or_file_link(entry: &DirEntry) -> bool {
    if !entry.path_is_symlink() {
        return entry.file_type().is_file();
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => meta.is_file(),
        Err(err) => {
            debug!("skipping dangling link {}: {}", entry.path().display(), err);
            false
        }
    }
}

/// Create `path` and any missing parents.
///
/// Fails when something other than a directory already occupies `path`.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::Filesystem {
            message: format!("{} exists and is not a directory", path.display()),
        });
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Copy `src` to `dst` byte for byte, creating parent directories and
/// overwriting any existing file.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = fs::copy(src, dst)?;
    debug!("copied {} -> {} ({} bytes)", src.display(), dst.display(), bytes);
    Ok(bytes)
}
