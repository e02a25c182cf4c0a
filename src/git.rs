use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::Error;

/// Build the tag name for a release, e.g. `glibc-2.23`.
pub fn tag_name(prefix: &str, version: &str) -> String {
    format!("{}-{}", prefix, version)
}

/// Switch the working tree of `repo` to `tag`.
///
/// This uses the system git command, so any git configuration of the
/// repository (hooks, sparse checkout, worktrees) applies as usual.
pub fn checkout(repo: &Path, tag: &str) -> Result<(), Error> {
    // Execute git -C <repo> checkout <tag>
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["checkout", tag])
        .output()
        .map_err(|e| Error::GitCommand {
            command: format!("checkout {}", tag),
            message: e.to_string(),
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(Error::Checkout {
            repo: repo.to_path_buf(),
            tag: tag.to_string(),
            code: output.status.code(),
            stderr: stderr.trim().to_string(),
        });
    }

    debug!("git checkout {}: {}", tag, stderr.trim());
    Ok(())
}
