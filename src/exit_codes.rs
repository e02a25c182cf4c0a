//! Process exit codes used by the `abilist-harvester` binary.
//!
//! - `0`: every version was harvested
//! - `1`: invalid invocation, configuration, or filesystem failure
//! - `2`: invalid command-line usage (reported by clap)
//!
//! A failed `git checkout` exits with the status git itself returned.

/// Successful run.
pub const SUCCESS: i32 = 0;

/// General error.
pub const ERROR: i32 = 1;

/// Invalid command-line usage.
pub const USAGE: i32 = 2;
