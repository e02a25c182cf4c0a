//! # abilist-harvester CLI
//!
//! This is the binary entry point for the `abilist-harvester` command-line
//! tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the harvest described by those arguments.
//! - Translating a failed run into a message on stderr and the matching exit
//!   status.
//!
//! The harvesting logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.execute() {
        eprintln!("Error: {:#}", err);
        std::process::exit(cli::exit_code(&err));
    }
}
