//! CLI argument parsing and command dispatch

use abilist_harvester::error::Error;
use abilist_harvester::exit_codes;
use abilist_harvester::output::OutputConfig;
use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Copy glibc .abilist files for a series of releases into ./glibc/<version>
#[derive(Parser, Debug)]
#[command(name = "abilist-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    harvest: commands::harvest::HarvestArgs,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        commands::harvest::execute(self.harvest, &output)
    }
}

/// Route `log` records to stderr. `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Exit status for a failed run.
///
/// Library errors choose their own status (a failed checkout reports git's);
/// anything else is a general error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>()
        .map(Error::exit_code)
        .unwrap_or(exit_codes::ERROR)
}
