//! Harvest command implementation
//!
//! Resolves the repository argument, layers configuration (flags, config
//! file, defaults), then runs the harvester and prints one confirmation per
//! finished version.

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;

use abilist_harvester::config::{resolve_repository, ConfigFile, HarvestConfig};
use abilist_harvester::defaults;
use abilist_harvester::harvest::Harvester;
use abilist_harvester::output::{confirmation, OutputConfig};

/// Arguments for a harvest run
#[derive(Args, Debug)]
pub struct HarvestArgs {
    /// Path to the glibc repository working directory
    #[arg(value_name = "REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Output root (defaults to ./glibc)
    #[arg(short, long, value_name = "DIR", env = "ABILIST_HARVESTER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(short, long, value_name = "PATH", env = "ABILIST_HARVESTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Comma-separated versions to harvest, in order (defaults to 2.23 through 2.33)
    #[arg(long, value_name = "VERSIONS", value_delimiter = ',')]
    pub versions: Vec<String>,

    /// Tag prefix; versions are checked out as <PREFIX>-<VERSION>
    #[arg(long, value_name = "PREFIX")]
    pub tag_prefix: Option<String>,

    /// File name pattern to copy
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Suppress per-version confirmations
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute a harvest run
pub fn execute(args: HarvestArgs, output: &OutputConfig) -> Result<()> {
    let repo = resolve_repository(args.repository.as_deref())?;
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    let mut config = HarvestConfig::new(repo, defaults::default_output_root(&cwd));
    if let Some(path) = &args.config {
        let file = ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        config = config.merge_file(file, &cwd);
    }
    apply_overrides(&mut config, args.versions, args.tag_prefix, args.pattern, args.output, &cwd);
    config.validate()?;

    info!(
        "harvesting {} versions from {} into {}",
        config.versions.len(),
        config.repo_path.display(),
        config.output_root.display()
    );

    let quiet = args.quiet;
    let harvester = Harvester::new(config);
    let pattern = harvester.config().pattern.clone();
    harvester.run(|report| {
        if !quiet {
            println!("{}", confirmation(output, &pattern, &report.tag));
        }
    })?;

    Ok(())
}

/// Command-line values win over the config file and built-in defaults.
fn apply_overrides(
    config: &mut HarvestConfig,
    versions: Vec<String>,
    tag_prefix: Option<String>,
    pattern: Option<String>,
    output: Option<PathBuf>,
    cwd: &std::path::Path,
) {
    if !versions.is_empty() {
        config.versions = versions;
    }
    if let Some(prefix) = tag_prefix {
        config.tag_prefix = prefix;
    }
    if let Some(pattern) = pattern {
        config.pattern = pattern;
    }
    if let Some(output) = output {
        config.output_root = cwd.join(output);
    }
}
