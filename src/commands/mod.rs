//! # CLI Command Implementations
//!
//! The tool has a single operation, so there is one command module. It holds
//! the `clap` argument struct and an `execute` function that turns those
//! arguments into a `HarvestConfig` and runs the library's `Harvester`.

pub mod harvest;
