use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::config::DEFAULT_CONFIG_PATH;
use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Live progress and problem report for city-data validation runs",
    long_about = None
)]
pub struct Options {
    /// RON config file; missing file means defaults
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
    /// Only print the final state
    #[arg(long)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay a recorded JSON-lines message script through the monitor
    Run {
        #[arg(long)]
        script: PathBuf,
        /// Target handed to the task runner
        #[arg(long, default_value = "replay")]
        url: String,
        /// Pause between frames, overrides the config
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Load the endpoint catalog and print the selection list
    Endpoints {
        /// Catalog location, overrides the config
        #[arg(long)]
        url: Option<String>,
    },
}
