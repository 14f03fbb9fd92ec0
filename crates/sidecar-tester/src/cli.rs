//! Command-line interface definitions for sidecar-tester.

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `sidecar-tester` binary.
#[derive(Parser, Debug)]
#[command(
    name = "sidecar-tester",
    about = "Headless diagnostics for overlay placement and scheduling",
    version
)]
pub struct Cli {
    /// Logging controls shared across sidecar binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Which diagnostic to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level tester commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the overlay placement for a recorded scenario.
    Place(PlaceArgs),
    /// Fire a burst of location requests and report what was applied.
    Burst(BurstArgs),
}

/// Arguments for the `place` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlaceArgs {
    /// Scenario file (RON) describing the desktop state.
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Optional path to a sidecar configuration file (RON).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `burst` subcommand.
#[derive(Args, Debug, Clone)]
pub struct BurstArgs {
    /// Scenario file (RON) describing the desktop state.
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Optional path to a sidecar configuration file (RON).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of location requests to send.
    #[arg(long, default_value_t = 10)]
    pub count: u32,

    /// Delay between consecutive requests.
    #[arg(
        long,
        value_parser = humantime::parse_duration,
        default_value = "5ms",
        value_name = "DURATION"
    )]
    pub spacing: Duration,

    /// Mark every request as immediate.
    #[arg(long)]
    pub immediate: bool,

    /// Time to wait after the last request before reporting.
    #[arg(
        long,
        value_parser = humantime::parse_duration,
        default_value = "500ms",
        value_name = "DURATION"
    )]
    pub settle: Duration,
}
