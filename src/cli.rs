use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chronos synthetic series and sample autocorrelation toolkit.
#[derive(Parser)]
#[command(
    name = "chronos",
    version,
    about = "Synthetic time-series generation and sample autocorrelation analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a synthetic series and write it one value per line.
    Simulate(SimulateArgs),
    /// Estimate the autocovariance and autocorrelation of a series file.
    Acf(AcfArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "chronos.toml")]
    pub config: PathBuf,

    /// Override output path from config (stdout if neither is set).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `acf` subcommand.
#[derive(clap::Args)]
pub struct AcfArgs {
    /// Path to input series file, one value per line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Largest lag to evaluate (clamped to the series length minus one).
    #[arg(long, default_value_t = 20)]
    pub max_lag: usize,

    /// Path for the JSON report (stdout if unset).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
