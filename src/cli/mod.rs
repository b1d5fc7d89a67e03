pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nereis",
    version,
    about = "Data-join and resolution engine for eDNA survey results",
    long_about = "Nereis joins per-taxon eDNA survey metrics with the ASV sequences \
                  recovered at each sampled coordinate, and resolves individual \
                  sequences to their congenerics analyses through content-derived keys."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root directory containing per-dataset survey outputs
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Dataset selector (e.g. "scandola")
    #[arg(short = 'D', long, global = true)]
    pub dataset: Option<String>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show joined survey results as a table
    Results(commands::results::ResultsArgs),

    /// List ASV sequences recovered for one taxon
    Asvs(commands::asvs::AsvsArgs),

    /// Compute the congenerics artifact key for a sequence
    Resolve(commands::resolve::ResolveArgs),

    /// Load and display the congenerics analysis for a sequence
    Congenerics(commands::congenerics::CongenericsArgs),
}
