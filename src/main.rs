use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process;

use nereis::cli::{commands, Cli, Commands};
use nereis::config::Config;
use nereis::store::DatasetStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging with NEREIS_LOG environment variable support;
    // repeated -v flags raise the default level
    let log_level = match cli.verbose {
        0 => std::env::var("NEREIS_LOG").unwrap_or_else(|_| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<nereis::NereisError>() {
            Some(nereis::NereisError::Config(_)) => 2,
            Some(nereis::NereisError::Io(_)) => 3,
            Some(nereis::NereisError::Parse(_)) | Some(nereis::NereisError::InvalidInput(_)) => 4,
            Some(nereis::NereisError::Load(_)) => 5,
            Some(nereis::NereisError::Artifact(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&PathBuf::from("nereis.toml"))?,
    };

    let root = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.root_dir));
    let dataset = cli.dataset.clone().or_else(|| config.data.dataset.clone());
    let store = DatasetStore::new(root, dataset.as_deref());

    match cli.command {
        Commands::Results(args) => commands::results::run(args, &store, &config),
        Commands::Asvs(args) => commands::asvs::run(args, &store),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Congenerics(args) => commands::congenerics::run(args, &store),
    }
}
