use clap::Args;
use colored::*;

use crate::store::DatasetStore;

#[derive(Args)]
pub struct AsvsArgs {
    /// Taxon identifier
    #[arg(value_name = "TAXON_ID")]
    pub taxon_id: u32,
}

pub fn run(args: AsvsArgs, store: &DatasetStore) -> anyhow::Result<()> {
    let (results, asvs) = store.load_dataset()?;

    let name = results
        .results
        .iter()
        .find(|record| record.taxon_id == args.taxon_id)
        .map(|record| record.scientific_name.clone())
        .unwrap_or_else(|| format!("taxon {}", args.taxon_id));

    let Some(groups) = asvs.for_taxon(args.taxon_id) else {
        println!("{}", format!("No ASVs found for {}", name).dimmed());
        return Ok(());
    };

    let total_sequences: usize = groups.values().map(Vec::len).sum();
    println!(
        "{} ({} coordinate pairs, {} total sequences)",
        format!("ASVs for {}", name).bold().cyan(),
        groups.len(),
        total_sequences
    );

    for (coordinate, sequences) in groups {
        println!("\n  {} ({} sequences)", coordinate.bold(), sequences.len());
        for (i, sequence) in sequences.iter().enumerate() {
            println!("    {}. {} ({} bp)", i + 1, sequence, sequence.len());
        }
    }

    Ok(())
}
