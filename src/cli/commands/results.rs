use clap::Args;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::cli::output::{badge_cell, format_count, format_number};
use crate::color::{red_yellow_green, viridis, Scale, ScaleKind};
use crate::config::Config;
use crate::query::{sort_by_spec, Search, SortSpec};
use crate::store::DatasetStore;
use crate::view::{build_view, EnrichedTaxon};

#[derive(Args)]
pub struct ResultsArgs {
    /// Sort field (scientificName, taxonID, decimalLongitude,
    /// decimalLatitude, density, suitability, score, cells)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub direction: Option<String>,

    /// Filter rows by scientific-name substring
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Expand per-taxon ASV groups under the table
    #[arg(long)]
    pub expand: bool,
}

pub fn run(args: ResultsArgs, store: &DatasetStore, config: &Config) -> anyhow::Result<()> {
    let (results, asvs) = store.load_dataset()?;

    let default_spec = config.sort_spec()?;
    let spec = SortSpec {
        field: match &args.sort {
            Some(raw) => raw.parse().map_err(anyhow::Error::msg)?,
            None => default_spec.field,
        },
        direction: match &args.direction {
            Some(raw) => raw.parse().map_err(anyhow::Error::msg)?,
            None => default_spec.direction,
        },
    };

    // dynamic domain policy for top-level fields: extrema over the
    // currently loaded dataset, recomputed per load
    let density_scale = Scale::dynamic(
        results.results.iter().map(|r| Some(r.density)),
        viridis,
        ScaleKind::Sequential,
    );
    let suitability_scale = Scale::dynamic(
        results.results.iter().map(|r| Some(r.suitability)),
        viridis,
        ScaleKind::Sequential,
    );
    let score_scale = Scale::dynamic(
        results.results.iter().map(|r| Some(r.score)),
        red_yellow_green,
        ScaleKind::Diverging { midpoint: None },
    );

    let total = results.results.len();
    let mut view = build_view(&results.results, &asvs);
    sort_by_spec(&mut view, spec);

    let search = Search::new(args.search.as_deref().unwrap_or(""), config.search_mode()?);
    view.retain(|taxon| search.matches(taxon));

    if !results.title.is_empty() {
        println!("\n{}", results.title.bold().cyan());
    }
    println!(
        "Showing {} of {} records (sorted by {} {})",
        view.len(),
        total,
        spec.field.as_str(),
        spec.direction.as_str()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Scientific Name",
            "Taxon ID",
            "Longitude",
            "Latitude",
            "Density",
            "Suitability",
            "Score",
            "Cells",
        ]);

    for taxon in &view {
        let record = taxon.record;
        table.add_row(vec![
            Cell::new(&record.scientific_name),
            Cell::new(format_count(u64::from(record.taxon_id))),
            Cell::new(format_number(record.decimal_longitude)),
            Cell::new(format_number(record.decimal_latitude)),
            badge_cell(Some(record.density), &density_scale),
            badge_cell(Some(record.suitability), &suitability_scale),
            badge_cell(Some(record.score), &score_scale),
            Cell::new(format_count(record.cells)),
        ]);
    }
    println!("{table}");

    if args.expand {
        for taxon in &view {
            print_expansion(taxon);
        }
    }

    Ok(())
}

fn print_expansion(taxon: &EnrichedTaxon<'_>) {
    let name = &taxon.record.scientific_name;
    match taxon.sites.as_deref() {
        None | Some([]) => {
            println!("\n{}", format!("No ASVs found for {}", name).dimmed());
        }
        Some(sites) => {
            println!(
                "\n{} ({} coordinate pairs, {} total sequences)",
                format!("ASVs for {}", name).bold(),
                sites.len(),
                taxon.total_sequences
            );
            for site in sites {
                let location = match site.coordinates {
                    Some((longitude, latitude)) => format!("{:.5}, {:.5}", longitude, latitude),
                    None => site.key.as_str().to_string(),
                };
                println!(
                    "  {} ({} sequences)",
                    location.bold(),
                    site.sequence_count()
                );
                for (i, sequence) in site.sequences.iter().enumerate() {
                    println!("    {}. {} ({} bp)", i + 1, sequence, sequence.len());
                }
            }
        }
    }
}
