use clap::Args;
use colored::*;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};
use tracing::debug;

use crate::cli::output::{badge_cell, format_count, metric_cell};
use crate::color::{red_yellow_green, viridis, Scale, ScaleKind};
use crate::model::{CongenericRecord, CongenericsPayload, CoordinateKey};
use crate::resolve::resolve;
use crate::store::DatasetStore;

#[derive(Args)]
pub struct CongenericsArgs {
    /// Taxon identifier
    #[arg(value_name = "TAXON_ID")]
    pub taxon_id: u32,

    /// Coordinate key in canonical "lon_lat" form
    #[arg(value_name = "COORDINATE")]
    pub coordinate: String,

    /// Raw ASV sequence (hashed exactly as given)
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,
}

pub fn run(args: CongenericsArgs, store: &DatasetStore) -> anyhow::Result<()> {
    let coordinate = CoordinateKey::from_raw(args.coordinate);
    let key = resolve(args.taxon_id, &coordinate, &args.sequence);
    debug!(%key, "resolved congenerics artifact key");

    match store.load_congenerics(&key)? {
        CongenericsPayload::Opaque(value) => {
            // arbitrary JSON passes through untouched
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        CongenericsPayload::Tabular(records) => {
            println!(
                "{} ({} candidates)",
                format!("Congenerics for {}", key).bold().cyan(),
                records.len()
            );
            print_table(&records);
        }
    }

    Ok(())
}

fn print_table(records: &[CongenericRecord]) {
    // Congenerics metrics are pre-normalized, so the fixed unit domain
    // applies: sequential for the densities, diverging for the score.
    let metric_scale = Scale::unit(viridis, ScaleKind::Sequential);
    let score_scale = Scale::unit(red_yellow_green, ScaleKind::Diverging { midpoint: None });

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Scientific Name",
            "Taxon ID",
            "Density",
            "Identity",
            "Suitability",
            "Score",
            "Pident",
            "RefDB",
            "Cells",
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.scientific_name),
            match record.taxon_id {
                Some(taxon_id) => Cell::new(format_count(u64::from(taxon_id))),
                None => Cell::new("unresolved").add_attribute(comfy_table::Attribute::Dim),
            },
            badge_cell(record.density, &metric_scale),
            badge_cell(record.identity, &metric_scale),
            badge_cell(record.suitability, &metric_scale),
            badge_cell(record.score, &score_scale),
            metric_cell(record.pident),
            Cell::new(if record.refdb { "yes" } else { "" }),
            match record.cells {
                Some(cells) => Cell::new(format_count(cells)),
                None => Cell::new(""),
            },
        ]);
    }
    println!("{table}");
}
