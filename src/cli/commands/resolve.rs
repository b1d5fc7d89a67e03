use clap::Args;

use crate::model::CoordinateKey;
use crate::resolve::resolve;

#[derive(Args)]
pub struct ResolveArgs {
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

pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    let coordinate = CoordinateKey::from_raw(args.coordinate);
    let key = resolve(args.taxon_id, &coordinate, &args.sequence);
    println!("{}", key);
    Ok(())
}
