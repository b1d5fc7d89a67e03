use std::str::FromStr;

use crate::model::{CongenericRecord, TaxonRecord};
use crate::view::EnrichedTaxon;

/// Declared comparison class of a sortable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Textual,
}

/// Named attributes the sort/filter engine understands, across both
/// taxon rows and congeneric rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    ScientificName,
    Phylum,
    TaxonId,
    DecimalLongitude,
    DecimalLatitude,
    Density,
    Suitability,
    Score,
    Cells,
    Identity,
    Pident,
}

impl SortField {
    pub fn kind(&self) -> FieldKind {
        match self {
            SortField::ScientificName | SortField::Phylum => FieldKind::Textual,
            _ => FieldKind::Numeric,
        }
    }

    /// Wire-format field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::ScientificName => "scientificName",
            SortField::Phylum => "phylum",
            SortField::TaxonId => "taxonID",
            SortField::DecimalLongitude => "decimalLongitude",
            SortField::DecimalLatitude => "decimalLatitude",
            SortField::Density => "density",
            SortField::Suitability => "suitability",
            SortField::Score => "score",
            SortField::Cells => "cells",
            SortField::Identity => "identity",
            SortField::Pident => "pident",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scientificname" => Ok(SortField::ScientificName),
            "phylum" => Ok(SortField::Phylum),
            "taxonid" => Ok(SortField::TaxonId),
            "decimallongitude" => Ok(SortField::DecimalLongitude),
            "decimallatitude" => Ok(SortField::DecimalLatitude),
            "density" => Ok(SortField::Density),
            "suitability" => Ok(SortField::Suitability),
            "score" => Ok(SortField::Score),
            "cells" => Ok(SortField::Cells),
            "identity" => Ok(SortField::Identity),
            "pident" => Ok(SortField::Pident),
            _ => Err(format!("unknown sort field: {}", s)),
        }
    }
}

/// Field access contract shared by every sortable row shape.
pub trait FieldAccess {
    fn numeric(&self, field: SortField) -> Option<f64>;
    fn textual(&self, field: SortField) -> Option<&str>;
}

impl FieldAccess for TaxonRecord {
    fn numeric(&self, field: SortField) -> Option<f64> {
        match field {
            SortField::TaxonId => Some(f64::from(self.taxon_id)),
            SortField::DecimalLongitude => Some(self.decimal_longitude),
            SortField::DecimalLatitude => Some(self.decimal_latitude),
            SortField::Density => Some(self.density),
            SortField::Suitability => Some(self.suitability),
            SortField::Score => Some(self.score),
            SortField::Cells => Some(self.cells as f64),
            _ => None,
        }
    }

    fn textual(&self, field: SortField) -> Option<&str> {
        match field {
            SortField::ScientificName => Some(&self.scientific_name),
            SortField::Phylum => self.phylum.as_deref(),
            _ => None,
        }
    }
}

impl FieldAccess for EnrichedTaxon<'_> {
    fn numeric(&self, field: SortField) -> Option<f64> {
        self.record.numeric(field)
    }

    fn textual(&self, field: SortField) -> Option<&str> {
        self.record.textual(field)
    }
}

impl FieldAccess for CongenericRecord {
    fn numeric(&self, field: SortField) -> Option<f64> {
        match field {
            SortField::TaxonId => self.taxon_id.map(f64::from),
            SortField::Density => self.density,
            SortField::Identity => self.identity,
            SortField::Suitability => self.suitability,
            SortField::Score => self.score,
            SortField::Pident => self.pident,
            SortField::Cells => self.cells.map(|c| c as f64),
            _ => None,
        }
    }

    fn textual(&self, field: SortField) -> Option<&str> {
        match field {
            SortField::ScientificName => Some(&self.scientific_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names_case_insensitively() {
        assert_eq!("scientificName".parse::<SortField>().unwrap(), SortField::ScientificName);
        assert_eq!("DENSITY".parse::<SortField>().unwrap(), SortField::Density);
        assert_eq!("taxonID".parse::<SortField>().unwrap(), SortField::TaxonId);
        assert!("ranking".parse::<SortField>().is_err());
    }

    #[test]
    fn kinds_match_declarations() {
        assert_eq!(SortField::ScientificName.kind(), FieldKind::Textual);
        assert_eq!(SortField::Phylum.kind(), FieldKind::Textual);
        for field in [
            SortField::Score,
            SortField::Density,
            SortField::Suitability,
            SortField::Cells,
            SortField::Identity,
            SortField::Pident,
        ] {
            assert_eq!(field.kind(), FieldKind::Numeric);
        }
    }

    #[test]
    fn congeneric_rows_expose_missing_metrics_as_none() {
        let record = CongenericRecord {
            scientific_name: "Foo baz".to_string(),
            ..Default::default()
        };
        assert_eq!(record.numeric(SortField::Score), None);
        assert_eq!(record.numeric(SortField::Pident), None);
        assert_eq!(record.textual(SortField::ScientificName), Some("Foo baz"));
    }
}
