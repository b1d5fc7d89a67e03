use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One taxon's occurrence and suitability metrics within a result set.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonRecord {
    #[serde(rename = "taxonID")]
    pub taxon_id: u32,
    pub scientific_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phylum: Option<String>,
    #[serde(default)]
    pub decimal_longitude: f64,
    #[serde(default)]
    pub decimal_latitude: f64,
    #[serde(default)]
    pub density: f64,
    #[serde(default)]
    pub suitability: f64,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub cells: u64,
}

/// Top-level results document as produced by the survey pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub results: Vec<TaxonRecord>,
}

/// ASV sequences grouped by taxon and sampling coordinate.
///
/// Taxon keys are stringified identifiers on the wire. Both map levels
/// keep the source document's insertion order; that order drives the
/// display order of coordinate groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AsvIndex(pub IndexMap<String, IndexMap<String, Vec<String>>>);

impl AsvIndex {
    /// Coordinate groups for one taxon. `None` means the taxon has no
    /// entry at all, distinct from an entry with no groups.
    pub fn for_taxon(&self, taxon_id: u32) -> Option<&IndexMap<String, Vec<String>>> {
        self.0.get(&taxon_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
