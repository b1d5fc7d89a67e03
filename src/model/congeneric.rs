use serde::{Deserialize, Serialize};

/// One candidate taxon from a congenerics analysis.
///
/// Metric fields are optional on the wire; an absent value renders as
/// empty, never as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongenericRecord {
    #[serde(default)]
    pub scientific_name: String,
    /// Absent when the candidate could not be resolved to a taxon.
    #[serde(rename = "taxonID", default, skip_serializing_if = "Option::is_none")]
    pub taxon_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Raw percent identity as reported by the sequence matcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pident: Option<f64>,
    /// Candidate is present in the reference database.
    #[serde(default)]
    pub refdb: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<u64>,
}

/// A congenerics artifact is usually a table of candidate records, but
/// the pipeline may emit arbitrary JSON. The shape is decided once at
/// parse time and never re-checked downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CongenericsPayload {
    Tabular(Vec<CongenericRecord>),
    Opaque(serde_json::Value),
}

impl CongenericsPayload {
    pub fn is_tabular(&self) -> bool {
        matches!(self, CongenericsPayload::Tabular(_))
    }
}
