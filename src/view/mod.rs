/// Join of taxon results with their per-coordinate ASV sequence sets.
use crate::model::{AsvIndex, CoordinateKey, TaxonRecord};

/// Sequences recovered at one sampling coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteGroup<'a> {
    pub key: CoordinateKey,
    /// Parsed (longitude, latitude); `None` when the key is malformed.
    pub coordinates: Option<(f64, f64)>,
    pub sequences: &'a [String],
}

impl SiteGroup<'_> {
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }
}

/// One taxon enriched with its ASV groups.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTaxon<'a> {
    pub record: &'a TaxonRecord,
    /// `None` when the taxon has no entry in the ASV index at all;
    /// `Some` (possibly empty) when an entry exists. Both display as
    /// "no sequences" but must not be conflated.
    pub sites: Option<Vec<SiteGroup<'a>>>,
    pub total_sequences: usize,
}

impl EnrichedTaxon<'_> {
    pub fn site_count(&self) -> usize {
        self.sites.as_ref().map_or(0, |sites| sites.len())
    }

    pub fn has_sequences(&self) -> bool {
        self.total_sequences > 0
    }
}

/// Join each taxon record with its coordinate groups.
///
/// Site order is the insertion order of the source index; sequence
/// lists are borrowed, never copied. O(taxa + total sequences).
pub fn build_view<'a>(records: &'a [TaxonRecord], asvs: &'a AsvIndex) -> Vec<EnrichedTaxon<'a>> {
    records
        .iter()
        .map(|record| {
            let sites = asvs.for_taxon(record.taxon_id).map(|groups| {
                groups
                    .iter()
                    .map(|(raw_key, sequences)| {
                        let key = CoordinateKey::from_raw(raw_key.clone());
                        let coordinates = key.decode().ok();
                        SiteGroup {
                            key,
                            coordinates,
                            sequences: sequences.as_slice(),
                        }
                    })
                    .collect::<Vec<_>>()
            });
            let total_sequences = sites.as_ref().map_or(0, |sites| {
                sites.iter().map(SiteGroup::sequence_count).sum()
            });
            EnrichedTaxon {
                record,
                sites,
                total_sequences,
            }
        })
        .collect()
}
