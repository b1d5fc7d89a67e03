pub mod congeneric;
pub mod coordinate;
pub mod taxon;

pub use congeneric::{CongenericRecord, CongenericsPayload};
pub use coordinate::CoordinateKey;
pub use taxon::{AsvIndex, ResultsDocument, TaxonRecord};
