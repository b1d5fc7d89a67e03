/// Content-derived artifact keys for congenerics lookups.
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::model::CoordinateKey;
use crate::{NereisError, Result};

/// Lowercase hex SHA-256 digest of a raw ASV sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceDigest(String);

impl SequenceDigest {
    /// Hash the sequence exactly as given. Case and whitespace are
    /// significant; the empty sequence hashes to the digest of empty
    /// input.
    pub fn compute(sequence: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(sequence.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Byte-slice entry point. Rejects input that is not a valid
    /// UTF-8 sequence string.
    pub fn compute_bytes(sequence: &[u8]) -> Result<Self> {
        let sequence = std::str::from_utf8(sequence)
            .map_err(|_| NereisError::InvalidInput("sequence is not valid UTF-8".to_string()))?;
        Ok(Self::compute(sequence))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SequenceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Filename addressing one congenerics artifact in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactKey(String);

impl ArtifactKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the artifact key for one (taxon, coordinate, sequence) triple.
///
/// Pure: identical inputs always produce the identical key. Performs
/// no I/O; the key is the external interface to the artifact store.
pub fn resolve(taxon_id: u32, coordinate: &CoordinateKey, sequence: &str) -> ArtifactKey {
    let digest = SequenceDigest::compute(sequence);
    ArtifactKey(format!("{}_{}_{}.json", taxon_id, coordinate.as_str(), digest.as_hex()))
}

/// As [`resolve`], from raw sequence bytes.
pub fn resolve_bytes(taxon_id: u32, coordinate: &CoordinateKey, sequence: &[u8]) -> Result<ArtifactKey> {
    let digest = SequenceDigest::compute_bytes(sequence)?;
    Ok(ArtifactKey(format!(
        "{}_{}_{}.json",
        taxon_id,
        coordinate.as_str(),
        digest.as_hex()
    )))
}
