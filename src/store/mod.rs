pub mod paths;

pub use paths::DatasetPaths;

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::model::{AsvIndex, CongenericsPayload, ResultsDocument};
use crate::query::sort_congenerics;
use crate::resolve::ArtifactKey;
use crate::{NereisError, Result};

/// Read-only access to one survey output tree.
///
/// The dataset selector parameterizes every path. An absent selector
/// is the unresolved dataset: top-level loads yield empty documents,
/// artifact loads fail locally. Every load is a fresh read; there is
/// no caching or retry.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    paths: Option<DatasetPaths>,
}

impl DatasetStore {
    pub fn new(root: impl Into<PathBuf>, dataset: Option<&str>) -> Self {
        let root = root.into();
        Self {
            paths: dataset.map(|dataset| DatasetPaths::new(&root, dataset)),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.paths.is_some()
    }

    pub fn paths(&self) -> Option<&DatasetPaths> {
        self.paths.as_ref()
    }

    /// Top-level results document. Failure here blocks the whole view.
    pub fn load_results(&self) -> Result<ResultsDocument> {
        let Some(paths) = &self.paths else {
            return Ok(ResultsDocument::default());
        };
        debug!(path = %paths.results_path.display(), "loading results document");
        let raw = fs::read_to_string(&paths.results_path).map_err(|e| {
            NereisError::Load(format!("failed to read {}: {}", paths.results_path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            NereisError::Load(format!("failed to parse {}: {}", paths.results_path.display(), e))
        })
    }

    /// Per-taxon ASV index. Failure here blocks the whole view.
    pub fn load_asvs(&self) -> Result<AsvIndex> {
        let Some(paths) = &self.paths else {
            return Ok(AsvIndex::default());
        };
        debug!(path = %paths.asvs_path.display(), "loading ASV index");
        let raw = fs::read_to_string(&paths.asvs_path).map_err(|e| {
            NereisError::Load(format!("failed to read {}: {}", paths.asvs_path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            NereisError::Load(format!("failed to parse {}: {}", paths.asvs_path.display(), e))
        })
    }

    /// Both top-level documents, or neither: one failing load fails
    /// the pair.
    pub fn load_dataset(&self) -> Result<(ResultsDocument, AsvIndex)> {
        Ok((self.load_results()?, self.load_asvs()?))
    }

    /// One congenerics artifact, addressed by its content-derived key.
    /// Failures are local to the artifact view and never disturb an
    /// already-loaded taxon table. Tabular payloads come back sorted
    /// score-descending.
    pub fn load_congenerics(&self, key: &ArtifactKey) -> Result<CongenericsPayload> {
        let Some(paths) = &self.paths else {
            return Err(NereisError::Artifact(
                "no dataset selected".to_string(),
            ));
        };
        let path = paths.congenerics_path(key);
        debug!(path = %path.display(), "loading congenerics artifact");
        let raw = fs::read_to_string(&path).map_err(|e| {
            NereisError::Artifact(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut payload: CongenericsPayload = serde_json::from_str(&raw).map_err(|e| {
            NereisError::Artifact(format!("failed to parse {}: {}", path.display(), e))
        })?;
        if let CongenericsPayload::Tabular(records) = &mut payload {
            sort_congenerics(records);
        }
        Ok(payload)
    }
}
