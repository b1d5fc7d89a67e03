use std::path::{Path, PathBuf};

use crate::resolve::ArtifactKey;

/// Filesystem layout of one dataset inside a survey output tree:
///
/// ```text
/// {root}/{dataset}/results.json
/// {root}/{dataset}/asvs.json
/// {root}/{dataset}/congenerics/{taxonID}_{coordinateKey}_{digest}.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub dataset_dir: PathBuf,
    pub results_path: PathBuf,
    pub asvs_path: PathBuf,
    pub congenerics_dir: PathBuf,
}

impl DatasetPaths {
    pub fn new(root: &Path, dataset: &str) -> Self {
        let dataset_dir = root.join(dataset);
        Self {
            results_path: dataset_dir.join("results.json"),
            asvs_path: dataset_dir.join("asvs.json"),
            congenerics_dir: dataset_dir.join("congenerics"),
            dataset_dir,
        }
    }

    pub fn congenerics_path(&self, key: &ArtifactKey) -> PathBuf {
        self.congenerics_dir.join(key.as_str())
    }
}
