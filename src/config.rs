use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::query::{Direction, SearchMode, SortField, SortSpec};
use crate::{NereisError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Root directory containing per-dataset output trees
    pub root_dir: String,
    /// Default dataset selector; commands may override it
    pub dataset: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default sort field for the results table
    pub sort_field: String,
    /// Default sort direction ("asc" or "desc")
    pub sort_direction: String,
    /// Free-text search mode: "name" matches scientific names,
    /// "off" disables the predicate entirely
    pub search: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                root_dir: "output".to_string(),
                dataset: None,
            },
            display: DisplayConfig {
                sort_field: "density".to_string(),
                sort_direction: "asc".to_string(),
                search: "name".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NereisError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| NereisError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NereisError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn sort_spec(&self) -> Result<SortSpec> {
        let field: SortField = self
            .display
            .sort_field
            .parse()
            .map_err(NereisError::Config)?;
        let direction: Direction = self
            .display
            .sort_direction
            .parse()
            .map_err(NereisError::Config)?;
        Ok(SortSpec { field, direction })
    }

    pub fn search_mode(&self) -> Result<SearchMode> {
        match self.display.search.to_lowercase().as_str() {
            "name" => Ok(SearchMode::ScientificName),
            "off" => Ok(SearchMode::Disabled),
            other => Err(NereisError::Config(format!("unknown search mode: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Direction, SortField};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_display_contract() {
        let config = Config::default();
        let spec = config.sort_spec().unwrap();
        assert_eq!(spec.field, SortField::Density);
        assert_eq!(spec.direction, Direction::Ascending);
        assert_eq!(config.search_mode().unwrap(), SearchMode::ScientificName);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nereis.toml");

        let mut config = Config::default();
        config.data.dataset = Some("scandola".to_string());
        config.display.search = "off".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.data.dataset.as_deref(), Some("scandola"));
        assert_eq!(loaded.search_mode().unwrap(), SearchMode::Disabled);
    }

    #[test]
    fn bad_values_surface_as_config_errors() {
        let mut config = Config::default();
        config.display.sort_field = "ranking".to_string();
        assert!(matches!(config.sort_spec(), Err(NereisError::Config(_))));

        config.display.sort_field = "score".to_string();
        config.display.search = "fuzzy".to_string();
        assert!(matches!(config.search_mode(), Err(NereisError::Config(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.data.root_dir, "output");
    }
}
