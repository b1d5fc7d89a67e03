use crate::query::field::{FieldAccess, SortField};

/// Whether the free-text predicate is applied at all. The observed
/// behavior differs across deployments, so both are configuration
/// choices rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring match against the scientific name.
    #[default]
    ScientificName,
    /// Predicate passes every record through unchanged.
    Disabled,
}

/// Free-text filter over sortable rows.
#[derive(Debug, Clone, Default)]
pub struct Search {
    folded_term: String,
    mode: SearchMode,
}

impl Search {
    pub fn new(term: &str, mode: SearchMode) -> Self {
        Self {
            folded_term: term.to_lowercase(),
            mode,
        }
    }

    /// An empty or absent term matches every record.
    pub fn matches<T: FieldAccess>(&self, item: &T) -> bool {
        match self.mode {
            SearchMode::Disabled => true,
            SearchMode::ScientificName => {
                if self.folded_term.is_empty() {
                    return true;
                }
                item.textual(SortField::ScientificName)
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&self.folded_term)
            }
        }
    }
}
