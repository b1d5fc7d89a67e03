use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::CongenericRecord;
use crate::query::field::{FieldAccess, FieldKind, SortField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(format!("unknown sort direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: Direction,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }

    /// Click-to-sort transition: clicking the field currently sorted
    /// ascending flips it to descending; any other click resets to
    /// ascending on the clicked field.
    pub fn toggled(&self, field: SortField) -> SortSpec {
        if self.field == field && self.direction == Direction::Ascending {
            SortSpec::descending(field)
        } else {
            SortSpec::ascending(field)
        }
    }
}

/// Numeric coercion shared by sorting and color-domain computation:
/// missing or unparsable values count as zero, not last.
pub fn coerce_numeric(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Case-insensitive Unicode ordering with byte order as tiebreak.
fn lexical_cmp(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

fn compare<T: FieldAccess>(a: &T, b: &T, field: SortField) -> Ordering {
    match field.kind() {
        FieldKind::Numeric => {
            coerce_numeric(a.numeric(field)).total_cmp(&coerce_numeric(b.numeric(field)))
        }
        FieldKind::Textual => {
            lexical_cmp(a.textual(field).unwrap_or(""), b.textual(field).unwrap_or(""))
        }
    }
}

/// Stable in-place sort. Descending is the exact reversal of the
/// ascending comparator; equal keys keep their prior relative order in
/// both directions.
pub fn sort_by_spec<T: FieldAccess>(items: &mut [T], spec: SortSpec) {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, spec.field);
        match spec.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}

/// Congenerics tables always present highest score first, independent
/// of the top-level sort state.
pub fn sort_congenerics(records: &mut [CongenericRecord]) {
    sort_by_spec(records, SortSpec::descending(SortField::Score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn congeneric(name: &str, score: Option<f64>) -> CongenericRecord {
        CongenericRecord {
            scientific_name: name.to_string(),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn missing_scores_sort_as_zero() {
        let mut records = vec![
            congeneric("a", None),
            congeneric("b", Some(3.0)),
            congeneric("c", Some(1.0)),
            congeneric("d", Some(3.0)),
        ];
        sort_by_spec(&mut records, SortSpec::ascending(SortField::Score));
        let order: Vec<_> = records.iter().map(|r| r.scientific_name.as_str()).collect();
        // null coerces to 0; the two 3.0s keep their original order
        assert_eq!(order, vec!["a", "c", "b", "d"]);

        sort_by_spec(&mut records, SortSpec::descending(SortField::Score));
        let order: Vec<_> = records.iter().map(|r| r.scientific_name.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn textual_sort_is_case_insensitive() {
        let mut records = vec![
            congeneric("zoarces", None),
            congeneric("Abra", None),
            congeneric("mya", None),
        ];
        sort_by_spec(&mut records, SortSpec::ascending(SortField::ScientificName));
        let order: Vec<_> = records.iter().map(|r| r.scientific_name.as_str()).collect();
        assert_eq!(order, vec!["Abra", "mya", "zoarces"]);
    }

    #[test]
    fn toggle_follows_click_semantics() {
        let spec = SortSpec::ascending(SortField::Density);
        // same field, ascending -> descending
        assert_eq!(
            spec.toggled(SortField::Density),
            SortSpec::descending(SortField::Density)
        );
        // same field, descending -> back to ascending
        assert_eq!(
            SortSpec::descending(SortField::Density).toggled(SortField::Density),
            SortSpec::ascending(SortField::Density)
        );
        // different field -> ascending on the new field
        assert_eq!(
            SortSpec::descending(SortField::Density).toggled(SortField::Score),
            SortSpec::ascending(SortField::Score)
        );
    }

    #[test]
    fn congenerics_load_order_is_score_descending() {
        let mut records = vec![
            congeneric("low", Some(0.1)),
            congeneric("none", None),
            congeneric("high", Some(0.9)),
            congeneric("mid", Some(0.5)),
        ];
        sort_congenerics(&mut records);
        let order: Vec<_> = records.iter().map(|r| r.scientific_name.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low", "none"]);
    }

    #[test]
    fn coercion_handles_non_finite_values() {
        assert_eq!(coerce_numeric(None), 0.0);
        assert_eq!(coerce_numeric(Some(f64::NAN)), 0.0);
        assert_eq!(coerce_numeric(Some(f64::INFINITY)), 0.0);
        assert_eq!(coerce_numeric(Some(-2.5)), -2.5);
    }
}
