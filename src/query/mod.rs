pub mod field;
pub mod search;
pub mod sort;

pub use field::{FieldAccess, FieldKind, SortField};
pub use search::{Search, SearchMode};
pub use sort::{coerce_numeric, sort_by_spec, sort_congenerics, Direction, SortSpec};
