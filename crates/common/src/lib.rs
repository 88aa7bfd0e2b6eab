//! Shared value types for the startup directory.

pub mod types;

pub use types::{ALL_CATEGORIES, CategoryId, CategorySelection, ParseSortOrderError, SortOrder};
