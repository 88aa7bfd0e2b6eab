//! Query pipeline for the startup directory.
//!
//! Turns the static catalog plus a [`FilterState`] into a [`DirectoryView`]:
//! - [`search`]: case-insensitive name search
//! - [`category_filter`]: single-category filter with an "all" sentinel
//! - [`sort`]: stable founding-year sort
//! - [`paginate`]: fixed-size pages with clamping
//! - [`used_categories`]: categories referenced by the catalog
//! - [`QueryPipeline`] and [`CachedPipeline`] to run the stages in order

pub mod category_filter;
pub mod error;
pub mod filter_state;
pub mod paginate;
pub mod pipeline;
pub mod search;
pub mod sort;
pub mod used_categories;
pub mod view;

pub use error::{QueryError, Result};
pub use filter_state::{FilterChange, FilterState, ResultKey};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, PageSize};
pub use pipeline::{CachedPipeline, QueryPipeline};
pub use search::SearchQuery;
pub use view::DirectoryView;
