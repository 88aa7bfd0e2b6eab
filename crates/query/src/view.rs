//! The derived view handed to the presentation layer.

use catalog::{Category, Startup};
use serde::Serialize;

/// One rendered page of the directory.
///
/// All fields come from the same pipeline run, so the page count always
/// describes the result set the page was cut from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView<'a> {
    /// Startups on the current page, in display order.
    pub startups: Vec<&'a Startup>,

    /// Effective 1-based page after clamping.
    pub page: usize,

    /// At least 1, even for an empty result.
    pub total_pages: usize,

    /// Number of startups that passed search and category filtering.
    pub filtered_count: usize,

    /// Number of startups in the whole catalog.
    pub total_count: usize,

    /// Categories referenced anywhere in the catalog, independent of filters.
    pub used_categories: Vec<&'a Category>,
}

impl DirectoryView<'_> {
    /// Returns true if nothing matched the filters.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// Names of the startups on this page.
    pub fn names(&self) -> Vec<&str> {
        self.startups.iter().map(|s| s.name.as_str()).collect()
    }
}
