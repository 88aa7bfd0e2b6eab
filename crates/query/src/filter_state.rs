//! Filter state and its transitions.

use common::{CategorySelection, SortOrder};
use serde::{Deserialize, Serialize};

use crate::search::SearchQuery;

/// Everything that parameterizes a directory query.
///
/// The state is a plain value: the presentation layer owns it, replaces it
/// through [`FilterState::apply`], and hands it to the pipeline on every run.
///
/// Transitions:
/// ```text
/// Search / Category / Sort ──► field updated, page = 1
/// Page(n)                  ──► page = n (clamped later by the pipeline)
/// ClearFilters             ──► search = "", category = all, page = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Raw search text as typed by the user.
    pub search: String,

    pub category: CategorySelection,

    pub sort: SortOrder,

    /// Requested 1-based page. May be stale or out of range.
    pub page: i64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategorySelection::All,
            sort: SortOrder::Descending,
            page: 1,
        }
    }
}

impl FilterState {
    /// Creates the initial state: no search, all categories, newest first, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Sets the category selection.
    pub fn category(mut self, selection: impl Into<CategorySelection>) -> Self {
        self.category = selection.into();
        self
    }

    /// Sets the sort order.
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    /// Sets the requested page.
    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Applies a change, resetting the page where the change requires it.
    pub fn apply(self, change: FilterChange) -> Self {
        let resets_page = change.resets_page();
        let next = match change {
            FilterChange::Search(text) => self.search(text),
            FilterChange::Category(selection) => self.category(selection),
            FilterChange::Sort(order) => self.sort(order),
            FilterChange::Page(page) => self.page(page),
            FilterChange::ClearFilters => Self {
                sort: self.sort,
                ..Self::default()
            },
        };

        if resets_page { next.page(1) } else { next }
    }

    /// Returns true if search or category filtering is active.
    pub fn has_filters(&self) -> bool {
        !SearchQuery::new(&self.search).is_blank() || !self.category.is_all()
    }

    /// The part of the state that determines the result set (everything but the page).
    pub fn result_key(&self) -> ResultKey {
        ResultKey {
            search: SearchQuery::new(&self.search),
            category: self.category.clone(),
            sort: self.sort,
        }
    }
}

/// Identifies a filtered and sorted result set.
///
/// Search text is compared in normalized form, so `"Acme "` and `"acme"`
/// produce the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultKey {
    pub search: SearchQuery,
    pub category: CategorySelection,
    pub sort: SortOrder,
}

/// A state-change request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Search(String),
    Category(CategorySelection),
    Sort(SortOrder),
    Page(i64),
    /// Drops search and category filters, keeping the sort order.
    ClearFilters,
}

impl FilterChange {
    /// Returns true if applying this change moves the view back to page 1.
    pub fn resets_page(&self) -> bool {
        !matches!(self, FilterChange::Page(_))
    }
}
