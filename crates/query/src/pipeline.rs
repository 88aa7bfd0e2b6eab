//! Query orchestration: search, category filter, sort, paginate.

use catalog::{Category, DatasetSource, Startup};

use crate::category_filter::filter_by_category;
use crate::filter_state::{FilterState, ResultKey};
use crate::paginate::{PageSize, paginate};
use crate::search::search_by_name;
use crate::sort::sort_by_founded_year;
use crate::used_categories::used_categories;
use crate::view::DirectoryView;

/// Runs directory queries against a static dataset.
///
/// The stages always run in the same order: name search, category filter,
/// founding-year sort, pagination. The used-category list is derived once
/// from the full dataset and does not depend on the filter state.
#[derive(Debug, Clone)]
pub struct QueryPipeline<'a> {
    startups: &'a [Startup],
    used_categories: Vec<&'a Category>,
    page_size: PageSize,
}

impl<'a> QueryPipeline<'a> {
    /// Creates a pipeline over a dataset source.
    pub fn new<D: DatasetSource + ?Sized>(source: &'a D, page_size: PageSize) -> Self {
        Self::from_parts(source.startups(), source.categories(), page_size)
    }

    /// Creates a pipeline over raw startup and category slices.
    pub fn from_parts(
        startups: &'a [Startup],
        categories: &'a [Category],
        page_size: PageSize,
    ) -> Self {
        Self {
            startups,
            used_categories: used_categories(startups, categories),
            page_size,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Categories referenced by at least one startup, in category-list order.
    pub fn used_categories(&self) -> &[&'a Category] {
        &self.used_categories
    }

    /// Applies search, category filter and sort, without paginating.
    pub fn filtered_and_sorted(&self, state: &FilterState) -> Vec<&'a Startup> {
        let matches = search_by_name(self.startups.iter().collect(), &state.search);
        let matches = filter_by_category(matches, &state.category);
        let matches = sort_by_founded_year(matches, state.sort);

        tracing::debug!(
            total = self.startups.len(),
            matched = matches.len(),
            "filtered and sorted startups"
        );

        matches
    }

    /// Computes the full view for `state`.
    #[tracing::instrument(
        level = "debug",
        skip(self, state),
        fields(
            search = %state.search,
            category = %state.category,
            sort = %state.sort,
            page = state.page
        )
    )]
    pub fn run(&self, state: &FilterState) -> DirectoryView<'a> {
        let matches = self.filtered_and_sorted(state);
        self.view_from(&matches, state.page)
    }

    /// Paginates an already filtered and sorted result set.
    fn view_from(&self, matches: &[&'a Startup], requested_page: i64) -> DirectoryView<'a> {
        metrics::counter!("directory_queries_total").increment(1);
        metrics::histogram!("directory_query_results").record(matches.len() as f64);

        let page = paginate(matches, self.page_size, requested_page);
        if page.number as i64 != requested_page {
            tracing::debug!(
                requested = requested_page,
                effective = page.number,
                "clamped page request"
            );
        }

        DirectoryView {
            startups: page.items.to_vec(),
            page: page.number,
            total_pages: page.total_pages,
            filtered_count: page.total_items,
            total_count: self.startups.len(),
            used_categories: self.used_categories.clone(),
        }
    }
}

/// A [`QueryPipeline`] that remembers the last filtered and sorted result.
///
/// When only the page changes between runs, the cached result set is
/// re-sliced instead of recomputed. Any change to search text, category or
/// sort order discards the cache. Views are identical to those of the plain
/// pipeline.
#[derive(Debug, Clone)]
pub struct CachedPipeline<'a> {
    pipeline: QueryPipeline<'a>,
    cache: Option<(ResultKey, Vec<&'a Startup>)>,
}

impl<'a> CachedPipeline<'a> {
    /// Wraps a pipeline with an empty cache.
    pub fn new(pipeline: QueryPipeline<'a>) -> Self {
        Self {
            pipeline,
            cache: None,
        }
    }

    /// Returns the wrapped pipeline.
    pub fn pipeline(&self) -> &QueryPipeline<'a> {
        &self.pipeline
    }

    /// Computes the view for `state`, reusing the cached result set when possible.
    #[tracing::instrument(
        level = "debug",
        skip(self, state),
        fields(
            search = %state.search,
            category = %state.category,
            sort = %state.sort,
            page = state.page
        )
    )]
    pub fn run(&mut self, state: &FilterState) -> DirectoryView<'a> {
        let key = state.result_key();

        let matches = match self.cache.take() {
            Some((cached_key, matches)) if cached_key == key => {
                metrics::counter!("directory_query_cache_hits_total").increment(1);
                tracing::trace!("reusing cached result set");
                matches
            }
            _ => self.pipeline.filtered_and_sorted(state),
        };

        let view = self.pipeline.view_from(&matches, state.page);
        self.cache = Some((key, matches));
        view
    }
}

impl<'a> From<QueryPipeline<'a>> for CachedPipeline<'a> {
    fn from(pipeline: QueryPipeline<'a>) -> Self {
        Self::new(pipeline)
    }
}
