//! Fixed-size pagination with page clamping.

use std::num::NonZeroUsize;

use crate::{QueryError, Result};

/// Number of startups shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Number of entries per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Creates a page size, rejecting zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(QueryError::ZeroPageSize)
    }

    /// Returns the page size as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = QueryError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of pages needed for `count` entries.
///
/// An empty result still has one (empty) page, so a view always reads
/// "page 1 of 1" rather than "page 1 of 0".
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Clamps a requested page number into `1..=total_pages`.
///
/// Zero and negative requests go to the first page, requests past the end
/// go to the last.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(last, |page| page.min(last))
}

/// Returns the entries of 1-based `page` without clamping.
///
/// A page that starts at or past the end is empty.
pub fn page_slice<T>(items: &[T], page_size: PageSize, page: usize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'s, T> {
    /// Entries on this page, in sequence order.
    pub items: &'s [T],

    /// The effective 1-based page number after clamping.
    pub number: usize,

    pub total_pages: usize,

    /// Length of the whole sequence.
    pub total_items: usize,
}

/// Slices `items` into the requested page.
///
/// Out-of-range requests are clamped, never rejected.
pub fn paginate<T>(items: &[T], page_size: PageSize, requested: i64) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let number = clamp_page(requested, total_pages);

    Page {
        items: page_slice(items, page_size, number),
        number,
        total_pages,
        total_items: items.len(),
    }
}
