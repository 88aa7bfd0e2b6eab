//! Single-category filter.

use catalog::Startup;
use common::CategorySelection;

/// Check if a startup matches the category selection (pure predicate).
pub fn matches_category(startup: &Startup, selection: &CategorySelection) -> bool {
    match selection.category_id() {
        Some(id) => startup.in_category(id),
        None => true,
    }
}

/// Keeps the startups that belong to the selected category.
///
/// `All` returns the input unchanged. An id no startup carries yields an
/// empty result.
pub fn filter_by_category<'a>(
    mut startups: Vec<&'a Startup>,
    selection: &CategorySelection,
) -> Vec<&'a Startup> {
    if selection.is_all() {
        return startups;
    }

    startups.retain(|startup| matches_category(startup, selection));
    startups
}
