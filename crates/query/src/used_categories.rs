//! Categories referenced by the catalog.

use std::collections::HashSet;

use catalog::{Category, Startup};
use common::CategoryId;

/// Returns the categories referenced by at least one startup.
///
/// The result keeps the order of `categories`. Ids that startups reference but
/// `categories` does not define are ignored.
pub fn used_categories<'c>(startups: &[Startup], categories: &'c [Category]) -> Vec<&'c Category> {
    let referenced: HashSet<&CategoryId> = startups
        .iter()
        .flat_map(|startup| startup.category_ids.iter())
        .collect();

    categories
        .iter()
        .filter(|category| referenced.contains(&category.id))
        .collect()
}
