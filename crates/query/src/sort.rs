//! Founding-year sort.

use catalog::Startup;
use common::SortOrder;

/// Orders startups by founding year.
///
/// The sort is stable in both directions: startups founded in the same year
/// keep their input order. Descending puts the most recently founded first.
pub fn sort_by_founded_year<'a>(
    mut startups: Vec<&'a Startup>,
    order: SortOrder,
) -> Vec<&'a Startup> {
    match order {
        SortOrder::Ascending => startups.sort_by_key(|s| s.founded_year),
        SortOrder::Descending => startups.sort_by(|a, b| b.founded_year.cmp(&a.founded_year)),
    }
    startups
}
