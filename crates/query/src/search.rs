//! Case-insensitive name search.

use catalog::Startup;

/// A normalized search query.
///
/// The raw text is trimmed and lowercased once; a blank query matches
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalizes raw user input.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Returns true if the query applies no filtering.
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns the normalized text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Checks a startup's name against the query (pure predicate).
    pub fn matches(&self, startup: &Startup) -> bool {
        self.is_blank() || startup.name.to_lowercase().contains(&self.needle)
    }
}

/// Keeps the startups whose name contains `query`, ignoring case.
///
/// Only the name is searched. Matches keep their input order; a blank query
/// returns the input unchanged.
pub fn search_by_name<'a>(mut startups: Vec<&'a Startup>, query: &str) -> Vec<&'a Startup> {
    let query = SearchQuery::new(query);
    if query.is_blank() {
        return startups;
    }

    startups.retain(|startup| query.matches(startup));
    startups
}
