//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use query::PageSize;

/// Browser configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DIRECTORY_STARTUPS_PATH`: startups JSON file (default: `"data/startups.json"`)
/// - `DIRECTORY_CATEGORIES_PATH`: categories JSON file (default: `"data/categories.json"`)
/// - `DIRECTORY_PAGE_SIZE`: startups per page (default: `9`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub startups_path: PathBuf,
    pub categories_path: PathBuf,
    pub page_size: PageSize,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    ///
    /// A page size that is not a positive integer is ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            startups_path: lookup("DIRECTORY_STARTUPS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.startups_path),
            categories_path: lookup("DIRECTORY_CATEGORIES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.categories_path),
            page_size: lookup("DIRECTORY_PAGE_SIZE")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .and_then(|n| PageSize::new(n).ok())
                .unwrap_or(defaults.page_size),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            startups_path: PathBuf::from("data/startups.json"),
            categories_path: PathBuf::from("data/categories.json"),
            page_size: PageSize::default(),
            log_level: "info".to_string(),
        }
    }
}
