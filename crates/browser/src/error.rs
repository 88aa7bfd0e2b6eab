//! Browser error types.

use catalog::CatalogError;
use common::ParseSortOrderError;
use thiserror::Error;

/// Errors that stop the browser.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in a single input line. These are reported and the session goes on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs an argument: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid page number '{0}'")]
    InvalidPage(String),

    #[error(transparent)]
    InvalidSort(#[from] ParseSortOrderError),
}

/// Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
