//! Catalog error types.

use std::path::PathBuf;

use common::CategoryId;
use thiserror::Error;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A dataset file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset document is not valid JSON or does not match the expected shape.
    #[error("Invalid {document} document: {source}")]
    Deserialization {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two startups share the same name.
    #[error("Duplicate startup name: {0}")]
    DuplicateStartup(String),

    /// Two categories share the same id.
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(CategoryId),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
