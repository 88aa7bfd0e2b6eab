//! Query error types.

use thiserror::Error;

/// Errors that can occur when configuring the query pipeline.
///
/// Running a query never fails; only invalid configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A page must hold at least one entry.
    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
