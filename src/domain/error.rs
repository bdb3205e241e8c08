//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid synthetic shape: {message}")]
    InvalidShape { message: String },

    #[error("synthetic catalog too large: {requested} nodes (limit {limit})")]
    CatalogTooLarge { requested: usize, limit: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
