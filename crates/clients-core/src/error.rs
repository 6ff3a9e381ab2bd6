//! Domain-level error types.

use thiserror::Error;

/// Message carried by every `ResourceNotFound` raised by the service layer.
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An id-addressed read, update or delete targeted a missing client.
    #[error("{0}")]
    ResourceNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::ResourceNotFound(RESOURCE_NOT_FOUND.to_string())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
