use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not obtain a connection from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A query or transaction failed.
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    /// A stored row violated a domain type constraint.
    #[error("validation error: {0}")]
    Validation(#[from] TypeConstraintError),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
