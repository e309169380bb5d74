use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// No quote at all carries the requested category.
    #[error("category not found")]
    CategoryNotFound,
    /// The category exists but no rotation has ever run for it. A legitimate
    /// pre-first-rotation state reported as not-found, not a failure.
    #[error("no active quote")]
    NoActiveQuote,
    /// Rotation was attempted on a category with zero quotes.
    #[error("no quotes available")]
    NoQuotesAvailable,
    /// An unexpected internal error occurred (storage failure and the like).
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
