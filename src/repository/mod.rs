use crate::db::{DbConnection, DbPool};
use crate::domain::quote::{NewQuote, Quote};
use crate::domain::types::QuoteCategory;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod quote;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers and the scheduler task.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over the quote store.
pub trait QuoteReader {
    /// True iff at least one quote carries the given category.
    fn category_exists(&self, category: &QuoteCategory) -> RepositoryResult<bool>;
    /// The currently active quote for the category, if any rotation ever ran.
    fn get_active_quote(&self, category: &QuoteCategory) -> RepositoryResult<Option<Quote>>;
    /// A uniformly chosen quote from the category, independent of active
    /// state. `None` iff the category has zero quotes.
    fn get_random_quote(&self, category: &QuoteCategory) -> RepositoryResult<Option<Quote>>;
}

/// Write operations over the quote store.
pub trait QuoteWriter {
    /// Advances the category's rotation by one step: deactivates the current
    /// active quote, activates the least-recently-activated one (never
    /// activated first, ties broken by lowest id) and stamps
    /// `last_activated_at`. Applied as a single exclusive transaction so
    /// readers never observe a category with zero active quotes once a
    /// rotation has succeeded. Returns the newly active quote, or `None` if
    /// the category has zero quotes.
    fn activate_oldest_inactive(&self, category: &QuoteCategory) -> RepositoryResult<Option<Quote>>;
    /// Seed/import path; quotes start inactive.
    fn add_quote(&self, quote: &NewQuote) -> RepositoryResult<Quote>;
}
