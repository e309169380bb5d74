use crate::domain::quote::Quote;
use crate::domain::types::QuoteCategory;
use crate::repository::QuoteReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for the "latest quote" query.
///
/// Verifies that the category exists, then returns the currently active
/// quote. A category that exists but was never rotated yields
/// [`ServiceError::NoActiveQuote`]. All repository errors are translated into
/// `ServiceError` so that the HTTP route can remain a thin wrapper.
pub fn latest_quote<R>(category: &str, repo: &R) -> ServiceResult<Quote>
where
    R: QuoteReader,
{
    let category = parse_category(category)?;
    ensure_category_exists(&category, repo)?;

    match repo.get_active_quote(&category) {
        Ok(Some(quote)) => Ok(quote),
        Ok(None) => Err(ServiceError::NoActiveQuote),
        Err(e) => {
            log::error!("Failed to get active quote: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the "random quote" query.
///
/// Returns a uniformly chosen quote from the category regardless of active
/// state, independent of the rotation schedule.
pub fn random_quote<R>(category: &str, repo: &R) -> ServiceResult<Quote>
where
    R: QuoteReader,
{
    let category = parse_category(category)?;
    ensure_category_exists(&category, repo)?;

    match repo.get_random_quote(&category) {
        Ok(Some(quote)) => Ok(quote),
        // The existence check passed, so an empty result is a storage anomaly.
        Ok(None) => Err(ServiceError::Internal),
        Err(e) => {
            log::error!("Failed to get random quote: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn parse_category(category: &str) -> ServiceResult<QuoteCategory> {
    QuoteCategory::new(category).map_err(|_| ServiceError::CategoryNotFound)
}

fn ensure_category_exists<R>(category: &QuoteCategory, repo: &R) -> ServiceResult<()>
where
    R: QuoteReader,
{
    match repo.category_exists(category) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ServiceError::CategoryNotFound),
        Err(e) => {
            log::error!("Failed to check category existence: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::Quote;
    use crate::domain::types::{QuoteId, QuoteText};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_quote(id: i32, text: &str, category: &str, active: bool) -> Quote {
        Quote {
            id: QuoteId::new(id).unwrap(),
            text: QuoteText::new(text).unwrap(),
            category: QuoteCategory::new(category).unwrap(),
            active,
            last_activated_at: active.then(|| DateTime::from_timestamp(0, 0).unwrap().naive_utc()),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn latest_returns_active_quote() {
        let repo = TestRepository::new(vec![
            sample_quote(1, "first", "normal", false),
            sample_quote(2, "second", "normal", true),
        ]);

        let quote = latest_quote("normal", &repo).unwrap();

        assert_eq!(quote.text, "second");
    }

    #[test]
    fn latest_reports_no_active_quote_before_first_rotation() {
        let repo = TestRepository::new(vec![sample_quote(1, "first", "normal", false)]);

        let err = latest_quote("normal", &repo).unwrap_err();

        assert_eq!(err, ServiceError::NoActiveQuote);
    }

    #[test]
    fn unknown_category_is_distinct_from_no_active_quote() {
        let repo = TestRepository::new(vec![sample_quote(1, "first", "normal", false)]);

        let err = latest_quote("missing", &repo).unwrap_err();

        assert_eq!(err, ServiceError::CategoryNotFound);
    }

    #[test]
    fn random_ignores_active_state() {
        let repo = TestRepository::new(vec![sample_quote(1, "first", "normal", false)]);

        let quote = random_quote("normal", &repo).unwrap();

        assert_eq!(quote.text, "first");
    }

    #[test]
    fn random_on_empty_category_reports_not_found() {
        let repo = TestRepository::new(vec![sample_quote(1, "first", "normal", false)]);

        let err = random_quote("missing", &repo).unwrap_err();

        assert_eq!(err, ServiceError::CategoryNotFound);
    }

    #[test]
    fn blank_category_is_rejected() {
        let repo = TestRepository::new(vec![]);

        let err = random_quote("  ", &repo).unwrap_err();

        assert_eq!(err, ServiceError::CategoryNotFound);
    }
}
