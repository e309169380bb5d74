use crate::domain::quote::Quote;
use crate::domain::types::QuoteCategory;
use crate::repository::QuoteWriter;

use super::{ServiceError, ServiceResult};

/// Advances a category's rotation by exactly one step and returns the newly
/// active quote.
///
/// The selection policy lives in the repository: least-recently-activated
/// first, never-activated quotes before all others, ties broken by creation
/// order, so every quote in the pool is served once before any repeats.
/// Every call performs one persisted mutation; calling it again always
/// advances the rotation, so call frequency is the scheduler's
/// responsibility.
pub fn rotate_quote<R>(category: &QuoteCategory, repo: &R) -> ServiceResult<Quote>
where
    R: QuoteWriter,
{
    match repo.activate_oldest_inactive(category) {
        Ok(Some(quote)) => Ok(quote),
        Ok(None) => Err(ServiceError::NoQuotesAvailable),
        Err(e) => {
            log::error!("Failed to rotate category {category}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    use crate::domain::quote::NewQuote;
    use crate::domain::types::QuoteText;
    use crate::repository::QuoteReader;
    use crate::repository::test::TestRepository;

    fn seed(repo: &TestRepository, texts: &[&str], category: &str) {
        for text in texts {
            repo.add_quote(&NewQuote {
                text: QuoteText::new(*text).unwrap(),
                category: QuoteCategory::new(category).unwrap(),
                created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            })
            .unwrap();
        }
    }

    #[test]
    fn first_rotation_activates_lowest_id() {
        let repo = TestRepository::new(vec![]);
        seed(&repo, &["Q1", "Q2"], "normal");
        let category = QuoteCategory::new("normal").unwrap();

        let quote = rotate_quote(&category, &repo).unwrap();

        assert_eq!(quote.text, "Q1");
        assert!(quote.active);
        let latest = repo.get_active_quote(&category).unwrap().unwrap();
        assert_eq!(latest.text, "Q1");
    }

    #[test]
    fn second_rotation_swaps_active_quote() {
        let repo = TestRepository::new(vec![]);
        seed(&repo, &["Q1", "Q2"], "normal");
        let category = QuoteCategory::new("normal").unwrap();

        rotate_quote(&category, &repo).unwrap();
        let quote = rotate_quote(&category, &repo).unwrap();

        assert_eq!(quote.text, "Q2");
        let active: Vec<_> = repo.quotes().into_iter().filter(|q| q.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "Q2");
    }

    #[test]
    fn every_quote_served_before_any_repeats() {
        let repo = TestRepository::new(vec![]);
        seed(&repo, &["Q1", "Q2", "Q3"], "normal");
        let category = QuoteCategory::new("normal").unwrap();

        let first_cycle: Vec<String> = (0..3)
            .map(|_| rotate_quote(&category, &repo).unwrap().text.into_inner())
            .collect();
        assert_eq!(first_cycle, ["Q1", "Q2", "Q3"]);

        // The pool is exhausted; the next cycle starts over in the same order.
        let repeat = rotate_quote(&category, &repo).unwrap();
        assert_eq!(repeat.text, "Q1");
    }

    #[test]
    fn rotation_timestamps_are_non_decreasing() {
        let repo = TestRepository::new(vec![]);
        seed(&repo, &["Q1", "Q2", "Q3"], "normal");
        let category = QuoteCategory::new("normal").unwrap();

        let stamps: Vec<_> = (0..3)
            .map(|_| rotate_quote(&category, &repo).unwrap().last_activated_at)
            .collect();

        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_category_reports_no_quotes_available() {
        let repo = TestRepository::new(vec![]);
        let category = QuoteCategory::new("empty").unwrap();

        let err = rotate_quote(&category, &repo).unwrap_err();

        assert_eq!(err, ServiceError::NoQuotesAvailable);
    }

    #[test]
    fn categories_rotate_independently() {
        let repo = TestRepository::new(vec![]);
        seed(&repo, &["N1", "N2"], "normal");
        seed(&repo, &["D1"], "dark");

        let normal = QuoteCategory::new("normal").unwrap();
        let dark = QuoteCategory::new("dark").unwrap();

        rotate_quote(&normal, &repo).unwrap();
        let quote = rotate_quote(&dark, &repo).unwrap();

        assert_eq!(quote.text, "D1");
        let active: Vec<_> = repo.quotes().into_iter().filter(|q| q.active).collect();
        assert_eq!(active.len(), 2);
    }
}
