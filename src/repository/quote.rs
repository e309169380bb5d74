use chrono::Utc;
use diesel::prelude::*;

use crate::domain::quote::{NewQuote, Quote};
use crate::domain::types::QuoteCategory;
use crate::models::quote::{NewQuote as DbNewQuote, Quote as DbQuote};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, QuoteReader, QuoteWriter};

diesel::define_sql_function! {
    /// SQLite `RANDOM()`, used for uniform selection over a category.
    fn random() -> Integer;
}

impl QuoteReader for DieselRepository {
    fn category_exists(&self, category: &QuoteCategory) -> RepositoryResult<bool> {
        use crate::schema::quotes;

        let mut conn = self.conn()?;

        let total: i64 = quotes::table
            .filter(quotes::category.eq(category.as_str()))
            .count()
            .get_result(&mut conn)?;

        Ok(total > 0)
    }

    fn get_active_quote(&self, category: &QuoteCategory) -> RepositoryResult<Option<Quote>> {
        use crate::schema::quotes;

        let mut conn = self.conn()?;

        let quote = quotes::table
            .filter(quotes::category.eq(category.as_str()))
            .filter(quotes::active.eq(true))
            .first::<DbQuote>(&mut conn)
            .optional()?;

        Ok(quote.map(TryInto::try_into).transpose()?)
    }

    fn get_random_quote(&self, category: &QuoteCategory) -> RepositoryResult<Option<Quote>> {
        use crate::schema::quotes;

        let mut conn = self.conn()?;

        let quote = quotes::table
            .filter(quotes::category.eq(category.as_str()))
            .order(random())
            .first::<DbQuote>(&mut conn)
            .optional()?;

        Ok(quote.map(TryInto::try_into).transpose()?)
    }
}

impl QuoteWriter for DieselRepository {
    fn activate_oldest_inactive(&self, category: &QuoteCategory) -> RepositoryResult<Option<Quote>> {
        use crate::schema::quotes;

        let mut conn = self.conn()?;

        // An immediate transaction takes the SQLite write lock up front, so
        // concurrent activations serialize and readers see either the old or
        // the new active quote, never zero. Ascending order sorts NULL
        // `last_activated_at` (never activated) first; id breaks ties.
        let activated = conn.immediate_transaction(|conn| {
            let candidate = quotes::table
                .filter(quotes::category.eq(category.as_str()))
                .order((quotes::last_activated_at.asc(), quotes::id.asc()))
                .first::<DbQuote>(conn)
                .optional()?;

            let Some(candidate) = candidate else {
                return Ok(None);
            };

            diesel::update(
                quotes::table
                    .filter(quotes::category.eq(category.as_str()))
                    .filter(quotes::active.eq(true)),
            )
            .set(quotes::active.eq(false))
            .execute(conn)?;

            let quote = diesel::update(quotes::table.find(candidate.id))
                .set((
                    quotes::active.eq(true),
                    quotes::last_activated_at.eq(Utc::now().naive_utc()),
                ))
                .get_result::<DbQuote>(conn)?;

            Ok::<_, diesel::result::Error>(Some(quote))
        })?;

        Ok(activated.map(TryInto::try_into).transpose()?)
    }

    fn add_quote(&self, quote: &NewQuote) -> RepositoryResult<Quote> {
        use crate::schema::quotes;

        let mut conn = self.conn()?;
        let db_quote: DbNewQuote = quote.clone().into();

        let inserted = diesel::insert_into(quotes::table)
            .values(db_quote)
            .get_result::<DbQuote>(&mut conn)?;

        Ok(inserted.try_into()?)
    }
}
