use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::quote::{NewQuote as DomainNewQuote, Quote as DomainQuote};
use crate::domain::types::{QuoteCategory, QuoteText, TypeConstraintError};

/// Diesel model representing the `quotes` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::quotes)]
pub struct Quote {
    pub id: i32,
    pub text: String,
    pub category: String,
    pub active: bool,
    pub last_activated_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Quote`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuote {
    pub text: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Quote> for DomainQuote {
    type Error = TypeConstraintError;

    fn try_from(quote: Quote) -> Result<Self, Self::Error> {
        Ok(Self {
            id: quote.id.try_into()?,
            text: QuoteText::new(quote.text)?,
            category: QuoteCategory::new(quote.category)?,
            active: quote.active,
            last_activated_at: quote.last_activated_at,
            created_at: quote.created_at,
        })
    }
}

impl From<DomainNewQuote> for NewQuote {
    fn from(quote: DomainNewQuote) -> Self {
        Self {
            text: quote.text.into_inner(),
            category: quote.category.into_inner(),
            created_at: quote.created_at,
        }
    }
}
