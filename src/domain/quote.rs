use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{QuoteCategory, QuoteId, QuoteText};

/// Canonical quote record belonging to a rotation category.
///
/// At most one quote per category is `active` at any instant; the repository's
/// rotation mutation is the only writer of `active` and `last_activated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub text: QuoteText,
    pub category: QuoteCategory,
    pub active: bool,
    /// Set when the quote last became the category's current quote.
    /// `None` means it has never been activated.
    pub last_activated_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Quote`].
///
/// Quotes start inactive; only rotation activates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewQuote {
    pub text: QuoteText,
    pub category: QuoteCategory,
    pub created_at: NaiveDateTime,
}
