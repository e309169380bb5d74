//! Daily rotation task.
//!
//! One background task per process, started at boot and stopped through a
//! cancellation token checked between firings. Each firing advances the
//! configured category's rotation once and hands the returned quote straight
//! to the notifier; there is no re-read of "latest" after the mutation.

use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::domain::types::QuoteCategory;
use crate::notifier::Notifier;
use crate::repository::QuoteWriter;
use crate::services::rotation::rotate_quote;

/// Time remaining until the next strictly-future occurrence of `fire_at` UTC.
///
/// An exact match schedules tomorrow's firing, so waking up at the configured
/// time never fires twice within one rotation window.
pub fn duration_until_next(now: DateTime<Utc>, fire_at: NaiveTime) -> std::time::Duration {
    let today = now.date_naive().and_time(fire_at).and_utc();
    let next = if today > now {
        today
    } else {
        today + ChronoDuration::days(1)
    };
    (next - now).to_std().unwrap_or_default()
}

/// Runs the rotation loop until the token is cancelled.
///
/// Every error class (empty pool, storage failure, delivery failure) is
/// logged and the loop waits for the next firing; a missed rotation
/// self-heals the following day. The rotation mutation itself is a single
/// transaction, so cancellation never leaves it partially applied.
pub async fn run_daily_rotation<R, N>(
    repo: R,
    notifier: N,
    category: QuoteCategory,
    fire_at: NaiveTime,
    cancel: CancellationToken,
) where
    R: QuoteWriter,
    N: Notifier,
{
    loop {
        let wait = duration_until_next(Utc::now(), fire_at);
        log::info!(
            "next rotation of category {category} in {}s",
            wait.as_secs()
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                log::info!("rotation scheduler stopped");
                return;
            }
            _ = tokio::time::sleep(wait) => {}
        }

        rotate_and_notify(&repo, &notifier, &category).await;
    }
}

async fn rotate_and_notify<R, N>(repo: &R, notifier: &N, category: &QuoteCategory)
where
    R: QuoteWriter,
    N: Notifier,
{
    let quote = match rotate_quote(category, repo) {
        Ok(quote) => quote,
        Err(e) => {
            log::error!("daily rotation of category {category} failed: {e}");
            return;
        }
    };

    log::info!("activated quote {} for category {category}", quote.id);

    // Delivery failure is reported only; the activation is already durable.
    if let Err(e) = notifier.notify(quote.text.as_str()).await {
        log::error!("webhook delivery failed: {e}");
    }
}
