//! Conjunctive filtering over reviews by day, store, and rating.
//!
//! Absent criteria impose no constraint. An empty store string counts as
//! absent. Day boundaries are always computed in UTC.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::review::Review;

/// Parameters for [`crate::store::ReviewStore::fetch_filtered`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
  /// Calendar day (UTC) the review must have been written on.
  pub date:   Option<NaiveDate>,
  /// Exact, case-sensitive match on [`Review::source`].
  pub store:  Option<String>,
  pub rating: Option<i32>,
}

impl ReviewFilter {
  /// The store criterion, with `Some("")` normalised to `None`.
  pub fn store(&self) -> Option<&str> {
    self.store.as_deref().filter(|s| !s.is_empty())
  }

  /// The half-open UTC interval `[start, end)` covered by the date criterion.
  pub fn day_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    self.date.map(day_bounds)
  }

  /// `true` if no criterion constrains the result.
  pub fn is_empty(&self) -> bool {
    self.date.is_none() && self.store().is_none() && self.rating.is_none()
  }

  /// Whether `review` satisfies every present criterion.
  pub fn matches(&self, review: &Review) -> bool {
    let in_day = self.day_bounds().is_none_or(|(start, end)| {
      start <= review.reviewed_date && review.reviewed_date < end
    });
    let from_store = self.store().is_none_or(|s| review.source == s);
    let rated = self.rating.is_none_or(|r| review.rating == r);

    in_day && from_store && rated
  }

  /// Keep the reviews that match, preserving their order.
  pub fn apply(&self, mut reviews: Vec<Review>) -> Vec<Review> {
    reviews.retain(|r| self.matches(r));
    reviews
  }
}

fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
  let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
  // `checked_add_days` only fails at the very end of chrono's range.
  let end = start
    .checked_add_days(Days::new(1))
    .unwrap_or(DateTime::<Utc>::MAX_UTC);
  (start, end)
}
