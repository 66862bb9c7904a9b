//! Encoding and decoding helpers between domain types and the values stored
//! in SQLite columns.
//!
//! Timestamps are stored as integer milliseconds since the Unix epoch, so
//! range predicates compare the column numerically across the whole chrono
//! range.

use chrono::{DateTime, SubsecRound as _, Utc};
use review_core::Review;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> i64 { dt.timestamp_millis() }

pub fn decode_dt(millis: i64) -> Result<DateTime<Utc>> {
  DateTime::from_timestamp_millis(millis)
    .ok_or_else(|| Error::DateParse(format!("{millis} ms is out of range")))
}

/// Drop precision finer than the stored millisecond resolution.
pub fn truncate_dt(dt: DateTime<Utc>) -> DateTime<Utc> { dt.trunc_subsecs(3) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Columns selected by every review query, in [`RawReview::from_row`] order.
pub const REVIEW_COLUMNS: &str =
  "id, review, author, review_source, rating, title, product_name, reviewed_date";

/// Raw values read directly from a `reviews` row.
pub struct RawReview {
  pub id:            i64,
  pub review:        String,
  pub author:        String,
  pub review_source: String,
  pub rating:        i32,
  pub title:         String,
  pub product_name:  String,
  pub reviewed_date: i64,
}

impl RawReview {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawReview {
      id:            row.get(0)?,
      review:        row.get(1)?,
      author:        row.get(2)?,
      review_source: row.get(3)?,
      rating:        row.get(4)?,
      title:         row.get(5)?,
      product_name:  row.get(6)?,
      reviewed_date: row.get(7)?,
    })
  }

  pub fn into_review(self) -> Result<Review> {
    Ok(Review {
      id:            self.id,
      text:          self.review,
      author:        self.author,
      source:        self.review_source,
      rating:        self.rating,
      title:         self.title,
      product_name:  self.product_name,
      reviewed_date: decode_dt(self.reviewed_date)?,
    })
  }
}
