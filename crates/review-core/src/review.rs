//! Review types — the only entity the service records.
//!
//! A review is immutable once stored. The store assigns `id`; every other
//! field is supplied by the caller, including `reviewed_date`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Upper bound on [`Review::text`], counted in characters.
pub const MAX_TEXT_LEN: usize = 1000;

// ─── Review ──────────────────────────────────────────────────────────────────

/// A stored customer review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
  /// Store-assigned identifier; never reused.
  pub id:            i64,
  #[serde(rename = "review", alias = "text")]
  pub text:          String,
  pub author:        String,
  /// The marketplace or channel the review came from, e.g. `"itunes"`.
  #[serde(rename = "reviewSource", alias = "source")]
  pub source:        String,
  pub rating:        i32,
  pub title:         String,
  pub product_name:  String,
  #[serde(with = "timestamp")]
  pub reviewed_date: DateTime<Utc>,
}

impl Review {
  /// The UTC `YYYY-MM` bucket this review falls into.
  pub fn month_key(&self) -> String {
    self.reviewed_date.format("%Y-%m").to_string()
  }
}

// ─── NewReview ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::ReviewStore::insert`].
/// `id` is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
  #[serde(rename = "review", alias = "text")]
  pub text:          String,
  pub author:        String,
  #[serde(rename = "reviewSource", alias = "source")]
  pub source:        String,
  pub rating:        i32,
  pub title:         String,
  pub product_name:  String,
  #[serde(with = "timestamp")]
  pub reviewed_date: DateTime<Utc>,
}

impl NewReview {
  /// Reject input the store would refuse to persist.
  pub fn validate(&self) -> Result<()> {
    let len = self.text.chars().count();
    if len > MAX_TEXT_LEN {
      return Err(Error::TextTooLong { len, max: MAX_TEXT_LEN });
    }
    Ok(())
  }

  /// Attach a store-assigned id.
  pub fn into_review(self, id: i64) -> Review {
    Review {
      id,
      text: self.text,
      author: self.author,
      source: self.source,
      rating: self.rating,
      title: self.title,
      product_name: self.product_name,
      reviewed_date: self.reviewed_date,
    }
  }
}

// ─── Timestamp format ────────────────────────────────────────────────────────

/// Serde adapter for `reviewedDate`.
///
/// Output is always `YYYY-MM-DDTHH:MM:SS.sssZ`. Input accepts any RFC 3339
/// timestamp whose UTC year stays within `0..=9999`, so the output form is
/// always four-digit.
pub mod timestamp {
  use std::ops::RangeInclusive;

  use chrono::{DateTime, Datelike as _, SecondsFormat, Utc};
  use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

  /// UTC years representable in the four-digit output form.
  pub const YEARS: RangeInclusive<i32> = 0..=9999;

  /// Render `dt` in the fixed-width millisecond form.
  pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
  }

  pub fn serialize<S: Serializer>(
    dt: &DateTime<Utc>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(dt))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<DateTime<Utc>, D::Error> {
    let s = String::deserialize(deserializer)?;
    let dt = DateTime::parse_from_rfc3339(&s)
      .map(|dt| dt.with_timezone(&Utc))
      .map_err(|e| D::Error::custom(format!("invalid reviewedDate {s:?}: {e}")))?;
    if !YEARS.contains(&dt.year()) {
      return Err(D::Error::custom(format!(
        "reviewedDate {s:?} falls outside UTC years 0000-9999"
      )));
    }
    Ok(dt)
  }
}
