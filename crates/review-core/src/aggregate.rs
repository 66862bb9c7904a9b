//! Aggregate views over a full review set.
//!
//! Both functions are total: any slice, including an empty one, produces a
//! map. Groups with no reviews are never materialised.

use std::collections::BTreeMap;

use crate::review::Review;

/// `month key → source → mean rating`.
pub type MonthlyAverages = BTreeMap<String, BTreeMap<String, f64>>;

/// `rating → number of reviews`.
pub type RatingCounts = BTreeMap<i32, u64>;

#[derive(Debug, Default)]
struct Mean {
  sum:   i64,
  count: u64,
}

impl Mean {
  fn add(&mut self, rating: i32) {
    self.sum += i64::from(rating);
    self.count += 1;
  }

  fn value(&self) -> f64 { self.sum as f64 / self.count as f64 }
}

/// Average rating per source per UTC month (`"YYYY-MM"`).
pub fn average_monthly_ratings(reviews: &[Review]) -> MonthlyAverages {
  let mut groups: BTreeMap<(String, &str), Mean> = BTreeMap::new();

  for review in reviews {
    groups
      .entry((review.month_key(), review.source.as_str()))
      .or_default()
      .add(review.rating);
  }

  let mut averages = MonthlyAverages::new();
  for ((month, source), mean) in groups {
    averages
      .entry(month)
      .or_default()
      .insert(source.to_owned(), mean.value());
  }
  averages
}

/// Number of reviews holding each rating value.
pub fn rating_counts(reviews: &[Review]) -> RatingCounts {
  let mut counts = RatingCounts::new();
  for review in reviews {
    *counts.entry(review.rating).or_default() += 1;
  }
  counts
}
