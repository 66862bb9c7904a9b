//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use review_core::{
  NewReview, ReviewFilter,
  aggregate::{average_monthly_ratings, rating_counts},
  review::MAX_TEXT_LEN,
  store::ReviewStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_review(n: u32, source: &str, rating: i32, at: DateTime<Utc>) -> NewReview {
  NewReview {
    text:          format!("review{n}"),
    author:        format!("author{n}"),
    source:        source.into(),
    rating,
    title:         format!("title{n}"),
    product_name:  "Alexa".into(),
    reviewed_date: at,
  }
}

fn oct(day: u32, h: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 10, day, h, 0, 0).unwrap()
}

async fn seeded() -> SqliteStore {
  let s = store().await;
  let rows = [
    new_review(1, "itunes", 4, oct(5, 0)),
    new_review(2, "itunes", 5, oct(5, 23) + Duration::milliseconds(3_599_999)),
    new_review(3, "google", 5, oct(6, 0)),
    new_review(4, "google", 3, oct(4, 23)),
    new_review(5, "Google", 4, oct(5, 12)),
  ];
  for row in rows {
    s.insert(row).await.unwrap();
  }
  s
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_increasing_ids() {
  let s = store().await;

  let a = s.insert(new_review(1, "itunes", 4, oct(5, 0))).await.unwrap();
  let b = s.insert(new_review(1, "itunes", 4, oct(5, 0))).await.unwrap();

  assert!(b.id > a.id);
  assert_eq!(a.text, b.text);
  assert_eq!(s.fetch_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn insert_returns_what_fetch_returns() {
  let s = store().await;
  let created = s
    .insert(new_review(1, "itunes", 4, oct(5, 9)))
    .await
    .unwrap();

  let all = s.fetch_all().await.unwrap();
  assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn insert_truncates_to_milliseconds() {
  let s = store().await;
  let at = oct(5, 9) + Duration::microseconds(1_234_567);

  let created = s.insert(new_review(1, "itunes", 4, at)).await.unwrap();
  assert_eq!(created.reviewed_date, oct(5, 9) + Duration::milliseconds(1_234));

  let fetched = s.fetch_all().await.unwrap();
  assert_eq!(fetched[0].reviewed_date, created.reviewed_date);
}

#[tokio::test]
async fn schema_rejects_long_text() {
  let s = store().await;
  let mut input = new_review(1, "itunes", 4, oct(5, 0));
  input.text = "x".repeat(MAX_TEXT_LEN + 1);

  let err = s.insert(input).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert!(s.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_years_stay_readable() {
  let s = store().await;
  let y10k = Utc.with_ymd_and_hms(10_000, 1, 1, 4, 0, 0).unwrap();
  let bce = Utc.with_ymd_and_hms(-1, 12, 31, 23, 0, 0).unwrap();

  let far = s.insert(new_review(1, "itunes", 4, y10k)).await.unwrap();
  let early = s.insert(new_review(2, "itunes", 4, bce)).await.unwrap();
  let usual = s.insert(new_review(3, "itunes", 4, oct(5, 0))).await.unwrap();

  let all = s.fetch_all().await.unwrap();
  assert_eq!(all, vec![far.clone(), early, usual.clone()]);

  let filter = ReviewFilter {
    date: NaiveDate::from_ymd_opt(2024, 10, 5),
    ..Default::default()
  };
  assert_eq!(s.fetch_filtered(&filter).await.unwrap(), vec![usual]);

  let filter = ReviewFilter {
    date: NaiveDate::from_ymd_opt(10_000, 1, 1),
    ..Default::default()
  };
  assert_eq!(s.fetch_filtered(&filter).await.unwrap(), vec![far]);
}

// ─── Fetch ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_all_empty_store() {
  let s = store().await;
  assert!(s.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_all_preserves_insertion_order() {
  let s = seeded().await;
  let texts: Vec<String> = s
    .fetch_all()
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.text)
    .collect();
  assert_eq!(texts, ["review1", "review2", "review3", "review4", "review5"]);
}

#[tokio::test]
async fn fetch_filtered_by_date_uses_utc_day() {
  let s = seeded().await;
  let filter = ReviewFilter {
    date: NaiveDate::from_ymd_opt(2024, 10, 5),
    ..Default::default()
  };

  let texts: Vec<String> = s
    .fetch_filtered(&filter)
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.text)
    .collect();
  assert_eq!(texts, ["review1", "review2", "review5"]);
}

#[tokio::test]
async fn fetch_filtered_by_store_and_rating() {
  let s = seeded().await;
  let created = s
    .insert(new_review(6, "amazon", 2, oct(7, 0)))
    .await
    .unwrap();

  let filter = ReviewFilter {
    store:  Some("amazon".into()),
    rating: Some(2),
    ..Default::default()
  };
  assert_eq!(s.fetch_filtered(&filter).await.unwrap(), vec![created]);
}

#[tokio::test]
async fn empty_store_string_is_no_filter() {
  let s = seeded().await;
  let filter = ReviewFilter {
    store: Some(String::new()),
    ..Default::default()
  };
  assert_eq!(s.fetch_filtered(&filter).await.unwrap().len(), 5);
}

#[tokio::test]
async fn sql_filter_agrees_with_predicate() {
  let s = seeded().await;
  let all = s.fetch_all().await.unwrap();

  let dates = [None, NaiveDate::from_ymd_opt(2024, 10, 5), NaiveDate::from_ymd_opt(2024, 10, 6)];
  let stores = [None, Some("itunes"), Some("google"), Some("")];
  let ratings = [None, Some(4), Some(5)];

  for date in dates {
    for store in stores {
      for rating in ratings {
        let filter = ReviewFilter { date, store: store.map(str::to_owned), rating };
        let from_sql = s.fetch_filtered(&filter).await.unwrap();
        assert_eq!(from_sql, filter.apply(all.clone()), "filter: {filter:?}");
      }
    }
  }
}

// ─── Aggregates over stored data ─────────────────────────────────────────────

#[tokio::test]
async fn aggregates_over_fetch_all() {
  let s = seeded().await;
  s.insert(new_review(6, "itunes", 3, Utc.with_ymd_and_hms(2024, 9, 30, 23, 0, 0).unwrap()))
    .await
    .unwrap();
  let all = s.fetch_all().await.unwrap();

  let averages = average_monthly_ratings(&all);
  assert_eq!(averages.len(), 2);
  assert_eq!(averages["2024-10"]["itunes"], 4.5);
  assert_eq!(averages["2024-10"]["google"], 4.0);
  assert_eq!(averages["2024-10"]["Google"], 4.0);
  assert_eq!(averages["2024-09"]["itunes"], 3.0);

  let counts = rating_counts(&all);
  assert_eq!(counts.get(&3), Some(&2));
  assert_eq!(counts.get(&4), Some(&2));
  assert_eq!(counts.get(&5), Some(&2));
}
