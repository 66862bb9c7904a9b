//! [`SqliteStore`] — the SQLite implementation of [`ReviewStore`].

use std::path::Path;

use rusqlite::types::Value;
use review_core::{NewReview, Review, ReviewFilter, store::ReviewStore};

use crate::{
  Result,
  encode::{REVIEW_COLUMNS, RawReview, encode_dt, truncate_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A review store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("review schema initialised");
    Ok(())
  }

  /// Run a `SELECT` over `reviews` with an optional `WHERE` clause.
  async fn select(&self, where_clause: String, params: Vec<Value>) -> Result<Vec<Review>> {
    let raws: Vec<RawReview> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {REVIEW_COLUMNS} FROM reviews {where_clause} ORDER BY id");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), RawReview::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReview::into_review).collect()
  }
}

// ─── ReviewStore impl ────────────────────────────────────────────────────────

impl ReviewStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, mut input: NewReview) -> Result<Review> {
    input.reviewed_date = truncate_dt(input.reviewed_date);

    let text         = input.text.clone();
    let author       = input.author.clone();
    let source       = input.source.clone();
    let rating       = input.rating;
    let title        = input.title.clone();
    let product_name = input.product_name.clone();
    let date_ms      = encode_dt(input.reviewed_date);

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO reviews (
             review, author, review_source, rating, title, product_name, reviewed_date
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![text, author, source, rating, title, product_name, date_ms],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_review(id))
  }

  async fn fetch_all(&self) -> Result<Vec<Review>> {
    self.select(String::new(), Vec::new()).await
  }

  async fn fetch_filtered(&self, filter: &ReviewFilter) -> Result<Vec<Review>> {
    // Build WHERE clause piecewise from the present criteria.
    let mut conds: Vec<&'static str> = vec![];
    let mut params: Vec<Value> = vec![];

    if let Some((start, end)) = filter.day_bounds() {
      conds.push("reviewed_date >= ? AND reviewed_date < ?");
      params.push(Value::Integer(encode_dt(start)));
      params.push(Value::Integer(encode_dt(end)));
    }
    if let Some(store) = filter.store() {
      conds.push("review_source = ?");
      params.push(Value::Text(store.to_owned()));
    }
    if let Some(rating) = filter.rating {
      conds.push("rating = ?");
      params.push(Value::Integer(i64::from(rating)));
    }

    let where_clause = if conds.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", conds.join(" AND "))
    };

    self.select(where_clause, params).await
  }
}
