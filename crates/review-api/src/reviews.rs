//! Handlers for `/reviews`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/reviews` | Body: [`NewReview`]; returns 201 + stored review |
//! | `GET`  | `/reviews` | Optional `date`, `store`, `rating` |

use std::{fmt, str::FromStr, sync::Arc};

use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use review_core::{NewReview, Review, ReviewFilter, store::ReviewStore};
use serde::{Deserialize, Deserializer, de};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /reviews` — returns 201 + the stored [`Review`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewReview>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ReviewStore,
{
  let Json(input) = body?;
  input.validate()?;

  let review = store.insert(input).await.map_err(ApiError::store)?;
  tracing::info!(id = review.id, source = %review.source, "review recorded");
  Ok((StatusCode::CREATED, Json(review)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// UTC calendar day, `YYYY-MM-DD`.
  #[serde(default, deserialize_with = "empty_as_none")]
  pub date:   Option<NaiveDate>,
  /// Exact review source; empty means any.
  pub store:  Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub rating: Option<i32>,
}

impl From<ListParams> for ReviewFilter {
  fn from(p: ListParams) -> Self {
    ReviewFilter {
      date:   p.date,
      store:  p.store,
      rating: p.rating,
    }
  }
}

/// `GET /reviews[?date=YYYY-MM-DD][&store=...][&rating=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Review>>, ApiError>
where
  S: ReviewStore,
{
  let Query(params) = query?;
  let filter = ReviewFilter::from(params);

  let reviews = store
    .fetch_filtered(&filter)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(reviews))
}

/// Treat a present-but-empty query value (`?rating=`) as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: FromStr,
  T::Err: fmt::Display,
{
  match Option::<String>::deserialize(deserializer)?.as_deref() {
    None | Some("") => Ok(None),
    Some(s) => s
      .parse()
      .map(Some)
      .map_err(|e| de::Error::custom(format!("{s:?}: {e}"))),
  }
}
