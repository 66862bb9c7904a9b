//! Aggregate views over every stored review.
//!
//! | Method | Path |
//! |--------|------|
//! | `GET`  | `/reviews/average_monthly_ratings` |
//! | `GET`  | `/reviews/rating_counts` |

use std::sync::Arc;

use axum::{Json, extract::State};
use review_core::{
  aggregate::{self, MonthlyAverages, RatingCounts},
  store::ReviewStore,
};

use crate::error::ApiError;

/// `GET /reviews/average_monthly_ratings` — `{"YYYY-MM": {"<source>": avg}}`
pub async fn average_monthly_ratings<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<MonthlyAverages>, ApiError>
where
  S: ReviewStore,
{
  let reviews = store.fetch_all().await.map_err(ApiError::store)?;
  Ok(Json(aggregate::average_monthly_ratings(&reviews)))
}

/// `GET /reviews/rating_counts` — `{"<rating>": count}`
pub async fn rating_counts<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<RatingCounts>, ApiError>
where
  S: ReviewStore,
{
  let reviews = store.fetch_all().await.map_err(ApiError::store)?;
  Ok(Json(aggregate::rating_counts(&reviews)))
}
