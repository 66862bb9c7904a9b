//! The `ReviewStore` trait.
//!
//! Implemented by storage backends (e.g. `review-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  filter::ReviewFilter,
  review::{NewReview, Review},
};

/// Abstraction over a durable review collection.
///
/// Writes are append-only: there is no update or delete. All methods return
/// `Send` futures so the trait can be used behind `axum` on a multi-threaded
/// tokio runtime.
pub trait ReviewStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new review and return it with its store-assigned `id`.
  fn insert(
    &self,
    input: NewReview,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// Every stored review, in the store's natural order.
  fn fetch_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Review>, Self::Error>> + Send + '_;

  /// Reviews matching every present criterion of `filter`.
  ///
  /// Must agree with [`ReviewFilter::apply`] over [`Self::fetch_all`].
  fn fetch_filtered<'a>(
    &'a self,
    filter: &'a ReviewFilter,
  ) -> impl Future<Output = Result<Vec<Review>, Self::Error>> + Send + 'a;
}
