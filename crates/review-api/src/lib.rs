//! JSON REST API for the review service.
//!
//! Exposes an axum [`Router`] backed by any [`ReviewStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = review_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod reviews;
pub mod stats;

use std::sync::Arc;

use axum::{Router, routing::get};
use review_core::store::ReviewStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ReviewStore + 'static,
{
  Router::new()
    .route("/reviews", get(reviews::list::<S>).post(reviews::create::<S>))
    .route(
      "/reviews/average_monthly_ratings",
      get(stats::average_monthly_ratings::<S>),
    )
    .route("/reviews/rating_counts", get(stats::rating_counts::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
