//! Core types and trait definitions for the review service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Filtering and aggregation live here as pure functions over [`Review`]
//! slices; storage backends implement [`store::ReviewStore`].

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod review;
pub mod store;

pub use error::{Error, Result};
pub use filter::ReviewFilter;
pub use review::{NewReview, Review};
