//! Error types for `review-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("review text is {len} characters long; the maximum is {max}")]
  TextTooLong { len: usize, max: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
