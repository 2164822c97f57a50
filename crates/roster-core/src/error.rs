//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid pay period {0:?}: expected \"YYYY-MM\"")]
  InvalidPayPeriod(String),

  #[error("rating {0} out of range 0..=5")]
  RatingOutOfRange(u8),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
