use thiserror::Error;

/// Errors raised while turning a flexible input into a canonical date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input had no recognizable date shape; carries the offending value
    #[error("cannot interpret {0:?} as a date")]
    InvalidInput(String),

    /// Separator normalization still failed to yield a valid instant
    #[error("invalid date string: {0:?}")]
    InvalidDateString(String),
}
