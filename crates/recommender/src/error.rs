//! Error types for the recommender crate.

use pipeline::PreferenceError;
use thiserror::Error;

/// Errors returned by `recommend`.
///
/// An empty catalog or an empty filtered set is not an error; it yields an
/// empty result.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// `top_n` must be at least 1
    #[error("top_n must be a positive integer, got {0}")]
    InvalidTopN(usize),

    /// The preference spec has an unusable weight or threshold
    #[error("Invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferenceError),

    /// A record produced a NaN or infinite score, so it cannot be ranked
    #[error("Score for {country} is not a finite number: {score}")]
    NonFiniteScore { country: String, score: f64 },

    /// A filter stage failed
    #[error(transparent)]
    Filter(#[from] anyhow::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
