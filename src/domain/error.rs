//! Engine error types.
//!
//! Only `InvalidProbability` and the selection errors stop a computation.
//! `DivisionUndefined` and `UnparsableDate` are recovered with fallbacks
//! but remain constructible so callers can inspect what was recovered.

use thiserror::Error;

/// Errors raised by the position engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Outcome probability outside [0, 1] or not a finite number.
    #[error("invalid probability {0}: must be a finite number in [0, 1]")]
    InvalidProbability(f64),

    /// Return-on-win requested for a position that cost nothing.
    #[error("return on win is undefined for a zero-cost position")]
    DivisionUndefined,

    /// Market end date could not be parsed.
    #[error("unparsable market end date: {0:?}")]
    UnparsableDate(String),

    /// The analysis carried no recommendations to select from.
    #[error("analysis contains no recommendations")]
    NoRecommendations,

    /// Selected index is past the end of the recommendation list.
    #[error("recommendation {index} not found ({available} available)")]
    RecommendationNotFound { index: usize, available: usize },
}
