//! Engine error types.
//!
//! These errors cover the input-validation taxonomy of the scoring engine.
//! Defined here so callers can match on the failure kind instead of string
//! matching. Numerical degeneracy during estimation is deliberately *not*
//! an error: the estimator returns a defined, unconverged estimate instead.

use thiserror::Error;

/// Errors produced when the engine is given invalid input.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// An item difficulty fell outside the external 0–100 scale.
    #[error("item difficulty {0} is outside the valid range [0, 100]")]
    DifficultyOutOfRange(f64),

    /// Ability estimation was requested with no responses.
    #[error("cannot estimate ability from an empty response list")]
    EmptyResponseSet,

    /// A discrimination score group contained a value other than 0 or 1.
    #[error("discrimination scores must be 0 or 1, got {0}")]
    NonBinaryScore(f64),

    /// A discrimination score group was empty.
    #[error("{0} score group is empty")]
    EmptyScoreGroup(&'static str),

    /// The efficiency calculator was given a non-positive question count.
    #[error("{name} question count must be positive, got {value}")]
    InvalidQuestionCount { name: &'static str, value: i64 },
}

impl EngineError {
    /// Returns `true` if this error indicates a value outside its domain
    /// (as opposed to a structurally empty input).
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            EngineError::DifficultyOutOfRange(_)
                | EngineError::NonBinaryScore(_)
                | EngineError::InvalidQuestionCount { .. }
        )
    }
}

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
