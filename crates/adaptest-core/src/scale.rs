//! Conversions between the external 0–100 scale and the internal logit scale.
//!
//! The mapping is deliberately linear: `0 -> -3`, `50 -> 0`, `100 -> +3`.
//! It is a presentation convenience, not a probability transform, and the
//! decision thresholds elsewhere in the engine (CI < 10 points, knowledge
//! bands) are calibrated against exactly this map. Keep it linear.

use crate::error::{EngineError, Result};

/// Half-width of the external scale.
const EXTERNAL_HALF_RANGE: f64 = 50.0;
/// Half-width of the internal logit scale the external scale maps onto.
const LOGIT_HALF_RANGE: f64 = 3.0;

/// Map an external difficulty (0–100) onto the logit scale (-3..+3).
pub fn difficulty_to_logit(difficulty: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&difficulty) {
        return Err(EngineError::DifficultyOutOfRange(difficulty));
    }
    Ok((difficulty - EXTERNAL_HALF_RANGE) / EXTERNAL_HALF_RANGE * LOGIT_HALF_RANGE)
}

/// Map a theta value back onto the external 0–100 scale.
///
/// No clamping: theta is already clamped by the estimator, and values
/// outside [-3, 3] legitimately map outside [0, 100].
pub fn theta_to_percentage(theta: f64) -> f64 {
    theta / LOGIT_HALF_RANGE * EXTERNAL_HALF_RANGE + EXTERNAL_HALF_RANGE
}

/// Rescale a logit-space interval width onto the external scale.
///
/// Valid only because the forward map is linear; a width has no meaningful
/// offset, so only the slope applies.
pub fn ci_to_percentage(ci_logit: f64) -> f64 {
    ci_logit * EXTERNAL_HALF_RANGE / LOGIT_HALF_RANGE
}
