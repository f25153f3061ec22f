//! Item discrimination analysis.
//!
//! Measures how well a single item separates strong from weak learners by
//! comparing correct rates between the top and bottom 27% ability groups.
//! Used during item calibration, independent of the ability estimator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::model::DiscriminationResult;

/// Qualitative interpretation of a discrimination index.
///
/// The thresholds are fixed conventions from classical test theory, not
/// derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscriminationBand {
    Excellent,
    Good,
    Acceptable,
    Marginal,
    /// Little or negative separation; the item should be reviewed.
    Poor,
}

impl DiscriminationBand {
    /// Classify a discrimination index into its interpretive band.
    pub fn from_index(index: f64) -> Self {
        if index >= 0.4 {
            DiscriminationBand::Excellent
        } else if index >= 0.3 {
            DiscriminationBand::Good
        } else if index >= 0.2 {
            DiscriminationBand::Acceptable
        } else if index >= 0.1 {
            DiscriminationBand::Marginal
        } else {
            DiscriminationBand::Poor
        }
    }

    /// Whether the item should be flagged for content review.
    pub fn needs_review(&self) -> bool {
        matches!(self, DiscriminationBand::Poor)
    }
}

impl fmt::Display for DiscriminationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscriminationBand::Excellent => write!(f, "excellent"),
            DiscriminationBand::Good => write!(f, "good"),
            DiscriminationBand::Acceptable => write!(f, "acceptable"),
            DiscriminationBand::Marginal => write!(f, "marginal"),
            DiscriminationBand::Poor => write!(f, "poor"),
        }
    }
}

/// Compute the discrimination index for one item from its top-group and
/// bottom-group binary scores.
///
/// Both groups must be non-empty and contain only 0.0 or 1.0 values.
/// A small combined sample is not an error; it is surfaced through
/// `is_statistically_valid` so the caller can caveat the result.
pub fn analyze_discrimination(
    top_scores: &[f64],
    bottom_scores: &[f64],
    config: &EngineConfig,
) -> Result<DiscriminationResult> {
    if top_scores.is_empty() {
        return Err(EngineError::EmptyScoreGroup("top"));
    }
    if bottom_scores.is_empty() {
        return Err(EngineError::EmptyScoreGroup("bottom"));
    }

    let top_rate = correct_rate(top_scores)?;
    let bottom_rate = correct_rate(bottom_scores)?;

    let sample_size = top_scores.len() + bottom_scores.len();

    Ok(DiscriminationResult {
        discrimination_index: top_rate - bottom_rate,
        top_group_correct_rate: top_rate,
        bottom_group_correct_rate: bottom_rate,
        sample_size,
        is_statistically_valid: sample_size >= config.discrimination_validity_threshold as usize,
    })
}

fn correct_rate(scores: &[f64]) -> Result<f64> {
    let mut correct = 0usize;
    for &score in scores {
        if score == 1.0 {
            correct += 1;
        } else if score != 0.0 {
            return Err(EngineError::NonBinaryScore(score));
        }
    }
    Ok(correct as f64 / scores.len() as f64)
}
