//! Core data model types for adaptest.
//!
//! These are the values exchanged across the engine boundary. Everything
//! here lives on the external 0–100 difficulty/ability scale except
//! [`AbilityEstimate::theta`], which is explicitly documented as a logit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One answered item in a learner's session history.
///
/// Owned by the caller's session state and supplied by value on every
/// estimation call; the engine holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Item difficulty on the external 0–100 scale.
    pub difficulty: f64,
    /// Whether the learner answered correctly.
    pub correct: bool,
    /// Item discrimination, reserved for future 2PL scoring. The 1PL
    /// estimator never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discrimination: Option<f64>,
}

impl Response {
    pub fn new(difficulty: f64, correct: bool) -> Self {
        Self {
            difficulty,
            correct,
            discrimination: None,
        }
    }
}

/// Output of one ability-estimation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityEstimate {
    /// Estimated ability on the internal logit scale, clamped to [-5, 5].
    pub theta: f64,
    /// Standard error of the estimate (logit scale), always >= 0.
    pub standard_error: f64,
    /// Width of the 95% confidence interval on the 0–100 scale.
    pub confidence_interval: f64,
    /// Newton-Raphson iterations performed (1..=max_iterations).
    pub iterations: u32,
    /// Whether the update step shrank below tolerance. Check this before
    /// trusting any precision claim about `theta`.
    pub converged: bool,
}

/// Result of analyzing how well an item separates strong from weak learners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscriminationResult {
    /// Top-group correct rate minus bottom-group correct rate.
    pub discrimination_index: f64,
    /// Correct rate in the top ability group (0..1).
    pub top_group_correct_rate: f64,
    /// Correct rate in the bottom ability group (0..1).
    pub bottom_group_correct_rate: f64,
    /// Combined size of both groups.
    pub sample_size: usize,
    /// True iff the combined sample meets the validity threshold.
    pub is_statistically_valid: bool,
}

/// Decision on whether an adaptive session can stop early.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyStoppingVerdict {
    pub should_stop: bool,
    /// Human-readable rationale for the verdict.
    pub reason: String,
    pub questions_asked: u32,
    /// Confidence-interval width the verdict was based on (0–100 scale).
    pub confidence_interval: f64,
    pub minimum_questions_reached: bool,
}

/// Comparison of an adaptive session against a fixed-length baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyReport {
    pub adaptive_questions: u32,
    pub baseline_questions: u32,
    /// Questions avoided relative to the baseline, never negative.
    pub questions_saved: u32,
    /// Percentage of the baseline avoided, rounded to the nearest integer.
    pub efficiency_score: u32,
    /// Estimated learner time saved in minutes.
    pub estimated_minutes_saved: f64,
}

/// Qualitative ability band derived from theta, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeLevel {
    Novice,
    Developing,
    Intermediate,
    Advanced,
    Expert,
}

impl KnowledgeLevel {
    /// Map a theta value (logit scale) to its display band.
    pub fn from_theta(theta: f64) -> Self {
        if theta >= 2.0 {
            KnowledgeLevel::Expert
        } else if theta >= 1.0 {
            KnowledgeLevel::Advanced
        } else if theta >= 0.0 {
            KnowledgeLevel::Intermediate
        } else if theta >= -1.0 {
            KnowledgeLevel::Developing
        } else {
            KnowledgeLevel::Novice
        }
    }
}

impl fmt::Display for KnowledgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnowledgeLevel::Novice => write!(f, "novice"),
            KnowledgeLevel::Developing => write!(f, "developing"),
            KnowledgeLevel::Intermediate => write!(f, "intermediate"),
            KnowledgeLevel::Advanced => write!(f, "advanced"),
            KnowledgeLevel::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for KnowledgeLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "novice" => Ok(KnowledgeLevel::Novice),
            "developing" => Ok(KnowledgeLevel::Developing),
            "intermediate" => Ok(KnowledgeLevel::Intermediate),
            "advanced" => Ok(KnowledgeLevel::Advanced),
            "expert" => Ok(KnowledgeLevel::Expert),
            other => Err(format!("unknown knowledge level: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_level_bands() {
        assert_eq!(KnowledgeLevel::from_theta(2.5), KnowledgeLevel::Expert);
        assert_eq!(KnowledgeLevel::from_theta(2.0), KnowledgeLevel::Expert);
        assert_eq!(KnowledgeLevel::from_theta(1.5), KnowledgeLevel::Advanced);
        assert_eq!(KnowledgeLevel::from_theta(0.0), KnowledgeLevel::Intermediate);
        assert_eq!(KnowledgeLevel::from_theta(-0.5), KnowledgeLevel::Developing);
        assert_eq!(KnowledgeLevel::from_theta(-1.0), KnowledgeLevel::Developing);
        assert_eq!(KnowledgeLevel::from_theta(-2.7), KnowledgeLevel::Novice);
    }

    #[test]
    fn knowledge_level_display_and_parse() {
        assert_eq!(KnowledgeLevel::Expert.to_string(), "expert");
        assert_eq!(
            "Intermediate".parse::<KnowledgeLevel>().unwrap(),
            KnowledgeLevel::Intermediate
        );
        assert!("guru".parse::<KnowledgeLevel>().is_err());
    }

    #[test]
    fn knowledge_levels_are_ordered() {
        assert!(KnowledgeLevel::Novice < KnowledgeLevel::Developing);
        assert!(KnowledgeLevel::Advanced < KnowledgeLevel::Expert);
    }

    #[test]
    fn response_serde_roundtrip() {
        let response = Response {
            difficulty: 62.5,
            correct: true,
            discrimination: Some(0.35),
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn response_discrimination_defaults_to_none() {
        let response: Response =
            serde_json::from_str(r#"{"difficulty": 40.0, "correct": false}"#).unwrap();
        assert_eq!(response.discrimination, None);
    }
}
