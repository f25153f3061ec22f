//! Adaptive-session replay.
//!
//! Re-runs the estimator over each prefix of a recorded response history,
//! applying the early-stopping rule after every answer. This reproduces
//! the decision sequence a live adaptive session would have seen, without
//! any live session state: the replay is as pure as the estimator itself.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::efficiency::efficiency_gain;
use crate::error::Result;
use crate::estimator::estimate_ability;
use crate::model::{
    AbilityEstimate, EarlyStoppingVerdict, EfficiencyReport, KnowledgeLevel, Response,
};
use crate::stopping::evaluate_early_stopping;

/// The engine's view of one answered question during a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// One-based question number.
    pub question_number: u32,
    /// Ability estimate over the history up to and including this answer.
    pub estimate: AbilityEstimate,
    /// Stop/continue decision at this point.
    pub verdict: EarlyStoppingVerdict,
}

/// Result of replaying a full recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReplay {
    /// Per-question trace, one entry per recorded response.
    pub steps: Vec<StepRecord>,
    /// One-based question number at which an adaptive run would have
    /// stopped, if the stopping rule ever fired.
    pub stopped_after: Option<u32>,
    /// Estimate over the complete recorded history.
    pub final_estimate: AbilityEstimate,
    /// Display band for the final estimate.
    pub knowledge_level: KnowledgeLevel,
    /// Savings relative to the configured fixed-length baseline, measured
    /// at the adaptive stop point (or the full history if none).
    pub efficiency: EfficiencyReport,
}

/// Replay a recorded response history through the estimator and the
/// early-stopping rule.
///
/// Fails on an empty history or any out-of-range difficulty, exactly as
/// [`estimate_ability`] does.
pub fn replay_session(responses: &[Response], config: &EngineConfig) -> Result<SessionReplay> {
    // Validates the whole history up front so a bad difficulty late in
    // the recording fails the replay instead of truncating it.
    let final_estimate = estimate_ability(responses, config)?;

    let mut steps = Vec::with_capacity(responses.len());
    let mut stopped_after = None;

    for count in 1..=responses.len() {
        let estimate = estimate_ability(&responses[..count], config)?;
        let verdict =
            evaluate_early_stopping(estimate.confidence_interval, count as u32, config);

        if verdict.should_stop && stopped_after.is_none() {
            debug!(question = count, theta = estimate.theta, "stopping rule fired");
            stopped_after = Some(count as u32);
        }

        steps.push(StepRecord {
            question_number: count as u32,
            estimate,
            verdict,
        });
    }

    let questions_used = stopped_after.unwrap_or(responses.len() as u32);
    let efficiency = efficiency_gain(questions_used, config.baseline_questions, config)?;

    Ok(SessionReplay {
        steps,
        stopped_after,
        final_estimate,
        knowledge_level: KnowledgeLevel::from_theta(final_estimate.theta),
        efficiency,
    })
}
