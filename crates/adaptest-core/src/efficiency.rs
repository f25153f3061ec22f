//! Post-hoc efficiency reporting for adaptive sessions.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::model::EfficiencyReport;

/// Compare an adaptive session's question count against a fixed-length
/// baseline.
///
/// An adaptive run longer than the baseline reports zero savings rather
/// than a negative number. Both counts must be positive.
pub fn efficiency_gain(
    adaptive_questions: u32,
    baseline_questions: u32,
    config: &EngineConfig,
) -> Result<EfficiencyReport> {
    if adaptive_questions == 0 {
        return Err(EngineError::InvalidQuestionCount {
            name: "adaptive",
            value: adaptive_questions as i64,
        });
    }
    if baseline_questions == 0 {
        return Err(EngineError::InvalidQuestionCount {
            name: "baseline",
            value: baseline_questions as i64,
        });
    }

    let questions_saved = baseline_questions.saturating_sub(adaptive_questions);
    let efficiency_score =
        (questions_saved as f64 / baseline_questions as f64 * 100.0).round() as u32;

    Ok(EfficiencyReport {
        adaptive_questions,
        baseline_questions,
        questions_saved,
        efficiency_score,
        estimated_minutes_saved: questions_saved as f64 * config.minutes_per_question,
    })
}
