//! Early-stopping decision for adaptive sessions.
//!
//! A pure function over the current confidence interval and question
//! count. All session state (the running history, the counter) lives in
//! the caller; every call re-evaluates from scratch.

use crate::config::EngineConfig;
use crate::model::EarlyStoppingVerdict;

/// Decide whether an adaptive session may stop.
///
/// Stops iff the minimum question count is reached AND the confidence
/// interval is below the threshold. When both conditions are unmet the
/// reason reports the question-count deficit: without enough questions the
/// CI estimate itself is not worth trusting. That ordering is a behavioral
/// contract, not a statistical claim.
pub fn evaluate_early_stopping(
    confidence_interval: f64,
    questions_asked: u32,
    config: &EngineConfig,
) -> EarlyStoppingVerdict {
    let minimum_questions_reached = questions_asked >= config.min_questions;
    let precise_enough = confidence_interval < config.ci_threshold;
    let should_stop = minimum_questions_reached && precise_enough;

    let reason = if should_stop {
        format!(
            "confidence interval {confidence_interval:.1} is below {:.1} after {questions_asked} questions",
            config.ci_threshold
        )
    } else if !minimum_questions_reached {
        format!(
            "only {questions_asked} of the minimum {} questions answered",
            config.min_questions
        )
    } else {
        format!(
            "confidence interval {confidence_interval:.1} has not narrowed below {:.1}",
            config.ci_threshold
        )
    };

    EarlyStoppingVerdict {
        should_stop,
        reason,
        questions_asked,
        confidence_interval,
        minimum_questions_reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn never_stops_below_minimum_questions() {
        for questions in 0..3 {
            // Even an implausibly tight interval must not stop the session.
            let verdict = evaluate_early_stopping(0.1, questions, &config());
            assert!(!verdict.should_stop, "stopped at {questions} questions");
            assert!(!verdict.minimum_questions_reached);
        }
    }

    #[test]
    fn stops_when_precise_and_past_minimum() {
        let verdict = evaluate_early_stopping(8.0, 5, &config());
        assert!(verdict.should_stop);
        assert!(verdict.minimum_questions_reached);
        assert_eq!(verdict.questions_asked, 5);
        assert_eq!(verdict.confidence_interval, 8.0);
    }

    #[test]
    fn continues_when_interval_is_too_wide() {
        let verdict = evaluate_early_stopping(25.0, 6, &config());
        assert!(!verdict.should_stop);
        assert!(verdict.reason.contains("not narrowed"));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!evaluate_early_stopping(10.0, 5, &config()).should_stop);
        assert!(evaluate_early_stopping(9.999, 5, &config()).should_stop);
    }

    #[test]
    fn question_deficit_takes_precedence_in_the_reason() {
        // Both conditions unmet: the reason talks about question count.
        let verdict = evaluate_early_stopping(30.0, 1, &config());
        assert!(!verdict.should_stop);
        assert!(verdict.reason.contains("minimum"));
        assert!(!verdict.reason.contains("narrowed"));
    }

    #[test]
    fn honors_configured_thresholds() {
        let config = EngineConfig {
            min_questions: 5,
            ci_threshold: 4.0,
            ..EngineConfig::default()
        };
        assert!(!evaluate_early_stopping(3.0, 4, &config).should_stop);
        assert!(evaluate_early_stopping(3.0, 5, &config).should_stop);
        assert!(!evaluate_early_stopping(4.5, 5, &config).should_stop);
    }
}
