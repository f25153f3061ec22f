//! Newton-Raphson maximum-likelihood ability estimation.
//!
//! The central routine of the engine: given a learner's response history,
//! find the theta that maximizes the Rasch likelihood, together with its
//! standard error and a 95% confidence interval on the external scale.

use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::model::{AbilityEstimate, Response};
use crate::rasch::log_likelihood_derivatives;
use crate::scale;

/// Hard bounds on theta. Wider than the -3..+3 display range so extreme
/// all-correct / all-incorrect histories still get a finite, orderable
/// estimate.
pub const THETA_MIN: f64 = -5.0;
pub const THETA_MAX: f64 = 5.0;

/// Below this much curvature the update step is numerically meaningless,
/// so the loop bails out without claiming convergence.
const MIN_INFORMATION: f64 = 1e-10;

/// Z value for a 95% confidence interval.
const Z_95: f64 = 1.96;

/// Estimate a learner's ability from their response history.
///
/// Rejects empty histories and out-of-range difficulties before any
/// arithmetic. Always returns a defined estimate with `theta` clamped to
/// [`THETA_MIN`]..[`THETA_MAX`]; callers must check
/// [`AbilityEstimate::converged`] before trusting precision claims.
pub fn estimate_ability(responses: &[Response], config: &EngineConfig) -> Result<AbilityEstimate> {
    if responses.is_empty() {
        return Err(EngineError::EmptyResponseSet);
    }

    let logit_responses: Vec<(f64, bool)> = responses
        .iter()
        .map(|r| Ok((scale::difficulty_to_logit(r.difficulty)?, r.correct)))
        .collect::<Result<_>>()?;

    let mut theta = 0.0;
    let mut iterations = 0;
    let mut converged = false;

    for iteration in 1..=config.max_iterations {
        iterations = iteration;
        let (first, second) = log_likelihood_derivatives(theta, &logit_responses);

        if second.abs() < MIN_INFORMATION {
            debug!(iteration, theta, "information too low, stopping unconverged");
            break;
        }

        let delta = first / second;
        theta = (theta - delta).clamp(THETA_MIN, THETA_MAX);
        trace!(iteration, theta, delta, "newton-raphson step");

        if delta.abs() < config.convergence_tolerance {
            converged = true;
            debug!(iteration, theta, "converged");
            break;
        }
    }

    let (_, second) = log_likelihood_derivatives(theta, &logit_responses);
    let information = -second;
    let standard_error = if information > 0.0 {
        (1.0 / information).sqrt()
    } else {
        warn!(theta, "non-positive information, falling back to SE = 1.0");
        1.0
    };

    let confidence_interval = scale::ci_to_percentage(Z_95 * standard_error);

    Ok(AbilityEstimate {
        theta,
        standard_error,
        confidence_interval,
        iterations,
        converged,
    })
}
