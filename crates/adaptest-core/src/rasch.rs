//! The Rasch (one-parameter logistic) probability model and its
//! log-likelihood derivatives.
//!
//! Everything here operates on the internal logit scale. The derivative
//! sums are recomputed from scratch on each call; response lists in this
//! domain are short enough that incremental updates would buy nothing.

/// P(correct | theta, difficulty) under the Rasch model, both on the
/// logit scale.
///
/// Monotonically increasing in `theta`, decreasing in `difficulty`, and
/// exactly 0.5 when they are equal.
pub fn success_probability(theta: f64, difficulty: f64) -> f64 {
    let exponent = (theta - difficulty).exp();
    exponent / (1.0 + exponent)
}

/// First and second derivatives of the log-likelihood at `theta` over a
/// response set.
///
/// `responses` pairs each item's logit-scale difficulty with whether it
/// was answered correctly. Returns `(score, information_negated)`:
/// - score function: `sum(observed_i - P_i)`
/// - negated observed information: `-sum(P_i * (1 - P_i))`, always <= 0.
pub fn log_likelihood_derivatives(theta: f64, responses: &[(f64, bool)]) -> (f64, f64) {
    let mut first = 0.0;
    let mut second = 0.0;
    for &(difficulty, correct) in responses {
        let p = success_probability(theta, difficulty);
        let observed = if correct { 1.0 } else { 0.0 };
        first += observed - p;
        second -= p * (1.0 - p);
    }
    (first, second)
}
