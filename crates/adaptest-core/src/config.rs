//! Engine configuration.
//!
//! All tuning constants of the scoring engine live here as named fields so
//! they can be adjusted from `adaptest.toml` without touching the
//! algorithms. The defaults are the calibrated values the decision
//! thresholds were tuned against; change them together or not at all.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tuning constants for ability estimation and test-session decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum Newton-Raphson iterations per estimation call.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Convergence tolerance on the theta update step (logit scale).
    #[serde(default = "default_convergence_tolerance")]
    pub convergence_tolerance: f64,
    /// Confidence-interval width below which a session may stop (0–100 scale).
    #[serde(default = "default_ci_threshold")]
    pub ci_threshold: f64,
    /// Minimum questions before early stopping is considered.
    #[serde(default = "default_min_questions")]
    pub min_questions: u32,
    /// Fixed-length baseline used for efficiency comparisons.
    #[serde(default = "default_baseline_questions")]
    pub baseline_questions: u32,
    /// Estimated minutes a learner spends per question.
    #[serde(default = "default_minutes_per_question")]
    pub minutes_per_question: f64,
    /// Combined sample size below which a discrimination index is flagged
    /// as statistically weak.
    #[serde(default = "default_discrimination_validity_threshold")]
    pub discrimination_validity_threshold: u32,
}

fn default_max_iterations() -> u32 {
    10
}
fn default_convergence_tolerance() -> f64 {
    0.01
}
fn default_ci_threshold() -> f64 {
    10.0
}
fn default_min_questions() -> u32 {
    3
}
fn default_baseline_questions() -> u32 {
    15
}
fn default_minutes_per_question() -> f64 {
    2.0
}
fn default_discrimination_validity_threshold() -> u32 {
    20
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            convergence_tolerance: default_convergence_tolerance(),
            ci_threshold: default_ci_threshold(),
            min_questions: default_min_questions(),
            baseline_questions: default_baseline_questions(),
            minutes_per_question: default_minutes_per_question(),
            discrimination_validity_threshold: default_discrimination_validity_threshold(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `adaptest.toml` in the current directory
/// 2. `~/.config/adaptest/config.toml`
///
/// Missing files fall back to [`EngineConfig::default`].
pub fn load_config() -> Result<EngineConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<EngineConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("adaptest.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = config_dir() {
            let global = dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<EngineConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("adaptest"))
}
