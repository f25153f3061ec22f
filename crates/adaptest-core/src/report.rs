//! Assessment report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AbilityEstimate, EfficiencyReport, KnowledgeLevel};
use crate::parser::Session;
use crate::scale;
use crate::session::{SessionReplay, StepRecord};

/// A complete scored-assessment report for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the scored session.
    pub session: SessionSummary,
    /// Ability estimate over the full response history.
    pub estimate: AbilityEstimate,
    /// Ability on the external 0–100 scale, for display alongside theta.
    pub ability_percentage: f64,
    /// Display band for the estimate.
    pub knowledge_level: KnowledgeLevel,
    /// Where an adaptive run would have stopped, if anywhere.
    pub stopped_after: Option<u32>,
    /// Savings relative to the fixed-length baseline.
    pub efficiency: EfficiencyReport,
    /// Per-question trace from the replay.
    pub steps: Vec<StepRecord>,
}

/// Summary of a session (without the full response list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub learner: Option<String>,
    pub response_count: usize,
}

impl AssessmentReport {
    /// Build a report from a parsed session and its replay.
    pub fn new(session: &Session, replay: SessionReplay) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            session: SessionSummary {
                id: session.id.clone(),
                learner: session.learner.clone(),
                response_count: session.responses.len(),
            },
            ability_percentage: scale::theta_to_percentage(replay.final_estimate.theta),
            estimate: replay.final_estimate,
            knowledge_level: replay.knowledge_level,
            stopped_after: replay.stopped_after,
            efficiency: replay.efficiency,
            steps: replay.steps,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## Assessment: {}\n\n", self.session.id));
        if let Some(learner) = &self.session.learner {
            md.push_str(&format!("Learner: {learner}\n\n"));
        }

        md.push_str("| Metric | Value |\n");
        md.push_str("|--------|-------|\n");
        md.push_str(&format!(
            "| Ability | {:.1} / 100 (theta {:.2}) |\n",
            self.ability_percentage, self.estimate.theta
        ));
        md.push_str(&format!("| Knowledge level | {} |\n", self.knowledge_level));
        md.push_str(&format!(
            "| 95% CI width | {:.1} points |\n",
            self.estimate.confidence_interval
        ));
        md.push_str(&format!(
            "| Converged | {} ({} iterations) |\n",
            if self.estimate.converged { "yes" } else { "no" },
            self.estimate.iterations
        ));
        md.push_str(&format!(
            "| Questions | {} answered |\n",
            self.session.response_count
        ));
        match self.stopped_after {
            Some(n) => md.push_str(&format!("| Adaptive stop | after question {n} |\n")),
            None => md.push_str("| Adaptive stop | never triggered |\n"),
        }
        md.push_str(&format!(
            "| Efficiency | {}% ({} questions, ~{:.0} min saved) |\n",
            self.efficiency.efficiency_score,
            self.efficiency.questions_saved,
            self.efficiency.estimated_minutes_saved
        ));

        md
    }
}
