//! The `adaptest replay` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use adaptest_core::config::load_config_from;
use adaptest_core::parser;
use adaptest_core::session::replay_session;

pub fn execute(session_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let session = parser::parse_session(&session_path)?;

    let replay = replay_session(&session.responses, &config)
        .map_err(|e| anyhow::anyhow!("session '{}': {e}", session.id))?;

    println!("Session: {} ({} responses)", session.id, session.responses.len());
    if let Some(learner) = &session.learner {
        println!("Learner: {learner}");
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Q#", "Theta", "CI width", "Converged", "Decision"]);

    for step in &replay.steps {
        let decision = if step.verdict.should_stop {
            "stop"
        } else {
            "continue"
        };
        table.add_row(vec![
            Cell::new(step.question_number.to_string()),
            Cell::new(format!("{:.3}", step.estimate.theta)),
            Cell::new(format!("{:.1}", step.estimate.confidence_interval)),
            Cell::new(if step.estimate.converged { "yes" } else { "no" }),
            Cell::new(decision),
        ]);
    }
    println!("{table}");

    println!();
    match replay.stopped_after {
        Some(n) => println!("Adaptive run would have stopped after question {n}."),
        None => println!("The stopping rule never fired; all questions were needed."),
    }
    println!(
        "Final ability: theta {:.2} ({}), CI width {:.1} points",
        replay.final_estimate.theta,
        replay.knowledge_level,
        replay.final_estimate.confidence_interval
    );
    println!(
        "Efficiency vs {}-question baseline: {}% ({} questions saved, ~{:.0} min)",
        replay.efficiency.baseline_questions,
        replay.efficiency.efficiency_score,
        replay.efficiency.questions_saved,
        replay.efficiency.estimated_minutes_saved
    );

    Ok(())
}
