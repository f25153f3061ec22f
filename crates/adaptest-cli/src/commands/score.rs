//! The `adaptest score` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use adaptest_core::config::load_config_from;
use adaptest_core::parser;
use adaptest_core::report::AssessmentReport;
use adaptest_core::session::replay_session;

pub fn execute(
    session_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let sessions = if session_path.is_dir() {
        parser::load_session_directory(&session_path)?
    } else {
        vec![parser::parse_session(&session_path)?]
    };
    anyhow::ensure!(!sessions.is_empty(), "no session files found");

    let mut reports = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let replay = replay_session(&session.responses, &config)
            .map_err(|e| anyhow::anyhow!("session '{}': {e}", session.id))?;
        reports.push(AssessmentReport::new(session, replay));
    }

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        "markdown" | "md" => {
            for report in &reports {
                println!("{}", report.to_markdown());
            }
        }
        _ => {
            print_summary(&reports);
        }
    }

    if let Some(output_dir) = output {
        std::fs::create_dir_all(&output_dir)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        for report in &reports {
            let path = output_dir.join(format!("{}-{timestamp}.json", report.session.id));
            report.save_json(&path)?;
            eprintln!("Report saved to: {}", path.display());
        }
    }

    Ok(())
}

fn print_summary(reports: &[AssessmentReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        "Session",
        "Ability",
        "Level",
        "CI width",
        "Converged",
        "Questions",
        "Efficiency",
    ]);

    for report in reports {
        table.add_row(vec![
            Cell::new(&report.session.id),
            Cell::new(format!(
                "{:.1} (theta {:.2})",
                report.ability_percentage, report.estimate.theta
            )),
            Cell::new(report.knowledge_level.to_string()),
            Cell::new(format!("{:.1}", report.estimate.confidence_interval)),
            Cell::new(if report.estimate.converged { "yes" } else { "no" }),
            Cell::new(report.session.response_count.to_string()),
            Cell::new(format!("{}%", report.efficiency.efficiency_score)),
        ]);
    }

    println!("{table}");
}
