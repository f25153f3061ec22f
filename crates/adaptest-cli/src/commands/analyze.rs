//! The `adaptest analyze` command.

use std::path::PathBuf;

use anyhow::Result;

use adaptest_core::config::load_config_from;
use adaptest_core::discrimination::{analyze_discrimination, DiscriminationBand};

pub fn execute(top: String, bottom: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let top_scores = parse_scores(&top)?;
    let bottom_scores = parse_scores(&bottom)?;

    let result = analyze_discrimination(&top_scores, &bottom_scores, &config)?;
    let band = DiscriminationBand::from_index(result.discrimination_index);

    println!("Discrimination index: {:.2} ({band})", result.discrimination_index);
    println!(
        "Top group: {:.0}% correct ({} learners)",
        result.top_group_correct_rate * 100.0,
        top_scores.len()
    );
    println!(
        "Bottom group: {:.0}% correct ({} learners)",
        result.bottom_group_correct_rate * 100.0,
        bottom_scores.len()
    );

    if !result.is_statistically_valid {
        println!(
            "Note: combined sample of {} is below the validity threshold of {}; treat with caution.",
            result.sample_size, config.discrimination_validity_threshold
        );
    }
    if band.needs_review() {
        println!("This item separates poorly and should be reviewed.");
    }

    Ok(())
}

fn parse_scores(csv: &str) -> Result<Vec<f64>> {
    csv.split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("invalid score: '{}'", s.trim()))
        })
        .collect()
}
