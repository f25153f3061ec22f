//! The `adaptest init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create adaptest.toml
    if std::path::Path::new("adaptest.toml").exists() {
        println!("adaptest.toml already exists, skipping.");
    } else {
        std::fs::write("adaptest.toml", SAMPLE_CONFIG)?;
        println!("Created adaptest.toml");
    }

    // Create example session
    std::fs::create_dir_all("sessions")?;
    let example_path = std::path::Path::new("sessions/example.toml");
    if example_path.exists() {
        println!("sessions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SESSION)?;
        println!("Created sessions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust thresholds in adaptest.toml if needed");
    println!("  2. Run: adaptest validate --session sessions/example.toml");
    println!("  3. Run: adaptest score --session sessions/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# adaptest configuration
#
# The defaults below are the calibrated values; the decision thresholds
# assume the linear 0-100 <-> logit scale mapping.

max_iterations = 10
convergence_tolerance = 0.01
ci_threshold = 10.0
min_questions = 3
baseline_questions = 15
minutes_per_question = 2.0
discrimination_validity_threshold = 20
"#;

const EXAMPLE_SESSION: &str = r#"[session]
id = "example"
learner = "learner-1"
description = "A short recorded session to get started"

[[responses]]
difficulty = 40.0
correct = true

[[responses]]
difficulty = 55.0
correct = true

[[responses]]
difficulty = 65.0
correct = false

[[responses]]
difficulty = 58.0
correct = true

[[responses]]
difficulty = 62.0
correct = false
"#;
