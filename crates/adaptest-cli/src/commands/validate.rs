//! The `adaptest validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(session_path: PathBuf) -> Result<()> {
    let sessions = if session_path.is_dir() {
        adaptest_core::parser::load_session_directory(&session_path)?
    } else {
        vec![adaptest_core::parser::parse_session(&session_path)?]
    };

    let mut total_warnings = 0;

    for session in &sessions {
        println!(
            "Session: {} ({} responses)",
            session.id,
            session.responses.len()
        );

        let warnings = adaptest_core::parser::validate_session(session);
        for w in &warnings {
            let prefix = w
                .response_index
                .map(|i| format!("  [response {i}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All sessions valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
