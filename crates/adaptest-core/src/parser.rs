//! TOML session-file parser.
//!
//! Loads recorded response histories from TOML files and directories so
//! sessions captured by a delivery system can be scored offline. The
//! engine itself never performs I/O during estimation; parsing happens
//! strictly before any math.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Response;

/// A recorded assessment session: metadata plus the ordered response
/// history.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique identifier for this session.
    pub id: String,
    /// Learner identifier, if the recording system supplied one.
    pub learner: Option<String>,
    /// Free-form description.
    pub description: String,
    /// Responses in the order they were answered.
    pub responses: Vec<Response>,
}

/// Intermediate TOML structure for parsing session files.
#[derive(Debug, Deserialize)]
struct TomlSessionFile {
    session: TomlSessionHeader,
    #[serde(default)]
    responses: Vec<TomlResponse>,
}

#[derive(Debug, Deserialize)]
struct TomlSessionHeader {
    id: String,
    #[serde(default)]
    learner: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlResponse {
    difficulty: f64,
    correct: bool,
    #[serde(default)]
    discrimination: Option<f64>,
}

/// Parse a single TOML file into a `Session`.
pub fn parse_session(path: &Path) -> Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file: {}", path.display()))?;

    parse_session_str(&content, path)
}

/// Parse a TOML string into a `Session` (useful for testing).
pub fn parse_session_str(content: &str, source_path: &Path) -> Result<Session> {
    let parsed: TomlSessionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let responses = parsed
        .responses
        .into_iter()
        .map(|r| Response {
            difficulty: r.difficulty,
            correct: r.correct,
            discrimination: r.discrimination,
        })
        .collect();

    Ok(Session {
        id: parsed.session.id,
        learner: parsed.session.learner,
        description: parsed.session.description,
        responses,
    })
}

/// Recursively load all `.toml` session files from a directory.
pub fn load_session_directory(dir: &Path) -> Result<Vec<Session>> {
    let mut sessions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sessions.extend(load_session_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_session(&path) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sessions)
}

/// A warning from session validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based index of the offending response, if applicable.
    pub response_index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a session for issues that would fail or distort scoring.
pub fn validate_session(session: &Session) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if session.responses.is_empty() {
        warnings.push(ValidationWarning {
            response_index: None,
            message: "session has no responses; ability cannot be estimated".into(),
        });
    }

    for (index, response) in session.responses.iter().enumerate() {
        if !(0.0..=100.0).contains(&response.difficulty) {
            warnings.push(ValidationWarning {
                response_index: Some(index),
                message: format!(
                    "difficulty {} is outside [0, 100] and will be rejected at scoring time",
                    response.difficulty
                ),
            });
        }
        if let Some(d) = response.discrimination {
            if !d.is_finite() {
                warnings.push(ValidationWarning {
                    response_index: Some(index),
                    message: format!("discrimination {d} is not a finite number"),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[session]
id = "anatomy-midterm"
learner = "student-42"
description = "Recorded midterm run"

[[responses]]
difficulty = 45.0
correct = true

[[responses]]
difficulty = 60.0
correct = false
discrimination = 0.35

[[responses]]
difficulty = 52.5
correct = true
"#;

    #[test]
    fn parse_valid_toml() {
        let session = parse_session_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(session.id, "anatomy-midterm");
        assert_eq!(session.learner.as_deref(), Some("student-42"));
        assert_eq!(session.responses.len(), 3);
        assert_eq!(session.responses[0].difficulty, 45.0);
        assert!(session.responses[0].correct);
        assert_eq!(session.responses[1].discrimination, Some(0.35));
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[session]
id = "minimal"

[[responses]]
difficulty = 50.0
correct = true
"#;
        let session = parse_session_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(session.learner, None);
        assert_eq!(session.description, "");
        assert_eq!(session.responses[0].discrimination, None);
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_session_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_empty_session() {
        let toml = r#"
[session]
id = "empty"
"#;
        let session = parse_session_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_session(&session);
        assert!(warnings.iter().any(|w| w.message.contains("no responses")));
    }

    #[test]
    fn validate_out_of_range_difficulty() {
        let toml = r#"
[session]
id = "bad-difficulty"

[[responses]]
difficulty = 150.0
correct = true
"#;
        let session = parse_session_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_session(&session);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].response_index, Some(0));
        assert!(warnings[0].message.contains("outside [0, 100]"));
    }

    #[test]
    fn validate_clean_session_has_no_warnings() {
        let session = parse_session_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert!(validate_session(&session).is_empty());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sessions = load_session_directory(dir.path()).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "anatomy-midterm");
    }
}
