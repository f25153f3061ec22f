//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn adaptest() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("adaptest").unwrap()
}

const SESSION_TOML: &str = r#"
[session]
id = "cli-test"
learner = "learner-9"

[[responses]]
difficulty = 40.0
correct = true

[[responses]]
difficulty = 55.0
correct = false

[[responses]]
difficulty = 50.0
correct = true

[[responses]]
difficulty = 60.0
correct = false
"#;

fn write_session(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("session.toml");
    std::fs::write(&path, SESSION_TOML).unwrap();
    path
}

#[test]
fn help_output() {
    adaptest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rasch adaptive-assessment scoring engine",
        ));
}

#[test]
fn version_output() {
    adaptest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("adaptest"));
}

#[test]
fn validate_valid_session() {
    let dir = TempDir::new().unwrap();
    let path = write_session(&dir);

    adaptest()
        .arg("validate")
        .arg("--session")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 responses"))
        .stdout(predicate::str::contains("All sessions valid"));
}

#[test]
fn validate_warns_on_bad_difficulty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        r#"
[session]
id = "bad"

[[responses]]
difficulty = 150.0
correct = true
"#,
    )
    .unwrap();

    adaptest()
        .arg("validate")
        .arg("--session")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    adaptest()
        .arg("validate")
        .arg("--session")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn score_prints_summary_table() {
    let dir = TempDir::new().unwrap();
    let path = write_session(&dir);

    adaptest()
        .arg("score")
        .arg("--session")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cli-test"))
        .stdout(predicate::str::contains("Ability"));
}

#[test]
fn score_json_format() {
    let dir = TempDir::new().unwrap();
    let path = write_session(&dir);

    adaptest()
        .arg("score")
        .arg("--session")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"theta\""))
        .stdout(predicate::str::contains("\"knowledge_level\""));
}

#[test]
fn score_writes_reports() {
    let dir = TempDir::new().unwrap();
    let path = write_session(&dir);
    let output = dir.path().join("reports");

    adaptest()
        .arg("score")
        .arg("--session")
        .arg(&path)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let written: Vec<_> = std::fs::read_dir(&output).unwrap().collect();
    assert_eq!(written.len(), 1);
}

#[test]
fn score_rejects_out_of_range_difficulty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        r#"
[session]
id = "bad"

[[responses]]
difficulty = 150.0
correct = true
"#,
    )
    .unwrap();

    adaptest()
        .arg("score")
        .arg("--session")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the valid range"));
}

#[test]
fn replay_shows_stopping_trace() {
    let dir = TempDir::new().unwrap();
    let path = write_session(&dir);

    adaptest()
        .arg("replay")
        .arg("--session")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Final ability"))
        .stdout(predicate::str::contains("baseline"));
}

#[test]
fn analyze_reports_index_and_band() {
    adaptest()
        .arg("analyze")
        .arg("--top")
        .arg("1,1,1,1")
        .arg("--bottom")
        .arg("0,0,0,0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discrimination index: 1.00"))
        .stdout(predicate::str::contains("excellent"))
        .stdout(predicate::str::contains("below the validity threshold"));
}

#[test]
fn analyze_rejects_non_binary_scores() {
    adaptest()
        .arg("analyze")
        .arg("--top")
        .arg("1,2")
        .arg("--bottom")
        .arg("0,0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be 0 or 1"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    adaptest()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created adaptest.toml"))
        .stdout(predicate::str::contains("Created sessions/example.toml"));

    assert!(dir.path().join("adaptest.toml").exists());
    assert!(dir.path().join("sessions/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    adaptest()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    adaptest()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_scores_cleanly() {
    let dir = TempDir::new().unwrap();

    adaptest().current_dir(dir.path()).arg("init").assert().success();

    adaptest()
        .current_dir(dir.path())
        .arg("score")
        .arg("--session")
        .arg("sessions/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("example"));
}
