use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SYLLABUS: &str = r#"[
  {
    "title": "Algebra",
    "chapters": [
      {
        "title": "Equations",
        "topics": [{"title": "Linear"}, {"title": "Quadratic"}, {"title": "Cubic"}]
      }
    ]
  }
]"#;

const SCOPE_ARGS: [&str; 10] = [
    "--school", "1", "--class", "7", "--section", "2", "--subject", "11", "--year", "2024",
];

/// Helper function to create a Command with --no-color flag for testing
fn pacer_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pacer").expect("Failed to find pacer binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Registers a teacher, a two-week academic year and one period per weekday,
/// and writes the syllabus file. Returns the database and syllabus paths.
fn setup_school(temp_dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let db_path = temp_dir.path().join("cli_test.db");
    let syllabus_path = temp_dir.path().join("syllabus.json");
    fs::write(&syllabus_path, SYLLABUS).expect("Failed to write syllabus");

    pacer_cmd(&db_path)
        .args(["school", "teacher", "--school", "1", "--id", "5", "Asha Rao"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered teacher with ID: 5"));

    pacer_cmd(&db_path)
        .args([
            "school", "year", "--school", "1", "--id", "2024", "--start", "2024-09-01", "--end",
            "2024-09-13",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set academic year with ID: 2024"));

    for day in ["mon", "tue", "wed", "thu", "fri"] {
        pacer_cmd(&db_path)
            .args([
                "school", "period", "--school", "1", "--class", "7", "--section", "2",
                "--subject", "11", "--day", day, "--order", "1",
            ])
            .assert()
            .success();
    }

    (db_path, syllabus_path)
}

#[test]
fn test_cli_preview_shows_schedule_table() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    pacer_cmd(&db_path)
        .arg("preview")
        .args(SCOPE_ARGS)
        .args(["--start", "2024-09-02", "--syllabus"])
        .arg(&syllabus_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Schedule preview for school 1"))
        .stdout(predicate::str::contains("✓ every task fits"))
        .stdout(predicate::str::contains("| 1 | Mon 2024-09-02 | P1 | Linear |"))
        .stdout(predicate::str::contains(
            "| 5 | Fri 2024-09-06 | P1 | *Unit Revision: Algebra* |",
        ));
}

#[test]
fn test_cli_commit_then_show() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    pacer_cmd(&db_path)
        .arg("commit")
        .args(SCOPE_ARGS)
        .args(["--start", "2024-09-02", "--teacher", "5", "--syllabus"])
        .arg(&syllabus_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed 5 lesson plans"));

    pacer_cmd(&db_path)
        .arg("show")
        .args(SCOPE_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Committed schedule for school 1"))
        .stdout(predicate::str::contains("Revision: Equations"));
}

#[test]
fn test_cli_show_without_commit() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("cli_test.db");

    pacer_cmd(&db_path)
        .arg("show")
        .args(SCOPE_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("No lesson plans committed"));
}

#[test]
fn test_cli_commit_unknown_teacher_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    pacer_cmd(&db_path)
        .arg("commit")
        .args(SCOPE_ARGS)
        .args(["--start", "2024-09-02", "--teacher", "99", "--syllabus"])
        .arg(&syllabus_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Teacher with ID 99 not found"));
}

#[test]
fn test_cli_commit_without_slots_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    // Section 3 has no timetable
    pacer_cmd(&db_path)
        .args([
            "commit", "--school", "1", "--class", "7", "--section", "3", "--subject", "11",
            "--year", "2024", "--start", "2024-09-02", "--teacher", "5", "--syllabus",
        ])
        .arg(&syllabus_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No available teaching slots"));
}

#[test]
fn test_cli_preview_json_output() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    let output = pacer_cmd(&db_path)
        .arg("--json")
        .arg("preview")
        .args(SCOPE_ARGS)
        .args(["--start", "2024-09-02", "--syllabus"])
        .arg(&syllabus_path)
        .output()
        .expect("Failed to run pacer");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["success"], true);
    assert_eq!(json["total_tasks"], 5);
    assert_eq!(json["scheduled_count"], 5);
    assert_eq!(json["first_date"], "2024-09-02");
    assert_eq!(json["schedule"][3]["kind"], "revision");
}

#[test]
fn test_cli_low_utilization_ceiling_skips_revisions() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    // Ten slots at 0.25 allow two planned lessons, less than the three topics
    pacer_cmd(&db_path)
        .args(["--json", "--utilization-ceiling", "0.25", "preview"])
        .args(SCOPE_ARGS)
        .args(["--start", "2024-09-02", "--syllabus"])
        .arg(&syllabus_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_tasks\": 3"));
}

#[test]
fn test_cli_rejects_invalid_ceiling() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("cli_test.db");

    pacer_cmd(&db_path)
        .args(["--utilization-ceiling", "1.5", "show"])
        .args(SCOPE_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("utilization_ceiling"));
}

#[test]
fn test_cli_strict_year_rejects_missing_year() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    pacer_cmd(&db_path)
        .args([
            "--strict-year", "preview", "--school", "1", "--class", "7", "--section", "2",
            "--subject", "11", "--year", "2025", "--start", "2024-09-02", "--syllabus",
        ])
        .arg(&syllabus_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Academic year 2025 is unavailable"));
}

#[test]
fn test_cli_invalid_syllabus_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("cli_test.db");
    let syllabus_path = temp_dir.path().join("broken.json");
    fs::write(&syllabus_path, "{ not json").expect("Failed to write syllabus");

    pacer_cmd(&db_path)
        .arg("preview")
        .args(SCOPE_ARGS)
        .args(["--start", "2024-09-02", "--syllabus"])
        .arg(&syllabus_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid syllabus JSON"));
}

#[test]
fn test_cli_clear_removes_plan() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, syllabus_path) = setup_school(&temp_dir);

    pacer_cmd(&db_path)
        .arg("commit")
        .args(SCOPE_ARGS)
        .args(["--start", "2024-09-02", "--teacher", "5", "--syllabus"])
        .arg(&syllabus_path)
        .assert()
        .success();

    pacer_cmd(&db_path)
        .arg("clear")
        .args(SCOPE_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 5 lesson plans"));
}
