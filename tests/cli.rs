use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "transactions": [
    {"id": 1, "type": "income", "category": "Salary", "amount": 2000, "date": "2025-01-01"},
    {"id": 2, "type": "expense", "category": "Food", "amount": "50.00", "transaction_date": "2025-01-05", "budget_id": 10},
    {"id": 3, "type": "Expense", "category": {"name": "Food"}, "amount": 35, "date": "2025-01-12T09:30:00Z", "budget_id": 10},
    {"id": 4, "type": "expense", "category": "Rent", "amount": 900, "date": "2025-02-01"},
    {"id": 5, "type": "refund", "category": "Food", "amount": 5, "date": "2025-01-13"}
  ],
  "budgets": [
    {"id": 10, "category": "Food", "allocated_amount": 100, "start_date": "2025-01-01", "end_date": "2025-01-31"}
  ],
  "goals": [
    {"id": 20, "title": "Car", "target_amount": 200, "deadline": "2025-03-01",
     "contributions": [{"id": 1, "amount": 100, "date": "2025-01-10"}, {"id": 2, "amount": 60, "contribution_date": "2025-02-10"}]}
  ]
}"#;

fn setup() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = temp_dir.path().join("snapshot.json");
    fs::write(&snapshot, SNAPSHOT).unwrap();
    (temp_dir, snapshot)
}

fn fintrack(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", temp_dir.path())
        .env_remove("FINTRACK_LOG")
        .env_remove("FINTRACK_SNAPSHOT");
    cmd
}

#[test]
fn test_notifications_budget_warning() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("notifications")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Warning]"))
        .stdout(predicate::str::contains("85% used"))
        .stdout(predicate::str::contains("Savings goal \"Car\" is almost there: 80% saved"));
}

#[test]
fn test_notifications_json() {
    let (temp_dir, snapshot) = setup();

    let output = fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["notifications", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["id"], "budget-10-warning");
    assert_eq!(value[1]["id"], "goal-20-almost");
}

#[test]
fn test_budget_report_with_currency() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--today", "2025-01-15", "--currency", "€", "report", "budgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€85.00"))
        .stdout(predicate::str::contains("On Track"));
}

#[test]
fn test_budget_behind_after_end_date() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--today", "2025-02-15", "report", "budgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Behind"));
}

#[test]
fn test_category_report_range() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["report", "categories", "--from", "2025-01-01", "--to", "2025-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$85.00"))
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn test_monthly_report() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["report", "monthly", "--by-year"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01"))
        .stdout(predicate::str::contains("2025-02"));
}

#[test]
fn test_summary_report() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--today", "2025-01-15", "report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2000.00"))
        .stdout(predicate::str::contains("$985.00"));
}

#[test]
fn test_goal_report_unknown_id() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["report", "goals", "--id", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Savings goal not found: 999"));
}

#[test]
fn test_invalid_range_rejected() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["report", "summary", "--from", "2025-02-01", "--to", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_export_json_to_file() {
    let (temp_dir, snapshot) = setup();
    let output = temp_dir.path().join("insights.json");

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["export", "json", "--output"])
        .arg(&output)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["summary"]["transaction_count"], 4);
    assert_eq!(value["budgets"][0]["spent"], 8500);
}

#[test]
fn test_export_yaml_stdout() {
    let (temp_dir, snapshot) = setup();

    fintrack(&temp_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["export", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# fintrack insights export"));
}

#[test]
fn test_missing_snapshot() {
    let temp_dir = TempDir::new().unwrap();

    fintrack(&temp_dir)
        .args(["report", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load snapshot"));
}

#[test]
fn test_config_save() {
    let temp_dir = TempDir::new().unwrap();

    fintrack(&temp_dir)
        .args(["--currency", "£", "config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: £"));

    let settings = fs::read_to_string(temp_dir.path().join("config.json")).unwrap();
    assert!(settings.contains("£"));
}
