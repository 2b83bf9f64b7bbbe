use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "expenses": [
        {"category": {"name": "Food"}, "amount": {"amount": 100}, "date": {"year": 2024, "month": 4, "day": 2}},
        {"category": {"name": "Food"}, "amount": {"amount": 50}, "date": {"year": 2024, "month": 4, "day": 5}},
        {"category": {"name": "Taxi"}, "amount": {"amount": 12.5}, "date": {"year": 2024, "month": 4, "day": 6}},
        {"category": {"name": "Food"}, "amount": {"amount": 999}, "date": {"year": 2024, "month": 3, "day": 31}}
    ],
    "budgets": [
        {"category": {"name": "Food"}, "amount": {"amount": 300}},
        {"category": {"name": "Rent"}, "amount": {"amount": 900}}
    ]
}"#;

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("snapshot.json"), SNAPSHOT).unwrap();
    dir
}

fn budgetrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetrack").unwrap();
    cmd.env("BUDGETRACK_DATA_DIR", dir.path())
        .env("BUDGETRACK_TODAY", "2024-04-10")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn summary_table_for_current_month() {
    let dir = setup();
    budgetrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("April 2024"))
        .stdout(predicate::str::contains("Not Budgeted"))
        .stdout(predicate::str::contains("$150.00"))
        .stdout(predicate::str::contains("$1200.00"))
        .stdout(predicate::str::contains("$999.00").not());
}

#[test]
fn summary_json_orders_by_spent() {
    let dir = setup();
    let output = budgetrack(&dir)
        .args(["summary", "--order", "spent", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["period"], "April 2024");
    assert_eq!(value["categories"][0]["category"]["name"], "Food");
    assert_eq!(value["categories"][1]["category"]["name"], "Rent");
    assert_eq!(value["categories"][2]["category"]["name"], "Not Budgeted");
    assert_eq!(value["total"]["amount"]["amount"], 162.5);
}

#[test]
fn burndown_includes_trend_mid_period() {
    let dir = setup();
    let output = budgetrack(&dir)
        .args(["burndown", "Food", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["labels"].as_array().unwrap().len(), 30);
    assert_eq!(value["budget"][14], 150.0);
    assert_eq!(value["expenses"][4], 150.0);
    assert_eq!(value["elapsed_days"], 10);
    assert_eq!(value["trend"][29], 450.0);
}

#[test]
fn burndown_for_past_period_has_no_trend() {
    let dir = setup();
    budgetrack(&dir)
        .args(["burndown", "Food", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food - March 2024"))
        .stdout(predicate::str::contains("Trend").not())
        .stdout(predicate::str::contains("Elapsed: 31 of 31 days"));
}

#[test]
fn burndown_unknown_category_fails() {
    let dir = setup();
    budgetrack(&dir)
        .args(["burndown", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: food"));
}

#[test]
fn query_prints_half_open_range() {
    let dir = setup();
    let output = budgetrack(&dir)
        .args(["query", "--period", "2024-12", "--category", "Food"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"and": [
            {"date": {"date": {"year": 2024, "month": 12, "day": 1}, "comparison": ">="}},
            {"date": {"date": {"year": 2025, "month": 1, "day": 1}, "comparison": "<"}},
            {"category": "Food"}
        ]})
    );
}

#[test]
fn period_lists_recent_months() {
    let dir = setup();
    budgetrack(&dir)
        .args(["period", "--recent", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02"))
        .stdout(predicate::str::contains("2024-04  April 2024"))
        .stdout(predicate::str::contains("(current)"));
}

#[test]
fn config_set_persists_period_kind() {
    let dir = setup();
    budgetrack(&dir)
        .args(["config", "set", "period_kind", "yearly"])
        .assert()
        .success();

    budgetrack(&dir)
        .args(["period"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01 .. 2024-12-31  366 days"));
}

#[test]
fn missing_snapshot_is_reported() {
    let dir = TempDir::new().unwrap();
    budgetrack(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Snapshot not found"));
}
