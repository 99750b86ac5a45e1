use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use tempfile::TempDir;

fn briefly(data_dir: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("briefly")?;
    cmd.env("BRIEFLY_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn card_list_shows_sample_cards() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .args(["card", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("REPC Contract cost")
                .and(predicate::str::contains("Budget 3 cost"))
                .and(predicate::str::contains("$253,000.00")),
        );
    Ok(())
}

#[test]
fn toggle_and_set_update_total_and_persist() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    briefly(&dir)?
        .args(["card", "toggle", "repc", "fence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$265,000.00"));

    briefly(&dir)?
        .args(["card", "set", "repc", "slab", "abc"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("$0.00").and(predicate::str::contains("$247,000.00")),
        );

    briefly(&dir)?
        .args(["card", "show", "repc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $247,000.00"));
    Ok(())
}

#[test]
fn unknown_card_fails() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .args(["card", "toggle", "nope", "fence"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Card not found: nope"));
    Ok(())
}

#[test]
fn invalid_chart_kind_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .args(["card", "chart", "repc", "pie"])
        .assert()
        .failure();

    briefly(&dir)?
        .args(["card", "chart", "repc", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bar"));
    Ok(())
}

#[test]
fn add_card_copies_template() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .args(["card", "add"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Added card:").and(predicate::str::contains("$253,000.00")),
        );

    briefly(&dir)?
        .args(["card", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard card"));
    Ok(())
}

#[test]
fn info_set_then_show() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .args(["info", "set", "case-id", "CASE-0042"])
        .assert()
        .success();

    briefly(&dir)?
        .args(["info", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CASE-0042"));
    Ok(())
}

#[test]
fn edit_mode_off_locks_client_info_but_not_values() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .args(["ui", "edit", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit:  off"));

    briefly(&dir)?
        .args(["card", "set", "repc", "slab", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$235,005.00"));

    briefly(&dir)?
        .args(["info", "set", "role", "Defendant"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Edit mode is off"));

    briefly(&dir)?
        .args(["info", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plaintiff"));
    Ok(())
}

#[test]
fn reset_requires_yes() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?.args(["card", "add"]).assert().success();

    briefly(&dir)?
        .args(["reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    briefly(&dir)?
        .args(["card", "list"])
        .assert()
        .stdout(predicate::str::contains("Dashboard card"));

    briefly(&dir)?.args(["reset", "--yes"]).assert().success();
    briefly(&dir)?
        .args(["card", "list"])
        .assert()
        .stdout(predicate::str::contains("Dashboard card").not());
    Ok(())
}

#[test]
fn export_json_and_csv() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let json_path = dir.path().join("dashboard.json");
    let csv_path = dir.path().join("breakdown.csv");

    briefly(&dir)?
        .arg("export")
        .arg(&json_path)
        .arg("--pretty")
        .assert()
        .success();
    let json = std::fs::read_to_string(&json_path)?;
    assert!(json.contains("\"schema_version\""));
    assert!(json.contains("REPC Contract cost"));

    briefly(&dir)?
        .arg("export")
        .arg(&csv_path)
        .args(["--format", "csv"])
        .assert()
        .success();
    let csv = std::fs::read_to_string(&csv_path)?;
    assert!(csv.starts_with("card_id,card_title,category,label,value,on,share"));
    assert!(csv.contains("repc"));
    Ok(())
}

#[test]
fn history_records_changes() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded yet."));

    briefly(&dir)?
        .args(["card", "toggle", "repc", "fence"])
        .assert()
        .success();

    briefly(&dir)?
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE").and(predicate::str::contains("fence")));
    Ok(())
}

#[test]
fn no_command_prints_hint() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    briefly(&dir)?
        .assert()
        .success()
        .stdout(predicate::str::contains("briefly tui"));
    Ok(())
}
