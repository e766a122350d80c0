use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn cli(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fitness-tracker").unwrap();
    cmd.arg("--config").arg(config).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_report_prints_sample_lines_in_order() {
    let dir = TempDir::new().unwrap();
    let output = cli(&dir.path().join("config.toml"))
        .arg("report")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Training type: Swimming;"));
    assert!(lines[1].starts_with("Training type: Running;"));
    assert!(lines[2].starts_with("Training type: SportsWalking;"));
    assert!(lines[1].ends_with("Calories burned: 797.805."));
}

#[test]
fn test_report_json_format() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["report", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"training_type\":\"Swimming\""))
        .stdout(predicate::str::contains("\"calories\":336.0"));
}

#[test]
fn test_calc_single_package() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["calc", "SWM", "720", "1", "80", "25", "40"])
        .assert()
        .success()
        .stdout(
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000.\n",
        );
}

#[test]
fn test_calc_unknown_code_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["calc", "XYZ", "1", "2", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown workout type: 'XYZ'"));
}

#[test]
fn test_calc_wrong_arity_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["calc", "RUN", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects 3 values, got 2"));
}

#[test]
fn test_calc_rejects_negative_weight() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["calc", "RUN", "15000", "1", "-75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight_kg"));
}

#[test]
fn test_calc_rejects_overflowing_metrics() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["calc", "RUN", "15000", "1e-310", "75", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid value for 'speed'"));
}

#[test]
fn test_report_help_mentions_default_config_file() {
    Command::cargo_bin("fitness-tracker")
        .unwrap()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~/.config/fitness-tracker/config.toml"));
}

#[test]
fn test_codes_lists_fields() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .arg("codes")
        .assert()
        .success()
        .stdout(predicate::str::contains("WLK  action duration_h weight_kg height_cm"));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    cli(&path)
        .args(["config", "set", "report.format", "json"])
        .assert()
        .success()
        .stdout("ok\n");
    assert!(path.exists());

    cli(&path)
        .args(["config", "get", "report.format"])
        .assert()
        .success()
        .stdout("json\n");

    // the saved format now applies to reports
    cli(&path)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["config", "set", "report.colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_completions_command() {
    let dir = TempDir::new().unwrap();
    cli(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitness-tracker"));
}
