use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn packhub() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_packhub"));
    cmd.env("PACKHUB__LOGGING__LEVEL", "warn");
    cmd
}

fn with_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("packhub.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn pallet_code_for_a_fixed_date() {
    packhub()
        .args(["pallet-code", "--date", "2024-01-01", "--shift", "1", "--caliber", "12"])
        .args(["--format", "3", "--company", "5"])
        .assert()
        .success()
        .stdout("10124112305\n");
}

#[test]
fn pallet_code_rejects_malformed_dates() {
    packhub()
        .args(["code", "--date", "01/01/2024", "--shift", "1", "--caliber", "12"])
        .args(["--format", "3", "--company", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date"));
}

#[test]
fn no_config_shows_only_the_landing_page() {
    let dir = tempfile::tempdir().expect("temp dir");
    packhub()
        .current_dir(dir.path())
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/ "))
        .stdout(predicate::str::contains("/packing").not());
}

#[test]
fn configured_modules_are_listed() {
    let (_dir, path) = with_config("[flags]\nmodules = \"packing\"\nui_version = \"v2\"\n");
    packhub()
        .arg("--config")
        .arg(&path)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/packing/pallets/board"))
        .stdout(predicate::str::contains("/sales").not());
}

#[test]
fn environment_overrides_reach_the_flags() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = packhub()
        .current_dir(dir.path())
        .env("PACKHUB__FLAGS__MODULES", "*")
        .env("PACKHUB__FLAGS__DATA_VERSION", "v2")
        .args(["routes", "--json"])
        .output()
        .expect("run packhub");

    assert!(output.status.success());
    let routes: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let paths: Vec<_> = routes
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["path"].as_str())
        .collect();
    assert_eq!(paths.first(), Some(&"/"));
    assert!(paths.contains(&"/sales/reports"));
    assert!(!paths.contains(&"/dispatch/board"));
}

#[test]
fn flags_command_prints_resolved_values() {
    let (_dir, path) =
        with_config("[flags]\nmodules = \"transit, sales\"\n[flags.toggles]\nlabels = \"maybe\"\n");
    packhub()
        .arg("flags")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""transit""#))
        .stdout(predicate::str::contains(r#""labels": false"#));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    packhub()
        .args(["--config", "does/not/exist.toml", "nav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard"))
        .stderr(predicate::str::contains("Falling back to default configuration"));
}

#[test]
fn check_validates_every_table() {
    packhub()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok: 6 modules"));
}

#[test]
fn invalid_log_filter_falls_back_to_console_logging() {
    let dir = tempfile::tempdir().expect("temp dir");
    packhub()
        .current_dir(dir.path())
        .env("PACKHUB__LOGGING__FILTER", "packhub=bogus")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok: "))
        .stderr(predicate::str::contains("Invalid logging configuration"));
}

#[test]
fn disabled_outputs_fall_back_to_console_logging() {
    let (_dir, path) = with_config("[logging]\nconsole = false\n\n[flags]\nmodules = \"*\"\n");
    packhub()
        .arg("--config")
        .arg(&path)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/sales/orders"))
        .stderr(predicate::str::contains("Invalid logging configuration"));
}

#[test]
fn native_toml_booleans_keep_the_rest_of_the_flags() {
    let (_dir, path) = with_config(
        "[flags]\nmodules = [\"packing\", \"sales\"]\nui_version = \"v2\"\n\n[flags.toggles]\npallet_labels = true\n",
    );
    packhub()
        .arg("--config")
        .arg(&path)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/packing/pallets/board"))
        .stdout(predicate::str::contains("/sales/orders"))
        .stdout(predicate::str::contains("/transit").not())
        .stderr(predicate::str::contains("Falling back").not());
}
