//! End-to-end tests for the mandato binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command with HOME pointed at a fresh directory, so no user config
/// file can leak into the test.
fn mandato(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mandato").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_analyze_json_resolves_tomorrow() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args([
            "analyze",
            "anotá comprar leche mañana a las 10:30",
            "--now",
            "2024-03-10T08:00:00-03:00",
            "--output",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("2024-03-11T10:30:00-03:00"))
        .stdout(predicate::str::contains("\"kind\": \"reminder\""));
}

#[test]
fn test_analyze_json_resolves_next_weekday() {
    let home = TempDir::new().unwrap();
    // 2024-03-11 is a Monday; "lunes" must land on the next one.
    mandato(&home)
        .args([
            "analyze",
            "agendá cita lunes a las 14:00",
            "--now",
            "2024-03-11T09:00:00-03:00",
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-18T14:00:00-03:00"))
        .stdout(predicate::str::contains("\"kind\": \"event\""));
}

#[test]
fn test_analyze_pretty_shows_description() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args([
            "analyze",
            "agendá reunión con Juan viernes a las 15:30",
            "--now",
            "2024-03-11T09:00:00-03:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("reunión con Juan"))
        .stdout(predicate::str::contains("15:30"));
}

#[test]
fn test_analyze_offset_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args([
            "analyze",
            "anotá pagar alquiler hoy a las 9",
            "--now",
            "2024-03-10T08:00",
            "--offset",
            "2",
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-10T09:00:00+02:00"));
}

#[test]
fn test_analyze_invalid_verb_fails() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args(["analyze", "comprá pan mañana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("verbo inválido"));
}

#[test]
fn test_analyze_json_error_envelope() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args(["analyze", "agendá reunión a las 25:00", "-o", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("\"type\": \"TimeSyntaxError\""));
}

#[test]
fn test_analyze_empty_command() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args(["analyze", "   ", "-o", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"type\": \"EmptyCommand\""));
}

#[test]
fn test_analyze_rejects_bad_reference_instant() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args(["analyze", "agendá reunión hoy", "--now", "ayer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reference instant"));
}

#[test]
fn test_tokens_json_lists_kinds() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args(["tokens", "agendá reunión hoy a las 14:30", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Verb\""))
        .stdout(predicate::str::contains("\"ALas\""))
        .stdout(predicate::str::contains("\"Colon\""))
        .stdout(predicate::str::contains("\"Eof\""));
}

#[test]
fn test_config_file_sets_offset() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".mandato");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "utc_offset_hours: 0\n").unwrap();

    mandato(&home)
        .args([
            "analyze",
            "anotá pagar alquiler hoy a las 9",
            "--now",
            "2024-03-10T08:00",
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-10T09:00:00+00:00"));
}

#[test]
fn test_config_file_sets_default_output() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".mandato");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "default_output: json\n").unwrap();

    mandato(&home)
        .args([
            "analyze",
            "agendá reunión hoy",
            "--now",
            "2024-03-10T08:00:00-03:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"));
}

#[test]
fn test_alias_a_works() {
    let home = TempDir::new().unwrap();
    mandato(&home)
        .args(["a", "recordame llamar doctor 15 de marzo 2024", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"date\": \"15 de marzo 2024\""));
}
