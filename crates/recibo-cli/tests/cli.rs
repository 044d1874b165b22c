//! End-to-end tests for the recibo binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn recibo() -> Command {
    Command::cargo_bin("recibo").unwrap()
}

#[test]
fn parse_emits_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.txt");
    std::fs::write(
        &input,
        "FOLIO A-55012\nFECHA 13/02/2024\n2 HAMBURGUESAS\nTOTAL $95.00\n",
    )
    .unwrap();

    recibo()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id":"A-55012""#))
        .stdout(predicate::str::contains(r#""date":"2024-02-13""#))
        .stdout(predicate::str::contains(r#""total":"95.00""#))
        .stdout(predicate::str::contains("Hamburguesa Clásica"));
}

#[test]
fn parse_reads_stdin() {
    recibo()
        .arg("parse")
        .arg("-")
        .write_stdin("alitas x10 total $80.00")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""quantity":10"#));
}

#[test]
fn parse_missing_file_fails() {
    recibo()
        .arg("parse")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn parse_warns_about_absent_fields() {
    recibo()
        .arg("parse")
        .arg("-")
        .write_stdin("refresco grande")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not extract date"));
}

#[test]
fn config_show_prints_builtin_catalog() {
    recibo()
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hamburguesa Clásica"))
        .stdout(predicate::str::contains("synonyms"));
}

#[test]
fn config_init_then_parse_with_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("catalog.json");

    recibo()
        .arg("config")
        .arg("init")
        .arg("--output")
        .arg(&config)
        .assert()
        .success();

    recibo()
        .arg("--config")
        .arg(&config)
        .arg("parse")
        .arg("-")
        .write_stdin("boneless 8pz total $120.00")
        .assert()
        .success()
        .stdout(predicate::str::contains("Boneless"));
}

#[test]
fn batch_writes_summary() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "folio aa-1111 total $10.00").unwrap();
    std::fs::write(dir.path().join("b.txt"), "sin nada util").unwrap();
    let out = dir.path().join("out");

    recibo()
        .arg("batch")
        .arg(dir.path().join("*.txt").to_str().unwrap())
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success();

    let summary = std::fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("AA-1111"));
    assert!(summary.lines().count() >= 3);
}
