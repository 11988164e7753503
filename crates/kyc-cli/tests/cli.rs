use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const PAN_TEXT: &str = "INCOME TAX DEPARTMENT\nGOVT. OF INDIA\nRAHUL KUMAR SHARMA\n14/08/1987\nPermanent Account Number\nABCDE1234F\nSignature\n";

const VOTER_TEXT: &str = "ELECTION COMMISSION OF INDIA\nIDENTITY CARD\nXYZ7654321\nName : AMIT KUMAR YADAV\nनाम : अमित कुमार यादव\n";

fn kyc() -> Command {
    Command::cargo_bin("kyc").unwrap()
}

#[test]
fn process_pan_file_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pan.txt");
    fs::write(&input, PAN_TEXT).unwrap();

    kyc()
        .args(["process", "--no-store"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""document_type":"PAN""#))
        .stdout(predicate::str::contains(r#""number":"ABCDE1234F""#));
}

#[test]
fn process_reads_stdin() {
    kyc()
        .args(["process", "--no-store", "--format", "text", "--type", "voter-id", "-"])
        .write_stdin(VOTER_TEXT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document: VOTER_ID"))
        .stdout(predicate::str::contains("AMIT KUMAR YADAV"));
}

#[test]
fn voter_id_detection_is_opt_in() {
    kyc()
        .args(["process", "--no-store", "-"])
        .write_stdin(VOTER_TEXT)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""document_type":"PAN""#));
}

#[test]
fn explain_prints_candidates() {
    kyc()
        .args(["process", "--no-store", "--explain", "-"])
        .write_stdin(PAN_TEXT)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""number":"ABCDE1234F""#))
        .stderr(predicate::str::contains("Classified as PAN"))
        .stderr(predicate::str::contains("Name candidates"));
}

#[test]
fn process_forced_type() {
    kyc()
        .args(["process", "--no-store", "--type", "pan", "-"])
        .write_stdin("ABCDE1234F")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""document_type":"PAN""#));
}

#[test]
fn process_rejects_empty_input() {
    kyc()
        .args(["process", "--no-store", "-"])
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No text found"));
}

#[test]
fn process_missing_file() {
    kyc()
        .args(["process", "--no-store", "/nonexistent/card.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn second_registration_is_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pan.txt");
    let store = dir.path().join("records.json");
    fs::write(&input, PAN_TEXT).unwrap();

    kyc()
        .args(["process", "--store"])
        .arg(&store)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_duplicate":false"#));

    kyc()
        .args(["process", "--store"])
        .arg(&store)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_duplicate":true"#));
}

#[test]
fn missing_gazetteer_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"ner": {"gazetteer": "/nonexistent/stop-words.txt"}}"#).unwrap();

    kyc()
        .arg("-c")
        .arg(&config)
        .args(["process", "--no-store", "-"])
        .write_stdin(PAN_TEXT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start entity recognizer"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), PAN_TEXT).unwrap();
    fs::write(dir.path().join("b.txt"), VOTER_TEXT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    let out = dir.path().join("out");
    let pattern = dir.path().join("*.txt");
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"classification": {"detect_voter_id": true}}"#).unwrap();

    kyc()
        .arg("-c")
        .arg(&config)
        .args(["batch", "--no-store", "--summary", "--continue-on-error", "--jobs", "2"])
        .arg("--output-dir")
        .arg(&out)
        .arg(pattern.to_str().unwrap())
        .assert()
        .success();

    let pan = fs::read_to_string(out.join("a.json")).unwrap();
    assert!(pan.contains(r#""document_type":"PAN""#));
    let voter = fs::read_to_string(out.join("b.json")).unwrap();
    assert!(voter.contains(r#""document_type":"VOTER_ID""#));

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 4);
    assert!(summary.contains("empty.txt,error"));
}

#[test]
fn config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    kyc()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "extraction.use_ner", "false"])
        .assert()
        .success();

    kyc()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "extraction.use_ner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}
