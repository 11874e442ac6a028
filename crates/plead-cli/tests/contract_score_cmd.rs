use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn plead() -> Command {
    Command::cargo_bin("plead").expect("binary under test")
}

const PLAUSIBLE_ANSWERS: &str = "\
- element: Protected Activity
  text: I filed an EEOC complaint on 3/4/2022
- element: Adverse Employment Action
  text: I was fired
- element: Causal Connection / But-For Cause
  text: no clear link
";

#[test]
fn score_selects_the_expected_ruling_from_a_yaml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("answers.yaml");
    fs::write(&path, PLAUSIBLE_ANSWERS).unwrap();

    plead()
        .args(["score", "--answers"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Facially Plausible: Proceed to Discovery."))
        .stdout(predicate::str::contains("I filed an EEOC complaint on 3/4/2022"));
}

#[test]
fn score_json_output_carries_no_score_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("answers.yaml");
    fs::write(&path, PLAUSIBLE_ANSWERS).unwrap();

    let assert = plead()
        .args(["score", "--format", "json", "--answers"])
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let v: Value = serde_json::from_str(&stdout).expect("valid json report");

    assert_eq!(v["verdict"]["class"], "Plausible");
    assert_eq!(v["verdict"]["css_class"], "plausible-claim");
    assert_eq!(v["answers"].as_array().unwrap().len(), 3);
    for answer in v["answers"].as_array().unwrap() {
        assert!(answer.get("score").is_none());
    }
    assert!(v.get("total").is_none());
}

#[test]
fn score_rejects_a_missing_file() {
    plead()
        .args(["score", "--answers", "does-not-exist.yaml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("failed to read answers file"));
}

#[test]
fn score_rejects_answers_out_of_element_order() {
    let out_of_order = "\
- element: Adverse Employment Action
  text: I was fired
- element: Protected Activity
  text: I filed an EEOC complaint on 3/4/2022
- element: Causal Connection / But-For Cause
  text: no clear link
";
    let dir = tempdir().unwrap();
    let path = dir.path().join("answers.yaml");
    fs::write(&path, out_of_order).unwrap();

    plead()
        .args(["score", "--answers"])
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("element order"));
}

#[test]
fn score_rejects_an_incomplete_answer_set() {
    let incomplete = "\
- element: Protected Activity
  text: I filed an EEOC complaint on 3/4/2022
";
    let dir = tempdir().unwrap();
    let path = dir.path().join("answers.yaml");
    fs::write(&path, incomplete).unwrap();

    plead()
        .args(["score", "--answers"])
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing answers"));
}

#[test]
fn score_rejects_a_blank_answer() {
    let blank = "\
- element: Protected Activity
  text: '   '
- element: Adverse Employment Action
  text: I was fired
- element: Causal Connection / But-For Cause
  text: no clear link
";
    let dir = tempdir().unwrap();
    let path = dir.path().join("answers.yaml");
    fs::write(&path, blank).unwrap();

    plead()
        .args(["score", "--answers"])
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Protected Activity"));
}
