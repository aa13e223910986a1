//! Tests for the headinganchor command-line filter.
#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use headinganchor::parse_tokens;

const BIN: &str = env!("CARGO_BIN_EXE_headinganchor");
const DOCUMENT: &str = "tests/fixtures/document.json";

#[test]
fn test_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    let status = Command::new(BIN)
        .args([DOCUMENT, "-q", "-o"])
        .arg(&out)
        .status()
        .expect("binary should run");
    assert!(status.success());

    let tokens = parse_tokens(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(tokens.len(), 16);
    assert_eq!(tokens[0].attr_get("id"), Some("HelloWorld"));
}

#[test]
fn test_html_from_stdin_with_flags() {
    let mut child = Command::new(BIN)
        .args(["--html", "--no-id", "--anchor-class", "hash"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should run");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(fs::read_to_string(DOCUMENT).unwrap().as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with(
        "<h1><a name=\"HelloWorld\" class=\"hash\" href=\"#\"></a>Hello World</h1>\n"
    ));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("4 headings (0 ids, 4 anchors, 0 skipped)"));
}

#[test]
fn test_options_file_then_flags() {
    let dir = tempfile::tempdir().unwrap();
    let options = dir.path().join("options.json");
    fs::write(&options, r#"{"anchorClass": "from-file", "addHeadingID": false}"#).unwrap();

    let output = Command::new(BIN)
        .args([DOCUMENT, "--html", "-q", "--no-anchor", "--options"])
        .arg(&options)
        .output()
        .unwrap();
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with("<h1>Hello World</h1>\n"));
    assert!(!html.contains("from-file"));
}

#[test]
fn test_all_disabled_warns_and_passes_through() {
    let output = Command::new(BIN)
        .args([DOCUMENT, "--no-id", "--no-anchor"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("warning: heading ids and anchors are both disabled"));
    assert!(stderr.contains("4 headings (0 ids, 0 anchors, 0 skipped)"));

    let tokens = parse_tokens(&String::from_utf8(output.stdout).unwrap()).unwrap();
    let fixture = parse_tokens(&fs::read_to_string(DOCUMENT).unwrap()).unwrap();
    assert_eq!(tokens, fixture);
}

#[test]
fn test_quiet_suppresses_warning() {
    let output = Command::new(BIN)
        .args([DOCUMENT, "-q", "--no-id", "--no-anchor"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_bad_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, "not json").unwrap();

    let output = Command::new(BIN).arg(&input).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: JSON error"));
}

#[test]
fn test_bad_options_fail() {
    let dir = tempfile::tempdir().unwrap();
    let options = dir.path().join("options.json");
    fs::write(&options, "[]").unwrap();

    let output = Command::new(BIN)
        .args([DOCUMENT, "--options"])
        .arg(&options)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid options"));
}
