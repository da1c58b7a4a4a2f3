//! End-to-end tests for the `pancake-judge` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

const SAMPLE: &str = "3\n---+-++- 3\n+++++ 4\n-+-+- 4\n";
const SAMPLE_OUT: &str = "Case #1: 3\nCase #2: 0\nCase #3: IMPOSSIBLE\n";

fn judge() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pancake-judge"));
    cmd.env("RUST_LOG", "info");
    cmd
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = judge()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pancake-judge");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_stdin_to_stdout() {
    let output = run_with_stdin(&[], SAMPLE);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_OUT);

    // Timing goes to stderr, never into the results.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Done in"), "{stderr}");
}

#[test]
fn test_file_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("A-small.in");
    let out = dir.path().join("A-small.out");
    fs::write(&input, SAMPLE).unwrap();

    let output = judge()
        .arg(&input)
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), SAMPLE_OUT);
}

#[test]
fn test_file_to_stdout_without_prefix() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, SAMPLE).unwrap();

    let output = judge()
        .arg(&input)
        .arg("--no-case-prefix")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3\n0\nIMPOSSIBLE\n");
}

#[test]
fn test_malformed_input_fails() {
    let output = run_with_stdin(&[], "2\n-+ 1\n-?- 2\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Case #1: 1\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unexpected character '?'"), "{stderr}");
}

#[test]
fn test_zero_width_fails() {
    let output = run_with_stdin(&[], "1\n-- 0\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("flipper width must be positive"), "{stderr}");
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("judge.json");
    fs::write(
        &config,
        r#"{ "case_prefix": false, "encoding": { "face_up": "u", "face_down": "d" } }"#,
    )
    .unwrap();

    let output = run_with_stdin(&["--config", config.to_str().unwrap()], "2\nddu 2\nd 2\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1\nIMPOSSIBLE\n");
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let output = judge()
        .arg(dir.path().join("does-not-exist.in"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to read input file"), "{stderr}");
}

#[test]
fn test_print_default_config() {
    let output = judge().arg("config").output().unwrap();
    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["case_prefix"], serde_json::Value::Bool(true));
    assert_eq!(printed["encoding"]["face_down"], "-");
}
