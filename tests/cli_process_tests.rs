//! Tests that run the built binary
//!
//! Checks exit status, stdout notices and stderr error lines as a caller
//! of the command sees them.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const LOGIN_TEMPLATE: &str = r####"{"$id": "###Replace_Me", "title": "###Replace_Me", "properties": {}}"####;

fn run_bin(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_event-schema-gen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_success_prints_notices() {
    let dir = tempdir().unwrap();
    let sample = dir.path().join("sample.json");
    let template = dir.path().join("template.json");
    fs::write(&sample, r#"{"eventName": "Login", "userId": 5}"#).unwrap();
    fs::write(&template, LOGIN_TEMPLATE).unwrap();
    let out = dir.path().join("out");

    let output = run_bin(&[&out, &sample, &template]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating schema for file:"));
    assert!(stdout.contains("Login_schema.json generated successfully."));
    assert!(out.join("Login_schema.json").is_file());
}

#[test]
fn test_wrong_extension_exits_with_error() {
    let dir = tempdir().unwrap();
    let sample = dir.path().join("sample.txt");
    let template = dir.path().join("template.json");
    fs::write(&sample, r#"{"eventName": "Login"}"#).unwrap();
    fs::write(&template, LOGIN_TEMPLATE).unwrap();
    let out = dir.path().join("out");

    let output = run_bin(&[&out, &sample, &template]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("Error:"), "stderr: {stderr}");
    assert!(stderr.contains(".json"));
    assert!(!out.exists());
}

#[test]
fn test_empty_array_exits_with_error() {
    let dir = tempdir().unwrap();
    let sample = dir.path().join("sample.json");
    let template = dir.path().join("template.json");
    fs::write(&sample, r#"{"eventName": "E", "items": []}"#).unwrap();
    fs::write(&template, LOGIN_TEMPLATE).unwrap();
    let out = dir.path().join("out");

    let output = run_bin(&[&out, &sample, &template]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.starts_with("Error: Cannot infer schema from empty array at '/items'"),
        "stderr: {stderr}"
    );
    assert!(!out.join("E_schema.json").exists());
}

#[test]
fn test_missing_argument_exits_with_usage_error() {
    let dir = tempdir().unwrap();
    let sample = dir.path().join("sample.json");
    fs::write(&sample, r#"{"eventName": "Login"}"#).unwrap();
    let out = dir.path().join("out");

    let output = run_bin(&[&out, &sample]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    // Usage errors come from clap, which prints a lowercase prefix
    let stderr = stderr_of(&output);
    assert!(stderr.to_lowercase().starts_with("error:"), "stderr: {stderr}");
    assert!(!out.exists());
}
