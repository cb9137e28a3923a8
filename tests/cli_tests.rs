//! Integration tests for the entmark CLI binary.
//!
//! Spawns the compiled binary and checks output formats, example prompt
//! handling, and the exit-code policy: usage errors exit 2, extraction
//! outcomes (including failures) are content with exit 0.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn entmark(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_entmark"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_html_output_for_positional_text() {
    let out = entmark(&["--quiet", "Kunming is the capital of Yunnan"]);
    assert!(out.status.success());
    let html = stdout(&out);
    assert!(html.contains("<h2>🔍 Named Entities Found</h2>"), "got: {html}");
    assert!(html.contains(">Yunnan</span>"));
}

#[test]
fn test_json_output_serializes_catalog() {
    let out = entmark(&["--quiet", "--format", "json", "Kunming is the capital of Yunnan"]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid JSON");
    let groups = v["groups"].as_array().expect("groups array");
    assert!(!groups.is_empty());
    let entities: Vec<&str> = groups
        .iter()
        .flat_map(|g| g["entities"].as_array().unwrap())
        .map(|e| e.as_str().unwrap())
        .collect();
    assert!(entities.contains(&"Yunnan"), "got: {entities:?}");
}

#[test]
fn test_text_output_strips_markup() {
    let out = entmark(&["--quiet", "--format", "text", "--example", "2"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Named Entities Found"));
    assert!(!text.contains('<'), "got: {text}");
}

#[test]
fn test_example_prompt_runs() {
    let out = entmark(&["--quiet", "--example", "2"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(">Yunnan</span>"));
}

#[test]
fn test_example_zero_is_usage_error() {
    let out = entmark(&["--example", "0"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("example must be 1-4"));
}

#[test]
fn test_example_out_of_range_is_usage_error() {
    let out = entmark(&["--example", "9"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("example must be 1-4"));
}

#[test]
fn test_piped_stdin_is_analyzed() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_entmark"))
        .args(["--quiet"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary spawns");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"Beijing is the capital of China")
        .expect("write stdin");
    let out = child.wait_with_output().expect("binary runs");

    assert!(out.status.success());
    assert!(stdout(&out).contains(">China</span>"), "got: {}", stdout(&out));
}

#[test]
fn test_empty_piped_stdin_prompts_with_success() {
    // Blank input is a message, not a fault: exit 0 with the prompt text.
    let out = entmark(&["--quiet"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Please enter some text to analyze."));
}

#[test]
fn test_list_examples() {
    let out = entmark(&["--list-examples"]);
    assert!(out.status.success());
    let listing = stdout(&out);
    assert!(listing.contains("1. Yunnan University"));
    assert!(listing.contains("4. Mao Zedong"));
}

#[test]
fn test_list_backends_reports_heuristic() {
    let out = entmark(&["--list-backends"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("heuristic: ✓"));
}

#[test]
fn test_quiet_suppresses_backend_log() {
    let noisy = entmark(&["--example", "2"]);
    assert!(stderr(&noisy).contains("backend: heuristic"));

    let quiet = entmark(&["--quiet", "--example", "2"]);
    assert!(!stderr(&quiet).contains("backend:"));
}
