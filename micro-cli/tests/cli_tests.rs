//! CLI integration tests
//!
//! Spawns the `micro` binary and verifies exit codes, stdout and stderr.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID: &str = "begin read(x,y); z:=x+y-1; write(z); end\n";

fn micro() -> Command {
    cargo_bin_cmd!("micro")
}

/// Write `content` to a file inside `dir` and return its path
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write temp file");
    path
}

#[test]
fn valid_program_is_silent_and_exits_0() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ok.micro", VALID);

    micro()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_path_exits_2() {
    micro().assert().code(2);
}

#[test]
fn unopenable_file_exits_1() {
    micro()
        .arg("definitely/not/here.micro")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("definitely/not/here.micro"));
}

#[test]
fn reads_stdin_with_dash() {
    micro().arg("-").write_stdin(VALID).assert().success();
}

#[test]
fn scanner_errors_are_numbered_and_fail() {
    micro()
        .arg("-")
        .write_stdin("begin x := 1 # 2; end")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error #1: scanner: Invalid token found '#'",
        ))
        .stderr(predicate::str::contains(
            "error: Encountered errors during token scanning",
        ));
}

#[test]
fn parser_errors_are_numbered_and_fail() {
    micro()
        .arg("-")
        .write_stdin("begin x:=1 end")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error #1: parser: Expected ';' but found 'end'",
        ))
        .stderr(predicate::str::contains(
            "error #2: parser: Expected 'end' but found 'EOF'",
        ))
        .stderr(predicate::str::contains(
            "error: Encountered errors during parsing",
        ));
}

#[test]
fn max_errors_flag_limits_reports() {
    micro()
        .args(["--max-errors", "1", "-"])
        .write_stdin("begin x:=1 end")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error #1:"))
        .stderr(predicate::str::contains("error #2:").not());
}

#[test]
fn zero_max_errors_is_a_usage_error() {
    micro()
        .args(["--max-errors", "0", "-"])
        .write_stdin(VALID)
        .assert()
        .code(2);
}

#[test]
fn config_file_sets_budget() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "micro.json", r#"{ "check": { "max_errors": 1 } }"#);

    micro()
        .arg("--config")
        .arg(&config)
        .arg("-")
        .write_stdin("begin end")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error #1:"))
        .stderr(predicate::str::contains("error #2:").not());
}

#[test]
fn flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "micro.json", r#"{ "check": { "max_errors": 1 } }"#);

    micro()
        .arg("--config")
        .arg(&config)
        .args(["--max-errors", "5", "-"])
        .write_stdin("begin end")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error #2:"));
}

#[test]
fn invalid_config_exits_1() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "micro.json", r#"{ "check": { "max_errors": 0 } }"#);

    micro()
        .arg("--config")
        .arg(&config)
        .arg("-")
        .write_stdin(VALID)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_errors must be at least 1"));
}

#[test]
fn dump_tokens_prints_json() {
    let output = micro()
        .args(["--dump-tokens", "-"])
        .write_stdin("begin a := 1; end")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tokens: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[2]["kind"], "AssignOp");
    assert_eq!(tokens[3]["lexeme"], "1");
}

#[test]
fn debug_logging_goes_to_stderr() {
    micro()
        .args(["--log-level", "debug", "-"])
        .write_stdin(VALID)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("micro::"));
}

#[test]
fn invalid_byte_in_comment_is_accepted() {
    micro()
        .arg("-")
        .write_stdin(&b"begin x := 1; -- caf\xe9\nend\n"[..])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn invalid_byte_in_code_is_an_invalid_token() {
    micro()
        .arg("-")
        .write_stdin(&b"begin x := 1 \xff; end"[..])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error #1: scanner: Invalid token found '\u{FFFD}'",
        ));
}
