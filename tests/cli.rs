use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use tempfile::NamedTempFile;

fn linecalc(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_linecalc")).args(args)
                                                               .env_remove("RUST_LOG")
                                                               .stdin(Stdio::piped())
                                                               .stdout(Stdio::piped())
                                                               .stderr(Stdio::piped())
                                                               .spawn()
                                                               .expect("Failed to start linecalc");
    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(stdin.as_bytes())
         .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for linecalc")
}

fn script(lines: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(lines.as_bytes()).expect("Failed to write script");
    file
}

fn assert_success(args: &[&str], stdin: &str) -> String {
    let output = linecalc(args, stdin);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "linecalc {args:?} failed: {stderr}");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_failure(args: &[&str], stdin: &str) -> (String, String) {
    let output = linecalc(args, stdin);
    assert_eq!(output.status.code(), Some(1), "linecalc {args:?} was expected to exit with 1");
    (String::from_utf8_lossy(&output.stdout).into_owned(),
     String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn single_line() {
    assert_eq!(assert_success(&["12+6"], ""), "=18\n");
    assert_eq!(assert_success(&["--", "-(3+4)"], ""), "=1\n");
}

#[test]
fn rejected_single_line_exits_with_failure() {
    let (stdout, stderr) = assert_failure(&["12+++6"], "");
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid expression: Too many operators in a row"), "{stderr}");
}

#[test]
fn script_stops_at_exit_command() {
    let file = script("x = 3+4\n2x\nE\n99\n");
    let path = file.path().to_str().expect("utf-8 temp path");
    assert_eq!(assert_success(&["--file", path], ""), "=14\n");
}

#[test]
fn custom_exit_command() {
    let file = script("1+1\nE\nquit\n2+2\n");
    let path = file.path().to_str().expect("utf-8 temp path");
    let (stdout, stderr) = assert_failure(&["--file", path, "--exit-command", "quit"], "");
    assert_eq!(stdout, "=2\n");
    assert!(stderr.contains("Unsupported operation: 'E'"), "{stderr}");
}

#[test]
fn script_keeps_going_after_a_failed_line() {
    let file = script("1+1\n1/0\n2+2\n");
    let path = file.path().to_str().expect("utf-8 temp path");
    let (stdout, stderr) = assert_failure(&["--file", path], "");
    assert_eq!(stdout, "=2\n=4\n");
    assert!(stderr.contains("Division by zero"), "{stderr}");
}

#[test]
fn echo_prints_assignments() {
    let file = script("x = 5\nx*2\n");
    let path = file.path().to_str().expect("utf-8 temp path");
    assert_eq!(assert_success(&["--file", path], ""), "=10\n");
    assert_eq!(assert_success(&["--echo", "--file", path], ""), "x = 5\n=10\n");
}

#[test]
fn missing_script_file() {
    let (_, stderr) = assert_failure(&["--file", "no/such/linecalc/script"], "");
    assert!(stderr.contains("Failed to read the input file"), "{stderr}");
}

#[test]
fn interactive_session_prints_banner_and_stops_at_exit_command() {
    let stdout = assert_success(&[], "y = 2\n1+y\nE\n5+5\n");
    assert!(stdout.contains("Welcome to linecalc! Enter E at any time to exit"), "{stdout}");
    assert!(stdout.contains("=3"), "{stdout}");
    assert!(!stdout.contains("=10"), "{stdout}");
}
