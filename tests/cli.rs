use quad_roots::report::{BANNER, COMPLEX, PROMPT, REAL};

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn quadratic(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_quadratic"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn quadratic");
    // the child may exit before reading everything, so a broken pipe is fine here
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes());
    child.wait_with_output().expect("failed to wait on quadratic")
}

/// Stdout with the banner and prompt removed.
fn after_prompt(out: &Output) -> String {
    let stdout = String::from_utf8(out.stdout.clone()).unwrap();
    let header = format!("{BANNER}\n{PROMPT}");
    stdout
        .strip_prefix(&header)
        .unwrap_or_else(|| panic!("missing prompt in {stdout:?}"))
        .to_string()
}

#[test]
fn test_real_roots() {
    let out = quadratic(&[], "1 -3 2\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(after_prompt(&out), format!("{REAL}\nx1 = 2\nx2 = 1\n"));
    assert!(out.stderr.is_empty());
}

#[test]
fn test_not_quadratic_is_silent() {
    let out = quadratic(&[], "0 1 1\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(after_prompt(&out), "");
    assert!(out.stderr.is_empty());
}

#[test]
fn test_malformed_input() {
    let out = quadratic(&[], "1 x 3\n");
    assert_eq!(out.status.code(), Some(1));
    // the prompt line is ended before the error is reported
    assert_eq!(after_prompt(&out), "\n");
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr:?}");
    assert!(stderr.starts_with("error: invalid coefficient b"), "{stderr:?}");
}

#[test]
fn test_missing_input() {
    let out = quadratic(&[], "1 2");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("error: missing coefficient c"), "{stderr:?}");
}

#[test]
fn test_wide_flag() {
    let out = quadratic(&[], "1 46341 0\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(after_prompt(&out), format!("{COMPLEX}\n"));

    for flag in ["--wide", "-w"] {
        let out = quadratic(&[flag], "1 46341 0\n");
        assert_eq!(out.status.code(), Some(0));
        assert_eq!(
            after_prompt(&out),
            format!("{REAL}\nx1 = 0\nx2 = -46341\n")
        );
    }
}

#[test]
fn test_usage_error() {
    let out = quadratic(&["--no-such-flag"], "");
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}
