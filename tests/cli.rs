use std::io::Write;
use std::process::{Command, Output, Stdio};

const PROMPT: &str = "Enter two positive integers: ";

fn run_gcd(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gcd"))
        .env_remove("GCD_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // note: stdin is dropped at the end of this block so the child sees EOF
    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_known_scenarios() {
    let cases = [
        ("48 18\n", "G.C.D of 48 and 18 is 6.\n"),
        ("17 5\n", "G.C.D of 17 and 5 is 1.\n"),
        ("100 75\n", "G.C.D of 100 and 75 is 25.\n"),
        ("7 0\n", "G.C.D of 7 and 0 is 7.\n"),
        ("0 0\n", "G.C.D of 0 and 0 is 0.\n"),
    ];

    for (input, expected) in cases {
        // Act
        let output = run_gcd(input);

        // Assert
        assert_eq!(output.status.code(), Some(0), "input={input:?}");
        assert_eq!(stdout_of(&output), format!("{PROMPT}{expected}"));
        assert!(stderr_of(&output).is_empty());
    }
}

#[test]
fn test_operands_on_separate_lines() {
    let output = run_gcd("48\n18\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{PROMPT}G.C.D of 48 and 18 is 6.\n"));
}

#[test]
fn test_negative_operands_give_non_negative_result() {
    let output = run_gcd("-48 18\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{PROMPT}G.C.D of -48 and 18 is 6.\n"));
}

#[test]
fn test_malformed_input_fails() {
    // Act
    let output = run_gcd("48 abc\n");

    // Assert
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), PROMPT);
    assert!(stderr_of(&output).starts_with("error: `abc` is not a valid integer"));
}

#[test]
fn test_missing_operand_fails() {
    let output = run_gcd("48");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), PROMPT);
    assert_eq!(stderr_of(&output), "error: expected 2 integers but input ended after 1\n");
}

#[test]
fn test_invalid_log_level_fails_before_prompt() {
    let output = Command::new(env!("CARGO_BIN_EXE_gcd"))
        .env("GCD_LOG", "loud")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("GCD_LOG"));
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gcd"))
        .env("GCD_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"100 75\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{PROMPT}G.C.D of 100 and 75 is 25.\n"));
    assert!(stderr_of(&output).contains("computed gcd"));
}
