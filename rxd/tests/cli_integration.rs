//! Integration tests for the rxd CLI

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn run_rxd(args: &[&str], stdin: &[u8]) -> (Vec<u8>, String, bool) {
    let mut cmd_args = vec!["run", "-p", "rxd", "--"];
    cmd_args.extend(args);

    let mut child = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("child stdin is piped")
        .write_all(stdin)
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (output.stdout, stderr, success)
}

fn stdout_str(stdout: Vec<u8>) -> String {
    String::from_utf8(stdout).expect("stdout is valid UTF-8")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_rxd(&["--help"], b"");
    let stdout = stdout_str(stdout);

    assert!(success);
    assert!(stdout.contains("rxd"));
    assert!(stdout.contains("--cols"));
    assert!(stdout.contains("--groupsize"));
    assert!(stdout.contains("octets"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_rxd(&["--version"], b"");

    assert!(success);
    assert!(stdout_str(stdout).contains("rxd"));
}

#[test]
fn test_dump_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "Hello, world!\n").unwrap();

    let (stdout, _, success) = run_rxd(&[path.to_str().unwrap()], b"");

    assert!(success);
    assert_eq!(
        stdout_str(stdout),
        "00000000: 4865 6c6c 6f2c 2077 6f72 6c64 210a       Hello, world!.\n"
    );
}

#[test]
fn test_dump_stdin_by_default() {
    let (stdout, _, success) = run_rxd(&["-c", "4"], b"\x00A\nB");

    assert!(success);
    assert_eq!(stdout_str(stdout), "00000000: 0041 0a42  .A.B\n");
}

#[test]
fn test_dash_selects_stdin() {
    let (stdout, _, success) = run_rxd(&["-c", "4", "-"], b"\x00A\nB");

    assert!(success);
    assert_eq!(stdout_str(stdout), "00000000: 0041 0a42  .A.B\n");
}

#[test]
fn test_uppercase_flag() {
    let (stdout, _, success) = run_rxd(&["-c", "4", "-u"], b"\x00A\nB");

    assert!(success);
    assert_eq!(stdout_str(stdout), "00000000: 0041 0A42  .A.B\n");
}

#[test]
fn test_cols_and_groupsize() {
    let (stdout, _, success) = run_rxd(&["-c", "8", "-g", "4"], b"ABCDEFGHIJKLMNOPQRST");

    assert!(success);
    assert_eq!(
        stdout_str(stdout),
        "00000000: 41424344 45464748  ABCDEFGH\n\
         00000008: 494a4b4c 4d4e4f50  IJKLMNOP\n\
         00000010: 51525354           QRST\n"
    );
}

#[test]
fn test_non_utf8_input_is_dumped_raw() {
    let (stdout, _, success) = run_rxd(&["-c", "4"], &[0xff, 0xfe, 0x09]);

    assert!(success);
    assert_eq!(stdout, b"00000000: fffe 09    \xff\xfe\x09\n".to_vec());
}

#[test]
fn test_over_range_cols_are_clamped() {
    let data = vec![0u8; 300];
    let (stdout, _, success) = run_rxd(&["-c", "500"], &data);

    assert!(success);
    let stdout = stdout_str(stdout);
    // cols capped at 256: 300 bytes make two rows.
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("00000100: "));
}

#[test]
fn test_unreadable_file() {
    let (_, stderr, success) = run_rxd(&["/nonexistent/path.bin"], b"");

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("failed to read"));
}
