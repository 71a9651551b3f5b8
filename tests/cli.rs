//! End-to-end checks of the `romaji-scan` binary's output.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::net::TcpListener;
use std::process::Command;

/// A local port with nothing listening on it
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn unreachable_service_logs_and_errors_on_stdout_and_exits_zero() {
    let port = closed_port();

    let output = Command::new(env!("CARGO_BIN_EXE_romaji-scan"))
        .env("LIBRARY_HOST", "127.0.0.1")
        .env("LIBRARY_PORT", port.to_string())
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0));
    assert!(
        stdout.contains(&format!("Scanning library at http://127.0.0.1:{port}")),
        "log line missing from stdout: {stdout}"
    );
    assert!(stdout.contains("Error: "), "error line missing from stdout: {stdout}");
    assert!(stderr.is_empty(), "nothing should go to stderr: {stderr}");
}
