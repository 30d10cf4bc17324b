//! CLI Integration Tests
//!
//! These tests run the `airing` binary against temporary configuration
//! files. Sensors are simulated by closed local ports, so no hardware or
//! network is needed.
//!
//! ```
//! cargo test --package airing-cli --test cli_integration
//! ```

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run airing command and return output
fn run_airing(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_airing"))
        .args(args)
        .env_remove("AIRING_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run airing binary")
}

/// A local port nobody listens on
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn write_config(dir: &Path, port: u16) -> String {
    let path = dir.join("config.toml");
    let content = format!(
        r#"
port = {port}
connect_timeout_secs = 2
read_timeout_secs = 1

[outside]
name = "outside"
address = "127.0.0.1"

[[rooms]]
name = "office"
address = "127.0.0.1"
"#
    );
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = run_airing(&["--help"]);

    assert!(output.status.success(), "Help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shell"), "Help should list shell command");
    assert!(stdout.contains("check"), "Help should list check command");
    assert!(stdout.contains("config"), "Help should list config command");
    assert!(stdout.contains("--language"), "Help should list --language");
}

#[test]
fn test_version_command() {
    let output = run_airing(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_check_help() {
    let output = run_airing(&["check", "--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--summer"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_completions_bash() {
    let output = run_airing(&["completions", "bash"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("airing"));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_path_uses_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    let path_str = path.to_string_lossy();

    let output = run_airing(&["--config", &path_str, "config", "path"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), path_str);
}

#[test]
fn test_config_path_uses_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("from-env.toml");

    let output = Command::new(env!("CARGO_BIN_EXE_airing"))
        .args(["config", "path"])
        .env("AIRING_CONFIG", &path)
        .output()
        .expect("Failed to run airing binary");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        path.to_string_lossy()
    );
}

#[test]
fn test_config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("airing").join("config.toml");
    let path_str = path.to_string_lossy();

    let output = run_airing(&["--config", &path_str, "config", "init"]);
    assert!(output.status.success());
    assert!(path.exists());

    let output = run_airing(&["--config", &path_str, "config", "init"]);
    assert!(!output.status.success(), "init should not overwrite");
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));

    let output = run_airing(&["--config", &path_str, "config", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port = 23"));
    assert!(stdout.contains("language = \"en\""));
    assert!(stdout.contains("[outside]"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "min_relative_diff = 2.0\n").unwrap();

    let output = run_airing(&["--config", &path.to_string_lossy(), "check"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("min_relative_diff"));
}

// =============================================================================
// Check Tests (closed local port)
// =============================================================================

#[test]
fn test_check_unreachable_sensor() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), closed_port());

    let output = run_airing(&["--config", &config, "--no-color", "check"]);

    assert!(output.status.success(), "Sensor errors are not fatal");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("outside: PROBLEM with sensor 'outside'. Answer is: 'communication problem'"),
        "unexpected output: {stdout}"
    );
    assert!(stdout.contains("No data available from outside-sensor, comparison not possible"));
    assert!(!stdout.contains("HUMIDITY"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_check_unreachable_sensor_luxembourgish() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), closed_port());

    let output = run_airing(&["--config", &config, "--no-color", "--language", "lu", "check"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FEHLER beim Sensor 'outside'"));
    assert!(stdout.contains("Keng Werter vum Bausse-Sensor do"));
}

#[test]
fn test_check_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), closed_port());

    let output = run_airing(&["--config", &config, "check", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert!(value["outside"].is_null());
    assert_eq!(value["rooms"].as_array().unwrap().len(), 0);
    assert_eq!(value["errors"].as_array().unwrap().len(), 2);
}

#[test]
fn test_check_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), closed_port());
    let out = dir.path().join("result.json");

    let output = run_airing(&[
        "--config",
        &config,
        "check",
        "--format",
        "json",
        "--compact",
        "--output",
        &out.to_string_lossy(),
    ]);

    assert!(output.status.success());
    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("\"errors\""));
}

// =============================================================================
// Shell Tests
// =============================================================================

#[test]
fn test_shell_exits_on_e() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), closed_port());

    let mut child = Command::new(env!("CARGO_BIN_EXE_airing"))
        .args(["--config", &config, "--no-color", "shell"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run airing binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"x\nr\ne\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("'e' for exit: ").count(), 3);
    assert!(stdout.contains("No data available from outside-sensor"));
}
