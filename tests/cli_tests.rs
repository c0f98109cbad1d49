//! End-to-end tests for the `nougat` binary.

use std::path::Path;
use std::process::{Command, Output};

mod fixtures;
use fixtures::*;

/// Path to the nougat binary
fn nougat_bin() -> String {
    std::env::var("CARGO_BIN_EXE_nougat").unwrap_or_else(|_| "target/release/nougat".to_string())
}

/// Runs the binary against an isolated config file.
fn run(config_file: &Path, args: &[&str]) -> Output {
    Command::new(nougat_bin())
        .arg("--config")
        .arg(config_file)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

// ============================================================================
// Geometry Command Tests
// ============================================================================

#[test]
fn test_convert_json() {
    let env = TestEnv::new("");
    let output = run(
        &env.config_file,
        &[
            "convert", "--x", "10", "--y", "20", "--from", "portrait", "--to", "landscape-left",
            "--json",
        ],
    );
    assert_success(&output);

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["output"]["x"], 460.0);
    assert_eq!(result["output"]["y"], 10.0);
    assert_eq!(result["bounds"]["width"], 320.0);
}

#[test]
fn test_convert_human_readable() {
    let env = TestEnv::new("");
    let output = run(
        &env.config_file,
        &[
            "convert",
            "--x",
            "10",
            "--y",
            "20",
            "--width",
            "320",
            "--height",
            "480",
            "--from",
            "portrait",
            "--to",
            "portrait-upside-down",
        ],
    );
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("(310, 460) in portrait-upside-down"),
        "Unexpected output: {stdout}"
    );
}

#[test]
fn test_convert_rejects_unknown_orientation() {
    let env = TestEnv::new("");
    let output = run(
        &env.config_file,
        &["convert", "--x", "1", "--y", "1", "--from", "sideways", "--to", "portrait"],
    );
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_bounds_json() {
    let env = TestEnv::new("");
    let output = run(
        &env.config_file,
        &["bounds", "--orientation", "landscape-right", "--json"],
    );
    assert_success(&output);

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["orientation"], "landscape-right");
    assert_eq!(result["width"], 480.0);
    assert_eq!(result["height"], 320.0);
}

// ============================================================================
// Preference Command Tests
// ============================================================================

#[test]
fn test_prefs_json() {
    let env = TestEnv::new("Example Mobile");
    env.write_settings("enabled = true\ndarkVariant = 2\n");

    let output = run(&env.config_file, &["prefs", "--json"]);
    assert_success(&output);

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["enabled"], true);
    assert_eq!(result["theme"], "oreo");
    assert_eq!(result["using_dark"], true);
    assert_eq!(result["colors"]["background"], "#202124");
    assert_eq!(result["carrier"], "Example Mobile");
}

#[test]
fn test_prefs_with_corrupt_settings() {
    let env = TestEnv::new("");
    env.write_settings("not toml at all [");

    let output = run(&env.config_file, &["prefs"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enabled: no"));
    assert!(stdout.contains("Theme: nexus"));
}

#[test]
fn test_toggles_json() {
    let env = TestEnv::new("");
    write_toggle(&env.toggles_dir, "bluetooth", "Bluetooth");
    write_toggle(&env.toggles_dir, "wifi", "Wi-Fi");
    env.write_settings("togglesList = [\"wifi\", \"stale\"]\n");

    let output = run(&env.config_file, &["toggles", "--json"]);
    assert_success(&output);

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    let enabled = result["enabled"].as_array().unwrap();
    let disabled = result["disabled"].as_array().unwrap();
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0]["identifier"], "wifi");
    assert_eq!(enabled[0]["display_name"], "Wi-Fi");
    assert_eq!(disabled.len(), 1);
    assert_eq!(disabled[0]["identifier"], "bluetooth");
}

#[test]
fn test_invalid_config_fails() {
    let env = TestEnv::new("");
    std::fs::write(&env.config_file, "[display]\nwidth = -1.0\nheight = 480.0\n").unwrap();

    let output = run(&env.config_file, &["bounds"]);
    assert_ne!(output.status.code(), Some(0));
}
