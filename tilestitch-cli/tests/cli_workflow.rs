//! Integration tests for the offline CLI commands.
//!
//! Each test points `HOME` at a temporary directory so the user's real
//! `~/.tilestitch/config.ini` is never read or written. None of these
//! commands touch the network.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run a CLI command with `home` as the home directory and capture output.
fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tilestitch"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command")
}

/// Assert a command succeeded.
fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("{} failed:\nstdout: {}\nstderr: {}", context, stdout, stderr);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_plan_default_range() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), &["plan"]);
    assert_success(&output, "plan");

    let text = stdout(&output);
    assert!(text.contains("9 x 6 (54 total)"), "{}", text);
    assert!(text.contains("2304 x 1536 px"), "{}", text);
    // Bottom row first.
    assert!(
        text.contains("https://tile.openstreetmap.org/18/229732/104101.png"),
        "{}",
        text
    );
    assert!(text.contains("... and 51 more"), "{}", text);
}

#[test]
fn test_plan_rejects_inverted_range() {
    let home = TempDir::new().unwrap();

    let output = run_cli(
        home.path(),
        &[
            "plan",
            "--top-left-x",
            "10",
            "--top-left-y",
            "5",
            "--bottom-right-x",
            "5",
            "--bottom-right-y",
            "8",
        ],
    );

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid parameters"), "{}", stderr);
    assert!(stderr.contains("Hint:"), "{}", stderr);
}

#[test]
fn test_stitch_rejects_empty_custom_url_before_downloading() {
    let home = TempDir::new().unwrap();
    let output_file = home.path().join("out.png");

    let output = run_cli(
        home.path(),
        &["stitch", "--url", "   ", "--output", output_file.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("custom URL is empty"), "{}", stderr);
    assert!(!output_file.exists());
}

#[test]
fn test_plan_with_custom_url() {
    let home = TempDir::new().unwrap();

    let output = run_cli(
        home.path(),
        &[
            "plan",
            "--url",
            "https://tiles.example.com/base/{z}/{x}/{y}.png",
            "-z",
            "3",
            "--top-left-x",
            "1",
            "--top-left-y",
            "1",
            "--bottom-right-x",
            "1",
            "--bottom-right-y",
            "1",
        ],
    );
    assert_success(&output, "plan --url");

    let text = stdout(&output);
    assert!(text.contains("1 x 1 (1 total)"), "{}", text);
    assert!(text.contains("https://tiles.example.com/base/3/1/1.png"), "{}", text);
    assert!(!text.contains("more"), "{}", text);
}

#[test]
fn test_presets_lists_all() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), &["presets"]);
    assert_success(&output, "presets");

    let text = stdout(&output);
    assert!(text.contains("* osm"), "{}", text);
    assert!(text.contains("gsi-std"), "{}", text);
    assert!(text.contains("https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/{z}/{x}/{y}.jpg"));
}

#[test]
fn test_config_init_then_plan_uses_file() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join(".tilestitch").join("config.ini");

    let output = run_cli(home.path(), &["config", "init"]);
    assert_success(&output, "config init");
    assert!(config_path.exists());

    let output = run_cli(home.path(), &["config", "path"]);
    assert_success(&output, "config path");
    assert_eq!(stdout(&output).trim(), config_path.display().to_string());

    let content = fs::read_to_string(&config_path)
        .unwrap()
        .replace("preset = osm", "preset = gsi-std")
        .replace("zoom = 18", "zoom = 10");
    fs::write(&config_path, content).unwrap();

    let output = run_cli(
        home.path(),
        &[
            "plan",
            "--top-left-x",
            "908",
            "--top-left-y",
            "403",
            "--bottom-right-x",
            "909",
            "--bottom-right-y",
            "403",
        ],
    );
    assert_success(&output, "plan with config");
    let text = stdout(&output);
    assert!(
        text.contains("https://cyberjapandata.gsi.go.jp/xyz/std/10/908/403.png"),
        "{}",
        text
    );
}

#[test]
fn test_config_init_keeps_existing() {
    let home = TempDir::new().unwrap();

    assert_success(&run_cli(home.path(), &["config", "init"]), "first init");
    let output = run_cli(home.path(), &["config", "init"]);
    assert_success(&output, "second init");
    assert!(stdout(&output).contains("already exists"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), &["config", "show"]);
    assert_success(&output, "config show");

    let text = stdout(&output);
    assert!(text.contains("showing defaults"));
    assert!(text.contains("[range]"));
    assert!(text.contains("top_left_x = 229732"));
}

#[test]
fn test_invalid_config_value_reported() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".tilestitch");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.ini"), "[download]\ntimeout = soon\n").unwrap();

    let output = run_cli(home.path(), &["plan"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("download.timeout"), "{}", stderr);
}
