//! Integration tests for `hauktui init`
//!
//! Spawns the built binary in a temp directory and verifies the scaffolded
//! configuration on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Helper to get the path to the hauktui binary
fn hauktui_binary() -> PathBuf {
    // In tests, the binary is in target/debug or target/release
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from hauktui-cli to the workspace root
    path.push("target");

    if cfg!(debug_assertions) {
        path.join("debug/hauktui")
    } else {
        path.join("release/hauktui")
    }
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(hauktui_binary())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run hauktui")
}

#[test]
fn test_init_creates_config_and_components_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["init"]);
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let config_path = temp_dir.path().join("hauktui.yml");
    assert!(config_path.exists(), "hauktui.yml should exist");

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("apiVersion: hauktui.dev/v1"));
    assert!(content.contains("kind: Project"));
    assert!(content.contains("componentsDir: src/components/ui"));

    let components_dir = temp_dir.path().join("src/components/ui");
    assert!(components_dir.is_dir(), "components directory should exist");
}

#[test]
fn test_init_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["init"]);
    assert!(output.status.success());

    let config_path = temp_dir.path().join("hauktui.yml");
    let original = fs::read_to_string(&config_path).unwrap();

    let output = run_in(temp_dir.path(), &["init"]);
    assert!(output.status.success(), "second init should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("already initialized"),
        "second init should say the project already exists, got: {stdout}"
    );

    assert_eq!(
        original,
        fs::read_to_string(&config_path).unwrap(),
        "running init twice should not modify the config"
    );
}

#[test]
fn test_init_with_custom_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["init", "--dir", "app/widgets"]);
    assert!(output.status.success());

    let content = fs::read_to_string(temp_dir.path().join("hauktui.yml")).unwrap();
    assert!(content.contains("componentsDir: app/widgets"));
    assert!(temp_dir.path().join("app/widgets").is_dir());

    // Subsequent adds land in the configured directory
    let output = run_in(temp_dir.path(), &["add", "button"]);
    assert!(output.status.success());
    assert!(temp_dir.path().join("app/widgets/button.tsx").exists());
}
