// main.rsとエントリーポイントのテスト
use crate::fixtures::{write_corrupted, write_png};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_image_resizer"))
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("image_resizer"));
    assert!(stdout.contains("resize"));
    assert!(stdout.contains("probe"));
    assert!(stdout.contains("formats"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(get_binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("image_resizer"));
}

#[test]
fn test_cli_formats() {
    let output = Command::new(get_binary_path())
        .arg("formats")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("webp"));
    assert!(stdout.contains("jpg"));
}

#[test]
fn test_cli_resize_integration() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_png(temp_dir.path(), "cli.png", 100, 50);
    let report = temp_dir.path().join("report.json");

    let output = Command::new(get_binary_path())
        .arg("resize")
        .arg(&input)
        .args(["--width", "50", "--quiet", "--report"])
        .arg(&report)
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        image::image_dimensions(temp_dir.path().join("cli-resized.png")).unwrap(),
        (50, 25)
    );
    assert!(report.exists());
}

#[test]
fn test_cli_resize_exits_non_zero_on_file_failure() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_png(temp_dir.path(), "good.png", 10, 10);
    let bad = write_corrupted(temp_dir.path(), "bad.png");

    let output = Command::new(get_binary_path())
        .arg("resize")
        .arg(&good)
        .arg(&bad)
        .args(["-p", "50", "--quiet"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(temp_dir.path().join("good-resized.png").exists());
}

#[test]
fn test_cli_resize_rejects_invalid_options() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_png(temp_dir.path(), "a.png", 10, 10);

    let output = Command::new(get_binary_path())
        .arg("resize")
        .arg(&input)
        .output()
        .expect("Failed to execute binary");

    // 幅・高さ・百分率のいずれも指定されていない
    assert!(!output.status.success());
    assert!(!temp_dir.path().join("a-resized.png").exists());
}

#[test]
fn test_cli_probe() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_png(temp_dir.path(), "probe.png", 33, 44);

    let output = Command::new(get_binary_path())
        .arg("probe")
        .arg(&input)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("33 x 44"));
}
