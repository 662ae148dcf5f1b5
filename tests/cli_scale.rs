//! CLI integration tests for the --scale option
//!
//! These tests verify end-to-end behavior of the --scale flag by running the
//! binary and checking output image dimensions.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// marks.txt is 6x3 fields: (6 + 1) * 22 by (3 + 1) * 22
const MARKS_SIZE: (u32, u32) = (154, 88);

fn goban() -> Command {
    Command::new(env!("CARGO_BIN_EXE_goban"))
}

/// Get image dimensions from a PNG file
fn get_image_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).expect("Failed to open output image");
    (img.width(), img.height())
}

fn render_scaled(temp: &TempDir, scale: Option<&str>) -> std::process::Output {
    let output_path = temp.path().join("marks.png");
    let mut cmd = goban();
    cmd.arg("render")
        .arg("tests/fixtures/valid/marks.txt")
        .arg("-o")
        .arg(&output_path)
        .arg("--no-config");
    if let Some(scale) = scale {
        cmd.arg("--scale").arg(scale);
    }
    cmd.output().expect("Failed to execute goban")
}

/// Test that default scale (1) produces original-size output
#[test]
fn test_scale_default() {
    let temp = TempDir::new().unwrap();
    let output = render_scaled(&temp, None);
    assert!(output.status.success(), "Render failed: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(get_image_dimensions(&temp.path().join("marks.png")), MARKS_SIZE);
}

/// Test --scale 2 doubles the output dimensions
#[test]
fn test_scale_2x() {
    let temp = TempDir::new().unwrap();
    let output = render_scaled(&temp, Some("2"));
    assert!(
        output.status.success(),
        "Render with --scale 2 failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        get_image_dimensions(&temp.path().join("marks.png")),
        (MARKS_SIZE.0 * 2, MARKS_SIZE.1 * 2)
    );
}

/// Scaled pixels are exact copies of the original
#[test]
fn test_scale_nearest_neighbor() {
    let temp = TempDir::new().unwrap();
    assert!(render_scaled(&temp, None).status.success());
    let small = image::open(temp.path().join("marks.png")).unwrap().to_rgba8();
    assert!(render_scaled(&temp, Some("3")).status.success());
    let large = image::open(temp.path().join("marks.png")).unwrap().to_rgba8();

    for (x, y) in [(0, 0), (22, 22), (44, 22), (100, 60)] {
        assert_eq!(small.get_pixel(x, y), large.get_pixel(x * 3 + 1, y * 3 + 2));
    }
}

/// Out-of-range scale factors are rejected by argument parsing
#[test]
fn test_scale_out_of_range() {
    let temp = TempDir::new().unwrap();
    for scale in ["0", "17"] {
        let output = render_scaled(&temp, Some(scale));
        assert_eq!(output.status.code(), Some(2), "scale {}", scale);
    }
    assert!(!temp.path().join("marks.png").exists());
}

/// Scale from goban.toml applies when --scale is absent and loses to it otherwise
#[test]
fn test_scale_from_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("goban.toml"), "[output]\nscale = 2\n").unwrap();
    let input = temp.path().join("marks.txt");
    fs::copy("tests/fixtures/valid/marks.txt", &input).unwrap();

    let output = goban().arg("render").arg(&input).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let png = temp.path().join("marks.png");
    assert_eq!(get_image_dimensions(&png), (MARKS_SIZE.0 * 2, MARKS_SIZE.1 * 2));

    let output = goban().arg("render").arg(&input).arg("--scale").arg("1").output().unwrap();
    assert!(output.status.success());
    assert_eq!(get_image_dimensions(&png), MARKS_SIZE);
}
