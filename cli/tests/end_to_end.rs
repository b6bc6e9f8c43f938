use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ascii-banner"))
        .args(args)
        .output()
        .expect("failed to spawn ascii-banner")
}

fn solid_rgb(dir: &TempDir, name: &str, size: u32, value: u8) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_pixel(size, size, Rgb([value; 3]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn solid_black_renders_darkest_glyph() {
    let dir = TempDir::new().unwrap();
    let image = solid_rgb(&dir, "black.png", 2, 0);

    let out = run(&[path_arg(&image), "--width", "2", "--height", "2", "--chars", "@ "]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "@@\n@@\n");
}

#[test]
fn solid_white_renders_lightest_glyph() {
    let dir = TempDir::new().unwrap();
    let image = solid_rgb(&dir, "white.png", 2, 255);

    let out = run(&[path_arg(&image), "--width", "2", "--height", "2", "--chars", "@ "]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "  \n  \n");
}

#[test]
fn missing_file_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.png");

    let out = run(&[path_arg(&missing)]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("does-not-exist.png"), "stderr: {stderr}");
}

#[test]
fn corrupt_file_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG but not really").unwrap();

    let out = run(&[path_arg(&path)]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn mid_gray_svg_single_tspan() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gray.png");
    GrayImage::from_pixel(1, 1, Luma([128]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let out = run(&[
        path_arg(&path),
        "--format",
        "svg",
        "--width",
        "1",
        "--height",
        "1",
        "--x",
        "5",
        "--y-start",
        "10",
        "--line-height",
        "20",
    ]);

    assert!(out.status.success());
    // floor(128 / 255 * 9) = 4 -> '+'
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "<tspan x=\"5\" y=\"10\">+</tspan>\n"
    );
}

#[test]
fn default_grid_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gradient.png");
    RgbImage::from_fn(200, 120, |x, y| Rgb([(x % 256) as u8, (y * 2 % 256) as u8, 90]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let text = run(&[path_arg(&path)]);
    assert!(text.status.success());
    let stdout = String::from_utf8(text.stdout).unwrap();
    let rows: Vec<&str> = stdout.trim_end_matches('\n').split('\n').collect();
    assert_eq!(rows.len(), 30);
    assert!(rows.iter().all(|row| row.chars().count() == 50));

    let svg = run(&[path_arg(&path), "--format", "svg"]);
    assert!(svg.status.success());
    let stdout = String::from_utf8(svg.stdout).unwrap();
    assert_eq!(stdout.matches("<tspan ").count(), 30);
    for (i, line) in stdout.lines().enumerate() {
        let prefix = format!("<tspan x=\"15\" y=\"{}\">", 30 + i * 20);
        assert!(line.starts_with(&prefix), "line {i}: {line}");
        assert!(line.ends_with("</tspan>"));
    }
}

#[test]
fn svg_escapes_reserved_palette_glyphs() {
    let dir = TempDir::new().unwrap();
    let image = solid_rgb(&dir, "black.png", 3, 0);

    let out = run(&[
        path_arg(&image),
        "--format",
        "svg",
        "--width",
        "3",
        "--height",
        "1",
        "--chars",
        "<>&",
    ]);

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "<tspan x=\"15\" y=\"30\">&lt;&lt;&lt;</tspan>\n"
    );
}

#[test]
fn invert_flips_palette() {
    let dir = TempDir::new().unwrap();
    let image = solid_rgb(&dir, "black.png", 2, 0);

    let out = run(&[
        path_arg(&image),
        "--width",
        "2",
        "--height",
        "1",
        "--chars",
        "@.",
        "--invert",
    ]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "..\n");
}

#[test]
fn empty_palette_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    let image = solid_rgb(&dir, "black.png", 2, 0);

    let out = run(&[path_arg(&image), "--chars", ""]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn zero_width_is_rejected() {
    let dir = TempDir::new().unwrap();
    let image = solid_rgb(&dir, "black.png", 2, 0);

    let out = run(&[path_arg(&image), "--width", "0"]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
