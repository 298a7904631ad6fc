use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn pgm2png(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pgm2png"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pgm2png")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_pgm(dir: &Path, name: &str) {
    let mut bytes = b"P5\n2 2\n255\n".to_vec();
    bytes.extend_from_slice(&[10, 20, 30, 40]);
    fs::write(dir.join(name), bytes).unwrap();
}

#[test]
fn no_files_exits_successfully_with_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = pgm2png(dir.path(), &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("=== PGM to PNG Converter ==="));
    assert!(out.contains("No .pgm files found"));
    assert!(!dir.path().join("png_outputs").exists());
}

#[test]
fn converts_current_directory_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_pgm(dir.path(), "scan-01.pgm");
    write_pgm(dir.path(), "scan-02.pgm");

    let output = pgm2png(dir.path(), &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Found 2 .pgm file(s) to convert:"));
    assert!(out.contains("  ✓ Converted: scan-01.pgm → png_outputs/scan-01.png"));
    assert!(out.contains("  ✓ Converted: scan-02.pgm → png_outputs/scan-02.png"));
    assert!(out.contains("Successfully converted 2 out of 2 files."));
    assert!(dir.path().join("png_outputs/scan-01.png").is_file());
    assert!(dir.path().join("png_outputs/scan-02.png").is_file());
}

#[test]
fn per_file_failure_keeps_exit_code_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_pgm(dir.path(), "good.pgm");
    fs::write(dir.path().join("bad.pgm"), b"not a pgm").unwrap();

    let output = pgm2png(dir.path(), &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("  ✗ Error converting bad.pgm:"));
    assert!(out.contains("  ✓ Converted: good.pgm → png_outputs/good.png"));
    assert!(out.contains("Successfully converted 1 out of 2 files."));
    assert!(!dir.path().join("png_outputs/bad.png").exists());
}

#[test]
fn quiet_suppresses_banner_but_not_report() {
    let dir = tempfile::tempdir().unwrap();
    write_pgm(dir.path(), "a.pgm");

    let output = pgm2png(dir.path(), &["--quiet"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.contains("Converter"));
    assert!(out.contains("Successfully converted 1 out of 1 files."));
}

#[test]
fn explicit_directories_are_honoured() {
    let work = tempfile::tempdir().unwrap();
    let scans = work.path().join("scans");
    fs::create_dir(&scans).unwrap();
    write_pgm(&scans, "x.pgm");

    let output = pgm2png(work.path(), &["scans", "-o", "converted"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("  ✓ Converted: x.pgm → converted/x.png"));
    assert!(scans.join("converted/x.png").is_file());
}

#[test]
fn missing_input_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let output = pgm2png(dir.path(), &["nowhere"]);

    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Cannot start conversion"));
    assert!(err.contains("Directory not found"));
}

#[test]
fn transform_writes_suffixed_pgm_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    write_pgm(dir.path(), "lena.pgm");

    let output = pgm2png(dir.path(), &["transform", "-i", "lena.pgm", "--rotation", "90"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("  Rotation angle: 90.00 degrees"));
    assert!(out.contains("Saved transformed image: lena_transformed.pgm (2x2 → 2x2)"));

    let written = dir.path().join("lena_transformed.pgm");
    assert!(fs::read(&written).unwrap().starts_with(b"P5"));
    assert_eq!(image::open(&written).unwrap().to_luma8().dimensions(), (2, 2));
    assert!(!dir.path().join("png_outputs").exists());
}

#[test]
fn transform_honours_explicit_output_and_scale() {
    let dir = tempfile::tempdir().unwrap();
    write_pgm(dir.path(), "lena.pgm");

    let output = pgm2png(
        dir.path(),
        &["transform", "-i", "lena.pgm", "-o", "big.pgm", "--rotation", "0", "--scale", "2", "-q"],
    );

    assert!(output.status.success());
    assert!(!stdout(&output).contains("Rotate and Scale"));
    let written = image::open(dir.path().join("big.pgm")).unwrap();
    assert_eq!((written.width(), written.height()), (4, 4));
}

#[test]
fn transform_rejects_non_positive_scale() {
    let dir = tempfile::tempdir().unwrap();
    write_pgm(dir.path(), "lena.pgm");

    let output = pgm2png(dir.path(), &["transform", "-i", "lena.pgm", "--scale", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Invalid transform parameters"));
    assert!(!dir.path().join("lena_transformed.pgm").exists());
}

#[test]
fn transform_of_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let output = pgm2png(dir.path(), &["transform", "-i", "absent.pgm"]);

    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Cannot transform 'absent.pgm'"));
    assert!(err.contains("File not found"));
}
