//! End-to-end tests for `bitola export`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the bitola binary
fn bitola_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bitola")
}

#[test]
fn test_export_xlsx_succeeds() {
    let (rooms_path, temp) = create_temp_rooms_file(ROOMS_BASIC);
    let out_path = temp.path().join("sizing.xlsx");

    let output = Command::new(bitola_bin())
        .args([
            "export",
            "--input",
            rooms_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out_path.exists(), "Spreadsheet should exist");

    // XLSX is a zip container
    let written = fs::read(&out_path).unwrap();
    assert_eq!(&written[..2], b"PK");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 rooms"), "stdout: {stdout}");
}

#[test]
fn test_export_pdf_inferred_from_extension() {
    let (rooms_path, temp) = create_temp_rooms_file(ROOMS_BASIC);
    let out_path = temp.path().join("sizing.pdf");

    let output = Command::new(bitola_bin())
        .args([
            "export",
            "--input",
            rooms_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let written = fs::read(&out_path).unwrap();
    assert_eq!(&written[..5], b"%PDF-");
}

#[test]
fn test_export_json_snapshot_preserves_order_and_override() {
    let (rooms_path, temp) = create_temp_rooms_file(ROOMS_BASIC);
    let out_path = temp.path().join("sizing.json");

    let output = Command::new(bitola_bin())
        .args([
            "export",
            "--input",
            rooms_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let body = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();

    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Quarto");
    assert_eq!(rows[0][1], "12.00 m²");
    assert_eq!(rows[0][5], "-");
    assert_eq!(rows[1][0], "Banheiro");
    assert_eq!(rows[1][1], "4.00 m²");
    assert_eq!(rows[1][5], "6.0 mm² (Chuveiro)");
}

#[test]
fn test_export_empty_rooms_file_fails_without_writing() {
    let (rooms_path, temp) = create_temp_rooms_file("");
    let out_path = temp.path().join("sizing.xlsx");

    let output = Command::new(bitola_bin())
        .args([
            "export",
            "--input",
            rooms_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "Empty export is a validation failure");
    assert!(!out_path.exists(), "No file should be written");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no data to export"), "stderr: {stderr}");
}

#[test]
fn test_export_invalid_entry_fails_before_writing() {
    let (rooms_path, temp) = create_temp_rooms_file(ROOMS_WITH_BAD_WIDTH);
    let out_path = temp.path().join("sizing.xlsx");

    let output = Command::new(bitola_bin())
        .args([
            "export",
            "--input",
            rooms_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!out_path.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("entry #2"), "stderr: {stderr}");
    assert!(stderr.contains("positive number"), "stderr: {stderr}");
}

#[test]
fn test_export_missing_rooms_file_is_io_error() {
    let temp = tempfile::tempdir().unwrap();
    let output = Command::new(bitola_bin())
        .args([
            "export",
            "--input",
            temp.path().join("nope.toml").to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "Missing input is an I/O failure");
}

#[test]
fn test_export_unknown_extension_requires_format_flag() {
    let (rooms_path, temp) = create_temp_rooms_file(ROOMS_BASIC);
    let out_path = temp.path().join("sizing.docx");

    let output = Command::new(bitola_bin())
        .args([
            "export",
            "--input",
            rooms_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--format"), "stderr: {stderr}");
}
