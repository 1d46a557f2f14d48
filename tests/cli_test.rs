//! Tests for the palettizer binary: arguments, exit status and output.

mod common;

use common::fixtures::{colors::*, read_png};
use common::{assert_not_written, Workspace};
use std::process::Command;

fn palettizer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_palettizer"));
    cmd.env_remove("PALETTIZER_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_recolor_via_cli() {
    let ws = Workspace::new();
    let source = ws.write_image("value.png", 2, 1, &[BLACK, WHITE]);
    let palette = ws.write_image("palette.png", 1, 1, &[GRAY]);
    let output = ws.path("out.png");

    let result = palettizer()
        .arg(&source)
        .arg(&palette)
        .arg(&output)
        .output()
        .expect("Failed to run palettizer");

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Wrote"), "stdout: {stdout}");
    assert_eq!(read_png(&output).pixels(), &[GRAY, GRAY]);
}

#[test]
fn test_wrong_arity_is_usage_error() {
    let ws = Workspace::new();
    let source = ws.write_image("value.png", 1, 1, &[BLACK]);
    let output = ws.path("out.png");

    let result = palettizer()
        .arg(&source)
        .arg(&output)
        .output()
        .expect("Failed to run palettizer");

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage"));
    assert_not_written(&output);
}

#[test]
fn test_empty_palette_exits_nonzero() {
    let ws = Workspace::new();
    let source = ws.write_image("value.png", 1, 1, &[CLEAR]);
    let palette = ws.write_image("palette.png", 1, 1, &[GRAY]);
    let output = ws.path("out.png");

    let result = palettizer()
        .arg(&source)
        .arg(&palette)
        .arg(&output)
        .output()
        .expect("Failed to run palettizer");

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("empty palette"));
    assert_not_written(&output);
}

#[test]
fn test_config_file_and_flag_override() {
    let ws = Workspace::new();
    let red = palette_remap::Rgba::opaque_u8(255, 0, 0);
    let blue = palette_remap::Rgba::opaque_u8(0, 0, 255);
    let source = ws.write_image("value.png", 2, 2, &[BLACK, red, blue, WHITE]);
    let palette = ws.write_image("palette.png", 4, 1, &[BLACK, GRAY, ORANGE, WHITE]);
    let config = ws.write_bytes("palettizer.yaml", b"scan_order: row-major\nlog: off\n");

    let row_out = ws.path("row.png");
    let result = palettizer()
        .arg("--config")
        .arg(&config)
        .arg(&source)
        .arg(&palette)
        .arg(&row_out)
        .output()
        .expect("Failed to run palettizer");
    assert!(result.status.success());
    assert_eq!(read_png(&row_out).get(1, 0), Some(GRAY));

    let column_out = ws.path("column.png");
    let result = palettizer()
        .arg("--config")
        .arg(&config)
        .arg("--scan-order")
        .arg("column-major")
        .arg(&source)
        .arg(&palette)
        .arg(&column_out)
        .output()
        .expect("Failed to run palettizer");
    assert!(result.status.success());
    assert_eq!(read_png(&column_out).get(1, 0), Some(ORANGE));
}

#[test]
fn test_missing_config_file_is_error() {
    let ws = Workspace::new();
    let source = ws.write_image("value.png", 1, 1, &[BLACK]);
    let palette = ws.write_image("palette.png", 1, 1, &[GRAY]);
    let output = ws.path("out.png");

    let result = palettizer()
        .arg("--config")
        .arg(ws.path("absent.yaml"))
        .arg(&source)
        .arg(&palette)
        .arg(&output)
        .output()
        .expect("Failed to run palettizer");

    assert!(!result.status.success());
    assert_not_written(&output);
}
