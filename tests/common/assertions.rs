//! Assertion helpers for tests.

use palette_remap::Raster;
use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert a file exists and is a PNG
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {}", path.display(), e));
    assert!(
        palettizer::codec::is_png(&bytes),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert no file was created at `path`
pub fn assert_not_written(path: &Path) {
    assert!(
        !path.exists(),
        "Expected no output at {}, but a file was written",
        path.display()
    );
}

/// Assert two rasters have the same bounds and pixels
pub fn assert_same_image(actual: &Raster, expected: &Raster) {
    assert_eq!(actual.bounds(), expected.bounds(), "bounds differ");
    assert_eq!(actual.pixels(), expected.pixels(), "pixels differ");
}
