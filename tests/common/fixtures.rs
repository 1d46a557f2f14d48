//! Test fixtures: colors and PNG files in a scratch directory.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use palette_remap::{Bounds, Raster, Rgba};
use palettizer::codec::{encode_png, EncodeOptions};

/// Named colors used across tests
pub mod colors {
    use palette_remap::Rgba;

    pub const BLACK: Rgba = Rgba::opaque_u8(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque_u8(255, 255, 255);
    pub const GRAY: Rgba = Rgba::opaque_u8(128, 128, 128);
    pub const NAVY: Rgba = Rgba::opaque_u8(0, 0, 128);
    pub const ORANGE: Rgba = Rgba::opaque_u8(255, 165, 0);
    pub const CLEAR: Rgba = Rgba::from_u8(12, 34, 56, 0);
}

/// A temporary directory holding input and output images.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of a file inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an RGBA raster as a PNG and return its path
    pub fn write_raster(&self, name: &str, raster: &Raster) -> PathBuf {
        let bytes = encode_png(raster, &EncodeOptions::default()).expect("Failed to encode PNG");
        self.write_bytes(name, &bytes)
    }

    /// Write a `width x height` image from row-major pixels
    pub fn write_image(&self, name: &str, width: u32, height: u32, pixels: &[Rgba]) -> PathBuf {
        let raster = Raster::from_pixels(Bounds::from_size(width, height), pixels.to_vec())
            .expect("pixel count must match dimensions");
        self.write_raster(name, &raster)
    }

    /// Write an 8-bit indexed PNG with the given palette and optional tRNS
    pub fn write_indexed(
        &self,
        name: &str,
        width: u32,
        height: u32,
        plte: &[u8],
        trns: Option<&[u8]>,
        indices: &[u8],
    ) -> PathBuf {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(plte.to_vec());
            if let Some(trns) = trns {
                encoder.set_trns(trns.to_vec());
            }
            let mut writer = encoder.write_header().expect("Failed to write header");
            writer
                .write_image_data(indices)
                .expect("Failed to write image data");
        }
        self.write_bytes(name, &buf)
    }

    /// Write arbitrary bytes
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }
}

/// Decode a PNG written by the code under test
pub fn read_png(path: &Path) -> Raster {
    let bytes = std::fs::read(path).expect("Failed to read output");
    palettizer::codec::decode_png(&bytes).expect("Output should be a valid PNG")
}
