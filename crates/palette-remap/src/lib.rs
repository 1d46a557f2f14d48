#![allow(clippy::module_inception)]

//! palette-remap: recolor an image through another image's palette
//!
//! The crate builds a brightness-ordered, duplicate-free palette from each of
//! two images and then rewrites the first ("value") image so every pixel takes
//! the color found at the proportionally scaled position in the second image's
//! palette. Dark stays dark, light stays light, and the colors come from the
//! palette image.
//!
//! # Quick Start
//!
//! ```
//! use palette_remap::{recolor, Bounds, Raster, RemapOptions, Rgba};
//!
//! let value = Raster::from_pixels(
//!     Bounds::from_size(2, 1),
//!     vec![Rgba::from_u8(0, 0, 0, 255), Rgba::from_u8(255, 255, 255, 255)],
//! )
//! .unwrap();
//! let palette = Raster::from_pixels(
//!     Bounds::from_size(1, 1),
//!     vec![Rgba::from_u8(128, 128, 128, 255)],
//! )
//! .unwrap();
//!
//! let out = recolor(&value, &palette, &RemapOptions::default()).unwrap();
//! assert_eq!(out.image.get(0, 0), Some(Rgba::from_u8(128, 128, 128, 255)));
//! assert_eq!(out.image.get(1, 0), Some(Rgba::from_u8(128, 128, 128, 255)));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! value image ──> Palette::extract ──┐
//!                                    ├──> Remapper ──> output image
//! palette image ─> Palette::extract ─┘
//! ```
//!
//! 1. [`Palette::extract`] drops transparent pixels (alpha exactly zero),
//!    keeps the first occurrence of every color and stable-sorts by
//!    [`Rgba::brightness`].
//! 2. [`Remapper`] looks each value pixel up in its own palette, scales the
//!    index by `len(target) / len(source)`, truncates, and writes the target
//!    color. Pixels without an index (transparent ones) are copied through.
//!
//! An empty source or target palette is reported as a [`RemapError`] before
//! any pixel is touched.

pub mod color;
pub mod palette;
pub mod raster;
pub mod remap;


pub use color::Rgba;
pub use palette::Palette;
pub use raster::{Bounds, Raster, RasterError, ScanOrder};
pub use remap::{
    recolor, IndexPolicy, IndexScaler, RecolorOutput, RecolorStats, RemapError, RemapOptions,
    Remapper,
};
