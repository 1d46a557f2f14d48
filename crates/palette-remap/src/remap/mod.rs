//! Palette-to-palette pixel remapping
//!
//! This module turns two extracted palettes into a pixel transform:
//!
//! - [`IndexScaler`] rescales a source palette index into the target range
//! - [`Remapper`] applies the scaled lookup to every pixel of an image
//! - [`recolor`] runs extraction and remapping end to end
//!
//! [`RemapOptions`] selects the scan order and what happens when a scaled
//! index falls past the end of the target palette.

mod error;
mod options;
mod remapper;
mod scaler;

pub use error::RemapError;
pub use options::{IndexPolicy, RemapOptions};
pub use remapper::{recolor, RecolorOutput, RecolorStats, Remapper};
pub use scaler::IndexScaler;
