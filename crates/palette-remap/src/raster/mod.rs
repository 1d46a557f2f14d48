//! Pixel grids and their iteration order
//!
//! [`Raster`] owns a grid of [`Rgba`](crate::Rgba) pixels addressed through
//! integer [`Bounds`]. [`ScanOrder`] fixes the order in which palette
//! extraction and remapping visit those pixels.

mod bounds;
mod error;
mod raster;

pub use bounds::{Bounds, Points, ScanOrder};
pub use error::RasterError;
pub use raster::Raster;
