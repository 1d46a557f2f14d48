//! Palettizer
//!
//! Recolors a "value" image with the palette of a second image, matching
//! colors by brightness rank. This library exposes modules for integration
//! testing; the algorithm itself lives in the `palette-remap` crate.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
