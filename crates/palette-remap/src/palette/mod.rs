//! Brightness-ordered palettes
//!
//! A [`Palette`] is the set of distinct opaque colors of an image, ordered
//! from darkest to brightest.

mod palette;

pub use palette::Palette;
