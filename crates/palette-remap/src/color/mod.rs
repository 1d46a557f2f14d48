//! Color type for palette extraction and remapping
//!
//! All pixels are carried as [`Rgba`], a 16-bit straight-alpha color. 8-bit
//! sources are widened on the way in so that colors from 8-bit and 16-bit
//! images compare exactly.
//!
//! # Example
//!
//! ```
//! use palette_remap::Rgba;
//!
//! let grey = Rgba::from_u8(128, 128, 128, 255);
//! assert_eq!(grey.brightness(), 3 * 128 * 257);
//! assert!(!grey.is_transparent());
//! ```

mod rgba;

pub use rgba::Rgba;
