//! Image file codecs
//!
//! Converts between encoded image bytes and `palette_remap::Raster`. Only PNG
//! is supported, in every color type and bit depth the `png` crate decodes.

pub mod file;
pub mod png_codec;

pub use file::{read_image, write_image};
pub use png_codec::{decode_png, encode_png, is_png, EncodeOptions, PNG_SIGNATURE};
