//! 16-bit RGBA color
//!
//! Components are straight (not premultiplied) intensities in `0..=65535`.

/// Scale factor between 8-bit and 16-bit channels (`65535 / 255`).
const U8_TO_U16: u16 = 257;

/// A color with red, green, blue and alpha channels.
///
/// Equality and hashing are exact and component-wise, so two colors are the
/// same palette entry only if all four channels match.
///
/// 8-bit values are widened by multiplying by 257, which maps `0` to `0` and
/// `255` to `65535` and keeps the conversion lossless in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=65535)
    pub r: u16,
    /// Green channel (0..=65535)
    pub g: u16,
    /// Blue channel (0..=65535)
    pub b: u16,
    /// Alpha channel (0 = transparent, 65535 = opaque)
    pub a: u16,
}

impl Rgba {
    /// Fully transparent black, used to fill freshly allocated rasters.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a color from 16-bit channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use palette_remap::Rgba;
    /// let white = Rgba::from_u8(255, 255, 255, 255);
    /// assert_eq!(white.r, u16::MAX);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as u16 * U8_TO_U16,
            g: g as u16 * U8_TO_U16,
            b: b as u16 * U8_TO_U16,
            a: a as u16 * U8_TO_U16,
        }
    }

    /// Create an opaque color from 8-bit RGB channels.
    #[inline]
    pub const fn opaque_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_u8(r, g, b, u8::MAX)
    }

    /// Sum of the red, green and blue channels.
    ///
    /// Alpha is ignored and no gamma or weighting is applied. The value is only
    /// meaningful as a sort key. Channels are straight (not premultiplied), so
    /// a faint pixel ranks by its full color rather than by `color * alpha`.
    #[inline]
    pub fn brightness(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    /// Returns `true` if alpha is exactly zero.
    ///
    /// Any non-zero alpha counts as opaque.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Returns `true` if every channel survives a round trip through 8 bits.
    #[inline]
    pub fn is_8bit_exact(self) -> bool {
        self.to_u16().iter().all(|&c| c % U8_TO_U16 == 0)
    }

    /// Convert to `[R, G, B, A]` bytes, rounding to the nearest 8-bit value.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        self.to_u16().map(|c| ((c as u32 + 128) / U8_TO_U16 as u32) as u8)
    }

    /// Channels as `[R, G, B, A]`.
    #[inline]
    pub fn to_u16(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
