//! Remapper -- applies a scaled palette lookup to every pixel.

use super::error::RemapError;
use super::options::RemapOptions;
use super::scaler::IndexScaler;
use crate::color::Rgba;
use crate::palette::Palette;
use crate::raster::Raster;

/// Recolors images from one palette into another.
///
/// The `source` palette ranks the colors of the image being recolored; the
/// `target` palette supplies replacement colors. A source color at index `i`
/// becomes `target[floor(i * len(target) / len(source))]`.
///
/// The full index table is computed when the remapper is built, so
/// [`remap()`](Self::remap) only does a hash lookup and a table read per pixel
/// and takes `&self`. One remapper can recolor any number of images.
///
/// # Example
///
/// ```
/// use palette_remap::{Bounds, Palette, Raster, Remapper, Rgba};
///
/// let black = Rgba::opaque_u8(0, 0, 0);
/// let white = Rgba::opaque_u8(255, 255, 255);
/// let image = Raster::from_pixels(Bounds::from_size(2, 1), vec![black, white]).unwrap();
///
/// let source = Palette::extract(&image);
/// let target = Palette::from_colors([Rgba::opaque_u8(0, 0, 128), Rgba::opaque_u8(255, 255, 0)]);
///
/// let remapper = Remapper::new(source, target).unwrap();
/// let out = remapper.remap(&image);
/// assert_eq!(out.get(0, 0), Some(Rgba::opaque_u8(0, 0, 128)));
/// assert_eq!(out.get(1, 0), Some(Rgba::opaque_u8(255, 255, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Remapper {
    source: Palette,
    target: Palette,
    options: RemapOptions,
    scaler: IndexScaler,
    /// `table[i]` is the target index for source index `i`.
    table: Vec<usize>,
    /// Source indices whose scaled value had to be clamped.
    clamped: usize,
}

impl Remapper {
    /// Build a remapper with default options.
    ///
    /// # Errors
    ///
    /// See [`with_options`](Self::with_options).
    pub fn new(source: Palette, target: Palette) -> Result<Self, RemapError> {
        Self::with_options(source, target, RemapOptions::default())
    }

    /// Build a remapper with explicit options.
    ///
    /// # Errors
    ///
    /// - [`RemapError::EmptySourcePalette`] if `source` is empty
    /// - [`RemapError::EmptyTargetPalette`] if `target` is empty
    /// - [`RemapError::IndexOutOfRange`] if a scaled index overshoots under
    ///   [`IndexPolicy::Strict`](super::IndexPolicy::Strict)
    pub fn with_options(
        source: Palette,
        target: Palette,
        options: RemapOptions,
    ) -> Result<Self, RemapError> {
        let scaler = IndexScaler::new(source.len(), target.len(), options.index_policy)?;
        let (table, clamped) = build_table(&scaler, source.len())?;

        Ok(Self {
            source,
            target,
            options,
            scaler,
            table,
            clamped,
        })
    }

    #[inline]
    pub fn source(&self) -> &Palette {
        &self.source
    }

    /// `len(target) / len(source)`.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.scaler.ratio()
    }

    /// Target index for each source index, in source order.
    #[inline]
    pub fn mapping(&self) -> &[usize] {
        &self.table
    }

    /// Number of source indices that were clamped into range.
    #[inline]
    pub fn clamped(&self) -> usize {
        self.clamped
    }

    /// Replacement for a single color, or `None` if it is not in the source palette.
    #[inline]
    pub fn map_color(&self, color: Rgba) -> Option<Rgba> {
        let i = self.source.index_of(color)?;
        self.target.get(self.table[i])
    }

    /// Recolor an image.
    ///
    /// The output has exactly the bounds of `image`. Pixels whose color is not
    /// in the source palette are copied unchanged.
    pub fn remap(&self, image: &Raster) -> Raster {
        self.remap_counted(image).0
    }

    /// Recolor an image and report how many pixels were replaced.
    pub fn remap_with_stats(&self, image: &Raster) -> (Raster, RecolorStats) {
        let (out, remapped, passed_through) = self.remap_counted(image);
        let stats = RecolorStats {
            source_colors: self.source.len(),
            target_colors: self.target.len(),
            ratio: self.ratio(),
            remapped,
            passed_through,
            clamped_indices: self.clamped,
        };
        (out, stats)
    }

    fn remap_counted(&self, image: &Raster) -> (Raster, usize, usize) {
        let mut out = Raster::new(image.bounds());
        let (mut remapped, mut passed_through) = (0, 0);
        for (x, y, color) in image.scan(self.options.scan_order) {
            let replacement = match self.map_color(color) {
                Some(c) => {
                    remapped += 1;
                    c
                }
                None => {
                    passed_through += 1;
                    color
                }
            };
            out.set(x, y, replacement);
        }
        (out, remapped, passed_through)
    }
}

/// Scale every index in `0..len`, counting the ones the policy clamped.
fn build_table(scaler: &IndexScaler, len: usize) -> Result<(Vec<usize>, usize), RemapError> {
    let mut clamped = 0;
    let table = (0..len)
        .map(|i| {
            let mapped = scaler.scale(i)?;
            if mapped != scaler.unchecked(i) {
                clamped += 1;
            }
            Ok(mapped)
        })
        .collect::<Result<Vec<_>, RemapError>>()?;
    Ok((table, clamped))
}

/// Counters describing one recolor pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecolorStats {
    /// Colors in the value image's palette.
    pub source_colors: usize,
    /// Colors in the palette image's palette.
    pub target_colors: usize,
    /// `target_colors / source_colors`.
    pub ratio: f64,
    /// Pixels replaced with a target color.
    pub remapped: usize,
    /// Pixels copied through unchanged.
    pub passed_through: usize,
    /// Source indices clamped under [`IndexPolicy::Clamp`](super::IndexPolicy::Clamp).
    pub clamped_indices: usize,
}

/// Result of [`recolor`].
#[derive(Debug, Clone)]
pub struct RecolorOutput {
    pub image: Raster,
    pub stats: RecolorStats,
}

/// Recolor `value` with the palette of `palette`.
///
/// Extracts both palettes with `options.scan_order`, builds a [`Remapper`]
/// and applies it to `value`.
///
/// # Errors
///
/// Fails before touching any pixel if either image has no opaque pixels, or
/// under [`IndexPolicy::Strict`](super::IndexPolicy::Strict) if an index
/// would overshoot.
pub fn recolor(
    value: &Raster,
    palette: &Raster,
    options: &RemapOptions,
) -> Result<RecolorOutput, RemapError> {
    let source = Palette::extract_with(value, options.scan_order);
    let target = Palette::extract_with(palette, options.scan_order);
    let remapper = Remapper::with_options(source, target, *options)?;
    let (image, stats) = remapper.remap_with_stats(value);
    Ok(RecolorOutput { image, stats })
}
