//! Palette extraction with stable brightness ordering.

use std::collections::{HashMap, HashSet};

use crate::color::Rgba;
use crate::raster::{Raster, ScanOrder};

/// An ordered, duplicate-free sequence of opaque colors.
///
/// Entries are sorted ascending by [`Rgba::brightness`]. Colors with equal
/// brightness keep the order in which they were first encountered, so two
/// extractions of the same image with the same [`ScanOrder`] always agree.
///
/// A color-to-index table is built once at construction, making
/// [`index_of`](Palette::index_of) a constant-time lookup.
///
/// # Example
///
/// ```
/// use palette_remap::{Palette, Rgba};
///
/// let white = Rgba::opaque_u8(255, 255, 255);
/// let black = Rgba::opaque_u8(0, 0, 0);
/// let palette = Palette::from_colors([white, black, white]);
///
/// assert_eq!(palette.colors(), &[black, white]);
/// assert_eq!(palette.index_of(white), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Rgba>,
    index: HashMap<Rgba, usize>,
}

impl Palette {
    /// Extract the palette of an image, scanning column by column.
    pub fn extract(image: &Raster) -> Self {
        Self::extract_with(image, ScanOrder::default())
    }

    /// Extract the palette of an image using an explicit scan order.
    ///
    /// Transparent pixels (alpha exactly zero) are skipped. A fully transparent
    /// or empty image yields an empty palette.
    pub fn extract_with(image: &Raster, order: ScanOrder) -> Self {
        Self::from_colors(image.scan(order).map(|(_, _, color)| color))
    }

    /// Build a palette from colors in encounter order.
    ///
    /// Transparent colors are dropped, the first occurrence of each remaining
    /// color is kept, and the result is stable-sorted by brightness.
    pub fn from_colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Rgba>,
    {
        // Dedup before sorting: equal colors share a brightness but a third
        // color of the same brightness can sit between them after the sort.
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for color in colors {
            if !color.is_transparent() && seen.insert(color) {
                unique.push(color);
            }
        }

        // sort_by_key is stable
        unique.sort_by_key(|c| c.brightness());

        let index = unique.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self {
            colors: unique,
            index,
        }
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).copied()
    }

    /// All colors, darkest first.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.colors.iter().copied()
    }

    /// Position of `color` in the palette.
    ///
    /// Returns `None` for colors the palette was not built from, which for an
    /// extracted palette means the transparent pixels of its source image.
    #[inline]
    pub fn index_of(&self, color: Rgba) -> Option<usize> {
        self.index.get(&color).copied()
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl Eq for Palette {}
