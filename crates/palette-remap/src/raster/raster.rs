//! Owned pixel grid.

use super::bounds::{Bounds, ScanOrder};
use super::error::RasterError;
use crate::color::Rgba;

/// A 2D grid of [`Rgba`] pixels over integer [`Bounds`].
///
/// Pixels are stored row-major. The storage layout is independent of the
/// [`ScanOrder`] used to visit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    bounds: Bounds,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Allocate a raster covering `bounds`, every pixel transparent.
    ///
    /// # Panics
    ///
    /// Panics if the area of `bounds` cannot be allocated.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            pixels: vec![Rgba::TRANSPARENT; bounds.area()],
        }
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::DimensionMismatch`] if `pixels.len()` is not the
    /// area of `bounds`.
    pub fn from_pixels(bounds: Bounds, pixels: Vec<Rgba>) -> Result<Self, RasterError> {
        if bounds.checked_area() != Some(pixels.len()) {
            return Err(RasterError::DimensionMismatch {
                len: pixels.len(),
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        Ok(Self { bounds, pixels })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height()
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` outside the bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Visit every pixel as `(x, y, color)` in the given order.
    pub fn scan(&self, order: ScanOrder) -> impl Iterator<Item = (i32, i32, Rgba)> + '_ {
        self.bounds.points(order).map(move |(x, y)| {
            // Points never leave the bounds they were generated from.
            let i = self.offset_unchecked(x, y);
            (x, y, self.pixels[i])
        })
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        self.bounds
            .contains(x, y)
            .then(|| self.offset_unchecked(x, y))
    }

    #[inline]
    fn offset_unchecked(&self, x: i32, y: i32) -> usize {
        let dx = x.abs_diff(self.bounds.min_x) as usize;
        let dy = y.abs_diff(self.bounds.min_y) as usize;
        dy * self.bounds.width() + dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Raster {
        // 2x2: row 0 = red, green; row 1 = blue, white
        Raster::from_pixels(
            Bounds::from_size(2, 2),
            vec![
                Rgba::opaque_u8(255, 0, 0),
                Rgba::opaque_u8(0, 255, 0),
                Rgba::opaque_u8(0, 0, 255),
                Rgba::opaque_u8(255, 255, 255),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_is_transparent() {
        let r = Raster::new(Bounds::from_size(3, 3));
        assert_eq!(r.pixels().len(), 9);
        assert!(r.pixels().iter().all(|p| p.is_transparent()));
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let err = Raster::from_pixels(Bounds::from_size(2, 2), vec![Rgba::TRANSPARENT; 3])
            .unwrap_err();
        assert_eq!(
            err,
            RasterError::DimensionMismatch {
                len: 3,
                width: 2,
                height: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "pixel buffer length 3 does not match dimensions 2x2"
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let r = sample();
        assert_eq!(r.get(1, 0), Some(Rgba::opaque_u8(0, 255, 0)));
        assert_eq!(r.get(0, 1), Some(Rgba::opaque_u8(0, 0, 255)));
        assert_eq!(r.get(2, 0), None);
        assert_eq!(r.get(-1, 0), None);
    }

    #[test]
    fn test_set_inside_and_outside() {
        let mut r = Raster::new(Bounds::new(10, 10, 12, 11));
        assert!(r.set(11, 10, Rgba::opaque_u8(1, 2, 3)));
        assert!(!r.set(0, 0, Rgba::opaque_u8(1, 2, 3)));
        assert_eq!(r.get(11, 10), Some(Rgba::opaque_u8(1, 2, 3)));
        assert_eq!(r.pixels()[1], Rgba::opaque_u8(1, 2, 3));
    }

    #[test]
    fn test_offset_far_from_origin() {
        let bounds = Bounds::new(i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN + 1);
        let mut r = Raster::new(bounds);
        assert!(r.set(i32::MAX - 1, i32::MIN, Rgba::opaque_u8(7, 7, 7)));
        assert_eq!(r.pixels()[1], Rgba::opaque_u8(7, 7, 7));
        assert_eq!(r.get(i32::MAX, i32::MIN), None);
    }

    #[test]
    fn test_from_pixels_rejects_overflowing_span() {
        let bounds = Bounds::new(i32::MIN, 0, i32::MAX, 1);
        let err = Raster::from_pixels(bounds, vec![Rgba::TRANSPARENT; 2]).unwrap_err();
        assert_eq!(
            err,
            RasterError::DimensionMismatch {
                len: 2,
                width: u32::MAX as usize,
                height: 1
            }
        );
    }

    #[test]
    fn test_scan_column_major_visits_columns_first() {
        let colors: Vec<_> = sample()
            .scan(ScanOrder::ColumnMajor)
            .map(|(_, _, c)| c)
            .collect();
        assert_eq!(
            colors,
            vec![
                Rgba::opaque_u8(255, 0, 0),
                Rgba::opaque_u8(0, 0, 255),
                Rgba::opaque_u8(0, 255, 0),
                Rgba::opaque_u8(255, 255, 255),
            ]
        );
    }
}
