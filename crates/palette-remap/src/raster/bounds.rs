//! Integer image rectangle and deterministic point iteration.

/// Order in which the pixels of a [`Bounds`] are visited.
///
/// The order decides which of several equally bright colors is seen first,
/// and that in turn fixes their relative position in an extracted palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Columns left to right, each column top to bottom (x outer, y inner).
    #[default]
    ColumnMajor,
    /// Rows top to bottom, each row left to right (y outer, x inner).
    RowMajor,
}

/// A half-open rectangle `[min_x, max_x) x [min_y, max_y)`.
///
/// Images decoded from files start at the origin, but the bounds are kept
/// explicit so an output grid can reproduce its source's exact coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Create bounds from corner coordinates.
    ///
    /// Inverted rectangles are normalized to empty ones (`max = min`).
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    /// Bounds of a `width x height` image anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }

    #[inline]
    pub fn width(&self) -> usize {
        extent(self.min_x, self.max_x)
    }

    #[inline]
    pub fn height(&self) -> usize {
        extent(self.min_y, self.max_y)
    }

    /// Number of pixels covered, saturating at `usize::MAX`.
    #[inline]
    pub fn area(&self) -> usize {
        self.checked_area().unwrap_or(usize::MAX)
    }

    /// Number of pixels covered, or `None` if it does not fit in a `usize`.
    #[inline]
    pub fn checked_area(&self) -> Option<usize> {
        self.width().checked_mul(self.height())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..self.max_x).contains(&x) && (self.min_y..self.max_y).contains(&y)
    }

    /// Iterate over every point in the given order.
    pub fn points(&self, order: ScanOrder) -> Points {
        Points {
            bounds: *self,
            order,
            next: 0,
        }
    }
}

/// Length of `[min, max)`, zero when inverted. Never overflows for any `i32` pair.
#[inline]
fn extent(min: i32, max: i32) -> usize {
    if max > min {
        max.abs_diff(min) as usize
    } else {
        0
    }
}

/// `base + delta`, where the sum is known to lie inside the bounds.
#[inline]
fn shift(base: i32, delta: usize) -> i32 {
    (i64::from(base) + delta as i64) as i32
}

fn saturate(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Iterator over the `(x, y)` points of a [`Bounds`].
#[derive(Debug, Clone)]
pub struct Points {
    bounds: Bounds,
    order: ScanOrder,
    next: usize,
}

impl Iterator for Points {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.bounds.area() {
            return None;
        }
        let (w, h) = (self.bounds.width(), self.bounds.height());
        let (dx, dy) = match self.order {
            ScanOrder::ColumnMajor => (self.next / h, self.next % h),
            ScanOrder::RowMajor => (self.next % w, self.next / w),
        };
        self.next += 1;
        Some((shift(self.bounds.min_x, dx), shift(self.bounds.min_y, dy)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.area().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points {}
