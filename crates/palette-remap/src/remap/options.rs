//! Remapping options.

use crate::raster::ScanOrder;

/// What to do when a scaled index reaches past the end of the target palette.
///
/// `floor(i * len(target) / len(source))` is always below `len(target)` in
/// exact arithmetic, but the ratio is a floating-point value and the product
/// can round up at the last index for very large palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Clamp to the last target index.
    #[default]
    Clamp,
    /// Report [`RemapError::IndexOutOfRange`](super::RemapError::IndexOutOfRange).
    Strict,
}

/// Configuration for palette extraction and remapping.
///
/// # Example
///
/// ```
/// use palette_remap::{IndexPolicy, RemapOptions, ScanOrder};
///
/// let options = RemapOptions::new()
///     .scan_order(ScanOrder::RowMajor)
///     .index_policy(IndexPolicy::Strict);
/// assert_eq!(options.scan_order, ScanOrder::RowMajor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemapOptions {
    /// Pixel visiting order for both extraction and remapping.
    ///
    /// Default: [`ScanOrder::ColumnMajor`]
    pub scan_order: ScanOrder,

    /// Handling of out-of-range scaled indices.
    ///
    /// Default: [`IndexPolicy::Clamp`]
    pub index_policy: IndexPolicy,
}

impl RemapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn scan_order(mut self, order: ScanOrder) -> Self {
        self.scan_order = order;
        self
    }

    #[inline]
    pub fn index_policy(mut self, policy: IndexPolicy) -> Self {
        self.index_policy = policy;
        self
    }
}
