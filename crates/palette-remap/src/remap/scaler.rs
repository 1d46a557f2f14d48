//! Ratio rescaling of palette indices.

use super::error::RemapError;
use super::options::IndexPolicy;

/// Maps an index in a source palette to an index in a target palette.
///
/// The ratio `target_len / source_len` is computed once as `f64`; each index
/// is multiplied by it and truncated toward zero. The mapping is therefore
/// non-decreasing, and with a ratio of exactly 1 it is the identity.
///
/// # Example
///
/// ```
/// use palette_remap::{IndexPolicy, IndexScaler};
///
/// let scaler = IndexScaler::new(4, 2, IndexPolicy::Clamp).unwrap();
/// let mapped: Vec<_> = (0..4).map(|i| scaler.scale(i).unwrap()).collect();
/// assert_eq!(mapped, vec![0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexScaler {
    ratio: f64,
    target_len: usize,
    policy: IndexPolicy,
}

impl IndexScaler {
    /// Create a scaler for palettes of the given lengths.
    ///
    /// # Errors
    ///
    /// - [`RemapError::EmptySourcePalette`] if `source_len` is zero (the ratio
    ///   would divide by zero)
    /// - [`RemapError::EmptyTargetPalette`] if `target_len` is zero (there is
    ///   no color to map to)
    pub fn new(
        source_len: usize,
        target_len: usize,
        policy: IndexPolicy,
    ) -> Result<Self, RemapError> {
        if source_len == 0 {
            return Err(RemapError::EmptySourcePalette);
        }
        if target_len == 0 {
            return Err(RemapError::EmptyTargetPalette);
        }
        Ok(Self {
            ratio: target_len as f64 / source_len as f64,
            target_len,
            policy,
        })
    }

    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// `floor(index * ratio)` with no bounds check.
    #[inline]
    pub fn unchecked(&self, index: usize) -> usize {
        // Float-to-int `as` truncates toward zero and saturates.
        (index as f64 * self.ratio) as usize
    }

    /// Scaled index, bounded according to the policy.
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::IndexOutOfRange`] under [`IndexPolicy::Strict`]
    /// when the truncated product is not below the target length.
    #[inline]
    pub fn scale(&self, index: usize) -> Result<usize, RemapError> {
        let mapped = self.unchecked(index);
        if mapped < self.target_len {
            return Ok(mapped);
        }
        match self.policy {
            IndexPolicy::Clamp => Ok(self.target_len - 1),
            IndexPolicy::Strict => Err(RemapError::IndexOutOfRange {
                index,
                mapped,
                len: self.target_len,
            }),
        }
    }
}
