//! Error type for remapping

use std::fmt;

/// Error returned when a remap cannot be set up.
///
/// Every variant is detected before the pixel loop starts, so a failed
/// remap never produces a partial image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemapError {
    /// The value image has no opaque pixels, so there is no index range to scale from
    EmptySourcePalette,
    /// The palette image has no opaque pixels, so there are no colors to draw from
    EmptyTargetPalette,
    /// A scaled index landed outside the target palette under [`IndexPolicy::Strict`](super::IndexPolicy::Strict)
    IndexOutOfRange {
        /// Index in the source palette
        index: usize,
        /// Scaled index before bounds checking
        mapped: usize,
        /// Length of the target palette
        len: usize,
    },
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapError::EmptySourcePalette => {
                write!(f, "empty palette: source image has no opaque pixels")
            }
            RemapError::EmptyTargetPalette => {
                write!(f, "empty palette: palette image has no opaque pixels")
            }
            RemapError::IndexOutOfRange { index, mapped, len } => write!(
                f,
                "source index {} scaled to {}, outside target palette of {} colors",
                index, mapped, len
            ),
        }
    }
}

impl std::error::Error for RemapError {}
