//! Error type for raster construction

use std::fmt;

/// Error returned when a pixel buffer does not fit its bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Buffer length is not `width * height`
    DimensionMismatch {
        /// Number of pixels supplied
        len: usize,
        /// Width of the bounds
        width: usize,
        /// Height of the bounds
        height: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::DimensionMismatch { len, width, height } => write!(
                f,
                "pixel buffer length {} does not match dimensions {}x{}",
                len, width, height
            ),
        }
    }
}

impl std::error::Error for RasterError {}
