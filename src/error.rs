use palette_remap::RemapError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from decoding or encoding image bytes.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported file type")]
    UnsupportedFormat,

    #[error("unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),
}

/// Errors from loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors from a complete recolor run.
#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("{}: {source}", .path.display())]
    Remap {
        path: PathBuf,
        #[source]
        source: RemapError,
    },
}
