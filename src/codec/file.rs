use super::png_codec::{decode_png, encode_png, EncodeOptions};
use crate::error::RecolorError;
use palette_remap::Raster;
use std::path::Path;

/// Read and decode an image file
pub fn read_image(path: &Path) -> Result<Raster, RecolorError> {
    let bytes = std::fs::read(path).map_err(|source| RecolorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_png(&bytes).map_err(|source| RecolorError::Codec {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}

/// Encode `image` and write it to `path`, returning the number of bytes written.
///
/// Encoding finishes in memory before the file is opened, so an encode error
/// never creates or truncates `path`.
pub fn write_image(
    path: &Path,
    image: &Raster,
    options: &EncodeOptions,
) -> Result<usize, RecolorError> {
    let bytes = encode_png(image, options).map_err(|source| RecolorError::Codec {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, &bytes).map_err(|source| RecolorError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}
