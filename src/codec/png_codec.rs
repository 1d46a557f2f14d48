use crate::error::CodecError;
use crate::models::CompressionSetting;
use palette_remap::{Bounds, Raster, Rgba};
use std::io::Cursor;

/// The eight magic bytes every PNG file starts with
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Output encoding options
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    pub compression: CompressionSetting,
    /// Re-compress with oxipng after encoding
    pub optimize: bool,
}

/// Returns true if `bytes` begins with the PNG signature
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&PNG_SIGNATURE)
}

/// Decode PNG bytes into a raster.
///
/// Indexed, low-bit-depth and tRNS images are expanded by the decoder, so the
/// pixel data is always 8 or 16 bits of gray, gray+alpha, RGB or RGBA. Channels
/// are widened to 16-bit `Rgba`; images without alpha are fully opaque.
pub fn decode_png(bytes: &[u8]) -> Result<Raster, CodecError> {
    if !is_png(bytes) {
        return Err(CodecError::UnsupportedFormat);
    }

    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(CodecError::UnsupportedColorType(other)),
    };
    let wide = info.bit_depth == png::BitDepth::Sixteen;
    let bytes_per_sample = if wide { 2 } else { 1 };

    let pixels: Vec<Rgba> = data
        .chunks_exact(channels * bytes_per_sample)
        .map(|px| {
            let sample = |i: usize| -> u16 {
                if wide {
                    u16::from_be_bytes([px[2 * i], px[2 * i + 1]])
                } else {
                    px[i] as u16 * 257
                }
            };
            match channels {
                1 => Rgba::new(sample(0), sample(0), sample(0), u16::MAX),
                2 => Rgba::new(sample(0), sample(0), sample(0), sample(1)),
                3 => Rgba::new(sample(0), sample(1), sample(2), u16::MAX),
                _ => Rgba::new(sample(0), sample(1), sample(2), sample(3)),
            }
        })
        .collect();

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        bit_depth = ?info.bit_depth,
        "Decoded PNG"
    );

    Raster::from_pixels(Bounds::from_size(info.width, info.height), pixels).map_err(|_| {
        CodecError::UnsupportedDimensions {
            width: info.width as usize,
            height: info.height as usize,
        }
    })
}

/// Encode a raster as an RGBA PNG held in memory.
///
/// Uses 8 bits per channel when every pixel survives the narrowing exactly,
/// otherwise 16 bits.
pub fn encode_png(image: &Raster, options: &EncodeOptions) -> Result<Vec<u8>, CodecError> {
    let (width, height) = match (u32::try_from(image.width()), u32::try_from(image.height())) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(CodecError::UnsupportedDimensions {
                width: image.width(),
                height: image.height(),
            })
        }
    };

    let wide = !image.pixels().iter().all(|p| p.is_8bit_exact());
    let data: Vec<u8> = if wide {
        image
            .pixels()
            .iter()
            .flat_map(|p| p.to_u16())
            .flat_map(u16::to_be_bytes)
            .collect()
    } else {
        image.pixels().iter().flat_map(|p| p.to_u8()).collect()
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(if wide {
            png::BitDepth::Sixteen
        } else {
            png::BitDepth::Eight
        });
        encoder.set_compression(options.compression.into());
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
    }
    let png_bytes = buf.into_inner();

    if !options.optimize {
        return Ok(png_bytes);
    }

    // Re-compress with oxipng (lossless; falls back to the unoptimized bytes)
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            Ok(optimized)
        }
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized output");
            Ok(png_bytes)
        }
    }
}
