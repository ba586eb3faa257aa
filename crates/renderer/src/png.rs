//! PNG encoding for 8-bit grayscale image data.
//!
//! Writes a minimal PNG (color type 0, bit depth 8): signature, IHDR, a single
//! zlib-compressed IDAT with filter type 0 on every scanline, and IEND.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::buffer::GrayBuffer;
use crate::error::{RenderError, RenderResult};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Create a grayscale PNG from one byte per pixel, row-major.
///
/// # Arguments
/// - `pixels`: intensity data, `width * height` bytes
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn encode_gray(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    let expected = width.checked_mul(height).ok_or_else(|| {
        RenderError::Encode(format!("{}x{} pixel count overflows", width, height))
    })?;
    if pixels.len() != expected {
        return Err(RenderError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let header_width = u32::try_from(width)
        .map_err(|_| RenderError::Encode(format!("width {} does not fit a PNG header", width)))?;
    let header_height = u32::try_from(height)
        .map_err(|_| RenderError::Encode(format!("height {} does not fit a PNG header", height)))?;

    let mut png = Vec::new();

    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&header_width.to_be_bytes());
    ihdr_data.extend_from_slice(&header_height.to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(0); // color type 0 = grayscale
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let idat_data = deflate_idat_gray(pixels, width, height)
        .map_err(|e| RenderError::Encode(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode a finished buffer.
pub fn encode_buffer(buffer: &GrayBuffer) -> RenderResult<Vec<u8>> {
    encode_gray(buffer.as_bytes(), buffer.width(), buffer.height())
}

/// Encode `buffer` and write it to `path`.
///
/// The image is fully encoded before the file is created, so an encoding
/// failure never leaves a partial file behind.
pub fn write_png(path: &Path, buffer: &GrayBuffer) -> RenderResult<()> {
    let png = encode_buffer(buffer)?;
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(&png).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    tracing::debug!(path = %path.display(), bytes = png.len(), "PNG written");
    Ok(())
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    // CRC covers chunk type and data, not the length
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate grayscale image data for the IDAT chunk.
fn deflate_idat_gray(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    // Each scanline is: filter byte (0 = none) + width intensity bytes
    let mut uncompressed = Vec::with_capacity(height * (1 + width));
    for row in pixels.chunks_exact(width) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}
