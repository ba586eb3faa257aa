//! Owned single-channel pixel buffer.

use fractal_common::Dimensions;

use crate::error::{RenderError, RenderResult};

/// Row-major grayscale raster, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    dims: Dimensions,
    pixels: Vec<u8>,
}

impl GrayBuffer {
    /// Allocate a black buffer of the given size.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            pixels: vec![0; dims.pixel_count()],
        }
    }

    /// Wrap existing pixel data, checking that it matches `dims`.
    pub fn from_raw(dims: Dimensions, pixels: Vec<u8>) -> RenderResult<Self> {
        if pixels.len() != dims.pixel_count() {
            return Err(RenderError::BufferSizeMismatch {
                expected: dims.pixel_count(),
                actual: pixels.len(),
            });
        }
        Ok(Self { dims, pixels })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width()
    }

    pub fn height(&self) -> usize {
        self.dims.height()
    }

    /// Pixel at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.dims.width() + x]
    }

    /// Set the pixel at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let width = self.dims.width();
        self.pixels[y * width + x] = value;
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.dims.width())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}
