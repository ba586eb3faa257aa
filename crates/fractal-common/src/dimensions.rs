//! Image dimensions.

use std::fmt;

use crate::error::{ParseError, ParseResult};

/// Largest width or height a PNG can describe (2^31 - 1).
pub const MAX_SIDE: usize = (1 << 31) - 1;

/// Width and height of the output raster, in pixels.
///
/// Both sides are guaranteed non-zero, so coordinate mapping never divides by zero,
/// and `width * height` is guaranteed not to overflow `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Create dimensions, rejecting a zero width or height and sizes whose
    /// sides exceed [`MAX_SIDE`] or whose pixel count overflows `usize`.
    pub fn new(width: usize, height: usize) -> ParseResult<Self> {
        if width == 0 || height == 0 {
            return Err(ParseError::DegenerateDimensions { width, height });
        }
        if width > MAX_SIDE || height > MAX_SIDE || width.checked_mul(height).is_none() {
            return Err(ParseError::DimensionsTooLarge {
                width,
                height,
                max_side: MAX_SIDE,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
