//! Complex-plane viewport.

use serde::Serialize;

use crate::{Complex, Dimensions};

/// Rectangular region of the complex plane mapped onto the image.
///
/// The corners are taken as given: no orientation is enforced, so a viewport
/// whose `lower_right` sits above or left of `upper_left` simply mirrors the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub upper_left: Complex,
    pub lower_right: Complex,
}

impl Viewport {
    pub fn new(upper_left: Complex, lower_right: Complex) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// Extent along the real axis (may be negative).
    pub fn span_re(&self) -> f64 {
        self.lower_right.re - self.upper_left.re
    }

    /// Extent along the imaginary axis (may be negative).
    pub fn span_im(&self) -> f64 {
        self.lower_right.im - self.upper_left.im
    }

    /// Distance between adjacent pixels on each axis for the given raster.
    pub fn pixel_step(&self, dims: Dimensions) -> Complex {
        Complex::new(
            self.span_re() / dims.width() as f64,
            self.span_im() / dims.height() as f64,
        )
    }

    /// Check if a point lies in the closed rectangle spanned by the corners,
    /// widened by `tolerance` on every side.
    pub fn contains(&self, point: Complex, tolerance: f64) -> bool {
        let (min_re, max_re) = ordered(self.upper_left.re, self.lower_right.re);
        let (min_im, max_im) = ordered(self.upper_left.im, self.lower_right.im);
        point.re >= min_re - tolerance
            && point.re <= max_re + tolerance
            && point.im >= min_im - tolerance
            && point.im <= max_im + tolerance
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
