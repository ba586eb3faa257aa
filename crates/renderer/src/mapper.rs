//! Pixel to complex-plane coordinate mapping.

use fractal_common::{Complex, Dimensions, Viewport};

/// Map pixel `(x, y)` of a `dims`-sized raster onto the viewport.
///
/// Each axis is interpolated independently between the viewport corners, so
/// `(0, 0)` lands exactly on `upper_left` and `(width, height)` (one past the
/// last pixel) on `lower_right`. `x` and `y` are not bounds-checked.
#[inline]
pub fn pixel_to_point(x: usize, y: usize, dims: Dimensions, viewport: &Viewport) -> Complex {
    let ul = viewport.upper_left;
    let lr = viewport.lower_right;
    Complex::new(
        ul.re + (lr.re - ul.re) * x as f64 / dims.width() as f64,
        ul.im + (lr.im - ul.im) * y as f64 / dims.height() as f64,
    )
}
