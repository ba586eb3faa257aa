//! Escape-time evaluation of the Mandelbrot iteration.
//!
//! A point `z` belongs to the set when the orbit `v ← v² + z`, starting at
//! `v = 0`, stays bounded. Points whose orbit leaves the radius-2 disk are
//! shaded by how quickly they escape: early escapes are bright, late escapes
//! dark, and points that never escape are black.

use fractal_common::Complex;
use serde::Serialize;

/// Default iteration bound. The counter is 8 bits wide, so this is also the maximum.
pub const MAX_ITERATIONS: u8 = 255;

/// Default intensity drop per escape iteration.
pub const CONTRAST: u8 = 15;

/// |v| > 2 is tested as |v|² > 4.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// How `255 - contrast * n` is evaluated once it leaves the 0..=255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityMode {
    /// 8-bit unsigned arithmetic: values wrap modulo 256, producing repeating
    /// light/dark rings around the set.
    #[default]
    Wrapping,
    /// Saturate at 0: everything escaping after iteration 17 (for contrast 15) is black.
    Clamped,
}

/// Evaluator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeParams {
    pub max_iterations: u8,
    pub contrast: u8,
    pub mode: IntensityMode,
}

impl Default for EscapeParams {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            contrast: CONTRAST,
            mode: IntensityMode::Wrapping,
        }
    }
}

/// Return the 0-based iteration at which the orbit of `z` escapes, or `None`
/// if it stays bounded for `max_iterations` steps.
#[inline]
pub fn escape_time(z: Complex, max_iterations: u8) -> Option<u8> {
    let mut v = Complex::ZERO;
    for n in 0..max_iterations {
        v = v.square() + z;
        if v.norm_sqr() > ESCAPE_RADIUS_SQR {
            return Some(n);
        }
    }
    None
}

/// Convert an escape iteration into a gray level.
#[inline(always)]
pub fn shade(n: u8, contrast: u8, mode: IntensityMode) -> u8 {
    match mode {
        IntensityMode::Wrapping => 255u8.wrapping_sub(contrast.wrapping_mul(n)),
        IntensityMode::Clamped => 255u16.saturating_sub(contrast as u16 * n as u16) as u8,
    }
}

/// Gray level for point `z`: 0 for points in the set, otherwise the shaded escape time.
#[inline]
pub fn intensity(z: Complex, params: &EscapeParams) -> u8 {
    match escape_time(z, params.max_iterations) {
        Some(n) => shade(n, params.contrast, params.mode),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, MAX_ITERATIONS), None);
        assert_eq!(intensity(Complex::ZERO, &EscapeParams::default()), 0);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let z = Complex::new(3.0, 0.0);
        assert_eq!(escape_time(z, MAX_ITERATIONS), Some(0));
        assert_eq!(intensity(z, &EscapeParams::default()), 255);
    }

    #[test]
    fn test_minus_two_is_on_the_boundary_and_bounded() {
        // Orbit: -2, 2, 2, 2, ... never strictly exceeds 2.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), MAX_ITERATIONS), None);
    }

    #[test]
    fn test_point_escaping_at_iteration_one() {
        // v1 = 1.5, v2 = 2.25 + 1.5 = 3.75
        assert_eq!(escape_time(Complex::new(1.5, 0.0), MAX_ITERATIONS), Some(1));
        assert_eq!(intensity(Complex::new(1.5, 0.0), &EscapeParams::default()), 240);
    }

    #[test]
    fn test_iteration_bound_respected() {
        // c = 0.3 escapes only after a dozen steps, so a bound of 5 keeps it in the set.
        let z = Complex::new(0.3, 0.0);
        assert!(escape_time(z, MAX_ITERATIONS).is_some());
        assert_eq!(escape_time(z, 5), None);
        assert_eq!(escape_time(z, 0), None);
    }

    #[test]
    fn test_shade_wrapping() {
        assert_eq!(shade(0, 15, IntensityMode::Wrapping), 255);
        assert_eq!(shade(17, 15, IntensityMode::Wrapping), 0);
        // 15 * 18 = 270 ≡ 14 (mod 256); 255 - 14 = 241
        assert_eq!(shade(18, 15, IntensityMode::Wrapping), 241);
        // 15 * 254 = 3810 ≡ 226 (mod 256); 255 - 226 = 29
        assert_eq!(shade(254, 15, IntensityMode::Wrapping), 29);
    }

    #[test]
    fn test_shade_clamped() {
        assert_eq!(shade(0, 15, IntensityMode::Clamped), 255);
        assert_eq!(shade(16, 15, IntensityMode::Clamped), 15);
        assert_eq!(shade(17, 15, IntensityMode::Clamped), 0);
        assert_eq!(shade(18, 15, IntensityMode::Clamped), 0);
        assert_eq!(shade(254, 15, IntensityMode::Clamped), 0);
    }

    #[test]
    fn test_modes_agree_before_wrap() {
        for n in 0..=17u8 {
            assert_eq!(
                shade(n, CONTRAST, IntensityMode::Wrapping),
                shade(n, CONTRAST, IntensityMode::Clamped)
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let z = Complex::new(-0.743643887, 0.131825904);
        let params = EscapeParams::default();
        let first = intensity(z, &params);
        for _ in 0..10 {
            assert_eq!(intensity(z, &params), first);
        }
    }
}
