//! Render configuration.

use crate::escape::{EscapeParams, IntensityMode};

/// Default number of row bands rendered concurrently.
pub const DEFAULT_BAND_COUNT: usize = 8;

/// Engine parameters for a render. Defaults reproduce the reference output:
/// 8 bands, 255 iterations, contrast 15, 8-bit wrapping intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub band_count: usize,
    pub escape: EscapeParams,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            band_count: DEFAULT_BAND_COUNT,
            escape: EscapeParams::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_band_count(mut self, band_count: usize) -> Self {
        self.band_count = band_count;
        self
    }

    pub fn with_mode(mut self, mode: IntensityMode) -> Self {
        self.escape.mode = mode;
        self
    }
}
