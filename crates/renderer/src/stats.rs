//! Per-render and per-band statistics.
//!
//! Bands are fixed at partition time, so bands crossing the set do far more
//! work than bands in the exterior. These numbers make that imbalance visible.

use fractal_common::Viewport;
use serde::Serialize;

use crate::bands::Band;
use crate::escape::IntensityMode;

/// Work done by a single band.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BandStats {
    pub index: usize,
    pub start_row: usize,
    pub end_row: usize,
    /// Pixels that never escaped.
    pub in_set_pixels: usize,
    pub elapsed_ms: f64,
}

impl BandStats {
    pub(crate) fn for_band(band: Band) -> Self {
        Self {
            index: band.index,
            start_row: band.start_row,
            end_row: band.end_row,
            ..Self::default()
        }
    }
}

/// Summary of a complete render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderStats {
    pub width: usize,
    pub height: usize,
    pub viewport: Viewport,
    pub mode: IntensityMode,
    pub band_count: usize,
    pub in_set_pixels: usize,
    pub elapsed_ms: f64,
    pub bands: Vec<BandStats>,
}

impl RenderStats {
    /// Ratio of the slowest band's time to the mean band time (1.0 = perfectly even).
    pub fn imbalance(&self) -> f64 {
        let times: Vec<f64> = self
            .bands
            .iter()
            .filter(|b| b.end_row > b.start_row)
            .map(|b| b.elapsed_ms)
            .collect();
        if times.is_empty() {
            return 1.0;
        }
        let mean = times.iter().sum::<f64>() / times.len() as f64;
        if mean <= 0.0 {
            return 1.0;
        }
        times.iter().cloned().fold(0.0, f64::max) / mean
    }
}
