//! Row-band partitioning and parallel rendering.
//!
//! The image is cut into `band_count` horizontal strips of `height / band_count`
//! rows, with the last strip taking the remainder. Each strip is handed to its
//! own task as a disjoint `&mut [u8]` carved out of the pixel buffer with
//! `split_at_mut`, so no two tasks can ever touch the same row and no locking
//! is needed. The render returns only after every task has joined.
//!
//! Band sizes never change after partitioning. Strips that cross the set cost
//! far more than exterior strips; that imbalance is accepted.

use std::time::Instant;

use fractal_common::{Dimensions, Viewport};
use tracing::{debug, info};

use crate::buffer::GrayBuffer;
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::escape::{escape_time, intensity, shade, EscapeParams};
use crate::mapper::pixel_to_point;
use crate::stats::{BandStats, RenderStats};

/// Half-open row range `[start_row, end_row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub index: usize,
    pub start_row: usize,
    pub end_row: usize,
}

impl Band {
    /// Number of rows in the band.
    pub fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    pub fn is_empty(&self) -> bool {
        self.end_row == self.start_row
    }
}

/// Result of a parallel render: the finished raster and how it was produced.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub buffer: GrayBuffer,
    pub stats: RenderStats,
}

/// Split `height` rows into `band_count` contiguous bands.
///
/// Every band gets `height / band_count` rows except the last, which runs to
/// `height`. With more bands than rows the leading bands are empty and the
/// last band holds every row.
pub fn partition(height: usize, band_count: usize) -> RenderResult<Vec<Band>> {
    if band_count == 0 {
        return Err(RenderError::InvalidBandCount(band_count));
    }

    let rows_per_band = height / band_count;
    let bands = (0..band_count)
        .map(|index| {
            let start_row = index * rows_per_band;
            let end_row = if index == band_count - 1 {
                height
            } else {
                start_row + rows_per_band
            };
            Band {
                index,
                start_row,
                end_row,
            }
        })
        .collect();
    Ok(bands)
}

/// Carve the buffer into one mutable row slice per band.
///
/// `bands` must come from [`partition`] for this buffer's height: contiguous,
/// in order, starting at row 0.
pub fn split_bands<'a>(buffer: &'a mut GrayBuffer, bands: &[Band]) -> Vec<(Band, &'a mut [u8])> {
    let width = buffer.width();
    let mut rest = buffer.as_bytes_mut();
    let mut slices = Vec::with_capacity(bands.len());
    let mut next_row = 0;

    for band in bands {
        debug_assert_eq!(band.start_row, next_row, "bands must be contiguous");
        let (rows, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * width);
        slices.push((*band, rows));
        rest = tail;
        next_row = band.end_row;
    }

    debug_assert!(rest.is_empty(), "bands must cover every row");
    slices
}

/// Fill one band's rows. `rows` holds exactly `band.len()` rows of `dims.width()` pixels.
pub fn render_band(
    band: Band,
    rows: &mut [u8],
    dims: Dimensions,
    viewport: &Viewport,
    params: &EscapeParams,
) -> BandStats {
    let started = Instant::now();
    let mut stats = BandStats::for_band(band);

    for (offset, row) in rows.chunks_exact_mut(dims.width()).enumerate() {
        let y = band.start_row + offset;
        for (x, pixel) in row.iter_mut().enumerate() {
            let point = pixel_to_point(x, y, dims, viewport);
            *pixel = match escape_time(point, params.max_iterations) {
                Some(n) => shade(n, params.contrast, params.mode),
                None => {
                    stats.in_set_pixels += 1;
                    0
                }
            };
        }
    }

    stats.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    debug!(
        band = band.index,
        start_row = band.start_row,
        end_row = band.end_row,
        in_set = stats.in_set_pixels,
        elapsed_ms = stats.elapsed_ms,
        "Band rendered"
    );
    stats
}

/// Render the viewport with one rayon task per row band.
///
/// Blocks until every band has finished; the buffer is only returned after
/// the scope has joined.
pub fn render_parallel(
    dims: Dimensions,
    viewport: &Viewport,
    config: &RenderConfig,
) -> RenderResult<RenderOutput> {
    let started = Instant::now();
    let bands = partition(dims.height(), config.band_count)?;
    let mut buffer = GrayBuffer::new(dims);
    let mut band_stats: Vec<BandStats> = bands.iter().map(|b| BandStats::for_band(*b)).collect();
    let params = config.escape;

    let slices = split_bands(&mut buffer, &bands);
    rayon::scope(|scope| {
        for ((band, rows), slot) in slices.into_iter().zip(band_stats.iter_mut()) {
            scope.spawn(move |_| {
                *slot = render_band(band, rows, dims, viewport, &params);
            });
        }
    });

    let in_set_pixels = band_stats.iter().map(|b| b.in_set_pixels).sum();
    let stats = RenderStats {
        width: dims.width(),
        height: dims.height(),
        viewport: *viewport,
        mode: params.mode,
        band_count: bands.len(),
        in_set_pixels,
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        bands: band_stats,
    };

    info!(
        dimensions = %dims,
        bands = stats.band_count,
        in_set = stats.in_set_pixels,
        elapsed_ms = stats.elapsed_ms,
        imbalance = stats.imbalance(),
        "Render complete"
    );

    Ok(RenderOutput { buffer, stats })
}

/// Render the viewport row by row on the calling thread.
pub fn render_sequential(dims: Dimensions, viewport: &Viewport, params: &EscapeParams) -> GrayBuffer {
    let mut buffer = GrayBuffer::new(dims);
    for y in 0..dims.height() {
        for x in 0..dims.width() {
            let point = pixel_to_point(x, y, dims, viewport);
            buffer.set(x, y, intensity(point, params));
        }
    }
    buffer
}
