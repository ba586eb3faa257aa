//! Mandelbrot set rendering into grayscale rasters.
//!
//! Pipeline:
//! - Coordinate mapping (pixel → complex plane)
//! - Escape-time evaluation (complex point → gray level)
//! - Band scheduling (rows split into bands rendered in parallel)
//! - Grayscale PNG encoding

pub mod bands;
pub mod buffer;
pub mod config;
pub mod error;
pub mod escape;
pub mod mapper;
pub mod png;
pub mod stats;

pub use bands::{partition, render_parallel, render_sequential, Band, RenderOutput};
pub use buffer::GrayBuffer;
pub use config::{RenderConfig, DEFAULT_BAND_COUNT};
pub use error::{RenderError, RenderResult};
pub use escape::{EscapeParams, IntensityMode};
pub use stats::{BandStats, RenderStats};
