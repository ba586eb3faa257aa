//! Command-line configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fractal_common::{parse_complex, parse_dimensions, Dimensions, Viewport};
use renderer::{IntensityMode, RenderConfig, DEFAULT_BAND_COUNT};
use tracing::{warn, Level};

pub const USAGE: &str = "Usage: mandelbrot <output.png> <width>x<height> <upperLeft> <lowerRight>";

#[derive(Parser, Debug)]
#[command(name = "mandelbrot")]
#[command(version)]
#[command(about = "Render the Mandelbrot set to a grayscale PNG")]
#[command(after_help = "Options must come before the positional arguments.\n\
                        Example: mandelbrot mandel.png 1000x750 -1.20,0.35 -1,0.20")]
pub struct Args {
    /// Output PNG path
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Image size as <width>x<height>, e.g. 1000x750
    #[arg(allow_hyphen_values = true)]
    pub bounds: String,

    /// Upper-left corner as <re>,<im>, e.g. -1.20,0.35
    #[arg(allow_hyphen_values = true)]
    pub upper_left: String,

    /// Lower-right corner as <re>,<im>, e.g. -1,0.20
    #[arg(allow_hyphen_values = true)]
    pub lower_right: String,

    /// Number of row bands rendered in parallel (0 = one per CPU)
    #[arg(long, default_value_t = DEFAULT_BAND_COUNT)]
    pub bands: usize,

    /// Saturate intensity at black instead of wrapping it modulo 256
    #[arg(long)]
    pub clamp: bool,

    /// Print render statistics as JSON to stdout
    #[arg(long)]
    pub stats: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Validated render inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub output: PathBuf,
    pub dims: Dimensions,
    pub viewport: Viewport,
}

impl Args {
    /// Parse and validate the positional arguments.
    pub fn render_request(&self) -> Result<RenderRequest> {
        let dims = parse_dimensions(&self.bounds).context("error parsing image dimensions")?;
        let upper_left =
            parse_complex(&self.upper_left).context("error parsing upper left corner point")?;
        let lower_right =
            parse_complex(&self.lower_right).context("error parsing lower right corner point")?;

        Ok(RenderRequest {
            output: self.output.clone(),
            dims,
            viewport: Viewport::new(upper_left, lower_right),
        })
    }

    pub fn render_config(&self) -> RenderConfig {
        let mode = if self.clamp {
            IntensityMode::Clamped
        } else {
            IntensityMode::Wrapping
        };
        RenderConfig::default()
            .with_band_count(resolve_band_count(self.bands))
            .with_mode(mode)
    }

    pub fn log_level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

/// `0` means one band per available CPU.
fn resolve_band_count(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(e) => {
            warn!(error = %e, fallback = DEFAULT_BAND_COUNT, "Could not detect CPU count");
            DEFAULT_BAND_COUNT
        }
    }
}
