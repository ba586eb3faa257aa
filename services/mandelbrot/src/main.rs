//! Mandelbrot set renderer.
//!
//! Renders a viewport of the complex plane to an 8-bit grayscale PNG:
//! - Row bands rendered concurrently on the rayon thread pool
//! - Escape-time shading with 8-bit wrapping (or clamped) intensity
//! - Optional JSON render statistics on stdout

mod config;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use config::{Args, USAGE};

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                println!("{}", USAGE);
                std::process::exit(1);
            }
            _ => err.exit(),
        },
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Everything is parsed and validated before any work or file I/O happens.
    let request = args.render_request()?;
    let config = args.render_config();

    info!(
        output = %request.output.display(),
        dimensions = %request.dims,
        upper_left = %request.viewport.upper_left,
        lower_right = %request.viewport.lower_right,
        bands = config.band_count,
        mode = ?config.escape.mode,
        "Rendering"
    );

    let output = renderer::render_parallel(request.dims, &request.viewport, &config)
        .context("render failed")?;

    renderer::png::write_png(&request.output, &output.buffer)
        .context("error writing PNG file")?;

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&output.stats)?);
    }

    info!(output = %request.output.display(), "Done");
    Ok(())
}
