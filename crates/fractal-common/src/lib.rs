//! Common types shared by the renderer and the command-line front-end.

pub mod complex;
pub mod dimensions;
pub mod error;
pub mod parse;
pub mod viewport;

pub use complex::Complex;
pub use dimensions::{Dimensions, MAX_SIDE};
pub use error::{ParseError, ParseResult};
pub use parse::{parse_complex, parse_dimensions, parse_pair};
pub use viewport::Viewport;
