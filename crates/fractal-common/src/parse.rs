//! Parsers for the command-line render arguments.
//!
//! - `"<width>x<height>"` → [`Dimensions`]
//! - `"<re>,<im>"` → [`Complex`]

use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::{Complex, Dimensions};

/// Parse a pair of values separated by `separator`, e.g. `"400x600"` or `"1.0,0.5"`.
///
/// Exactly one separator is allowed. Each side is parsed with `FromStr`;
/// `on_error` builds the error for a side that fails to parse.
pub fn parse_pair<T: FromStr>(
    s: &str,
    separator: char,
    on_error: fn(String) -> ParseError,
) -> ParseResult<(T, T)> {
    let parts: Vec<&str> = s.split(separator).collect();
    if parts.len() != 2 {
        return Err(ParseError::InvalidFormat {
            input: s.to_string(),
            separator,
        });
    }

    let first = parts[0]
        .parse::<T>()
        .map_err(|_| on_error(parts[0].to_string()))?;
    let second = parts[1]
        .parse::<T>()
        .map_err(|_| on_error(parts[1].to_string()))?;
    Ok((first, second))
}

/// Parse image bounds such as `"1000x750"`, rejecting zero-sized images.
pub fn parse_dimensions(s: &str) -> ParseResult<Dimensions> {
    let (width, height) = parse_pair::<usize>(s, 'x', ParseError::InvalidInteger)?;
    Dimensions::new(width, height)
}

/// Parse a complex number written as `"<re>,<im>"`, e.g. `"-1.20,0.35"`.
pub fn parse_complex(s: &str) -> ParseResult<Complex> {
    let (re, im) = parse_pair::<f64>(s, ',', ParseError::InvalidFloat)?;
    Ok(Complex::new(re, im))
}
