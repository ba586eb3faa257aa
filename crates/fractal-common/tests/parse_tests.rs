//! Tests for parsing render arguments from their command-line form.

use fractal_common::{parse_complex, parse_dimensions, Complex, ParseError, Viewport};

// ============================================================================
// Dimension parsing
// ============================================================================

#[test]
fn test_parse_dimensions_valid() {
    let dims = parse_dimensions("100x100").unwrap();
    assert_eq!(dims.width(), 100);
    assert_eq!(dims.height(), 100);
}

#[test]
fn test_parse_dimensions_missing_height() {
    let err = parse_dimensions("100").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidFormat {
            input: "100".to_string(),
            separator: 'x'
        }
    );
}

#[test]
fn test_parse_dimensions_too_many_parts() {
    assert!(matches!(
        parse_dimensions("100x100x3"),
        Err(ParseError::InvalidFormat { .. })
    ));
}

#[test]
fn test_parse_dimensions_non_integer() {
    assert_eq!(
        parse_dimensions("10.5x20"),
        Err(ParseError::InvalidInteger("10.5".to_string()))
    );
    assert_eq!(
        parse_dimensions("100xabc"),
        Err(ParseError::InvalidInteger("abc".to_string()))
    );
}

#[test]
fn test_parse_dimensions_negative() {
    assert!(matches!(
        parse_dimensions("-100x100"),
        Err(ParseError::InvalidInteger(_))
    ));
}

#[test]
fn test_parse_dimensions_zero_rejected() {
    assert_eq!(
        parse_dimensions("0x100"),
        Err(ParseError::DegenerateDimensions {
            width: 0,
            height: 100
        })
    );
    assert!(matches!(
        parse_dimensions("100x0"),
        Err(ParseError::DegenerateDimensions { .. })
    ));
}

#[test]
fn test_parse_dimensions_overflowing_size_rejected() {
    let err = parse_dimensions("18446744073709551615x2").unwrap_err();
    assert!(matches!(
        err,
        ParseError::DimensionsTooLarge {
            width: usize::MAX,
            height: 2,
            ..
        }
    ));
    assert!(err.to_string().contains("too large"));
}

#[test]
fn test_parse_dimensions_side_above_png_limit_rejected() {
    assert!(matches!(
        parse_dimensions("2147483648x1"),
        Err(ParseError::DimensionsTooLarge { .. })
    ));
}

#[test]
fn test_parse_dimensions_uppercase_separator_rejected() {
    assert!(parse_dimensions("100X100").is_err());
}

// ============================================================================
// Complex parsing
// ============================================================================

#[test]
fn test_parse_complex_integers() {
    assert_eq!(parse_complex("-2,-1").unwrap(), Complex::new(-2.0, -1.0));
}

#[test]
fn test_parse_complex_floating() {
    let z = parse_complex("-1.20,0.35").unwrap();
    assert!((z.re - (-1.20)).abs() < 1e-12);
    assert!((z.im - 0.35).abs() < 1e-12);
}

#[test]
fn test_parse_complex_scientific_notation() {
    let z = parse_complex("1e-3,-2.5e2").unwrap();
    assert!((z.re - 1e-3).abs() < 1e-15);
    assert!((z.im - (-250.0)).abs() < 1e-9);
}

#[test]
fn test_parse_complex_missing_component() {
    assert!(matches!(
        parse_complex("1.0"),
        Err(ParseError::InvalidFormat { separator: ',', .. })
    ));
}

#[test]
fn test_parse_complex_garbage() {
    assert_eq!(
        parse_complex("one,two"),
        Err(ParseError::InvalidFloat("one".to_string()))
    );
}

#[test]
fn test_parse_complex_whitespace_rejected() {
    assert!(parse_complex("1.0, 2.0").is_err());
}

// ============================================================================
// Error messages
// ============================================================================

#[test]
fn test_error_messages_name_the_input() {
    let msg = parse_dimensions("100").unwrap_err().to_string();
    assert!(msg.contains("'100'"));
    assert!(msg.contains("'x'"));

    let msg = parse_dimensions("0x5").unwrap_err().to_string();
    assert!(msg.contains("0x5"));
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn test_viewport_serializes_corners() {
    let vp = Viewport::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0));
    let json = serde_json::to_value(vp).unwrap();
    assert_eq!(json["upper_left"]["re"], -2.0);
    assert_eq!(json["lower_right"]["im"], 1.0);
}
