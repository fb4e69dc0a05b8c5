//! Text-line and value-list validation.
//!
//! Rules:
//! - Fields are separated by any run of whitespace; leading and trailing
//!   whitespace is ignored.
//! - Rectangles need exactly 4 fields, cones exactly 5.
//! - Every field must parse as a finite number.
//! - Cone radius and height must be positive. Rectangle sides are checked
//!   when the value is built.

use crate::error::{IoError, IoResult};

const RECTANGLE_FIELDS: usize = 4;
const CONE_FIELDS: usize = 5;

fn parse_fields(line: &str) -> Option<Vec<f64>> {
    line.split_whitespace()
        .map(|field| field.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

/// Validate a rectangle line `x y width height`.
///
/// ```
/// use shapevault_io::validate_rectangle_line;
///
/// assert_eq!(validate_rectangle_line(" 0 0  4 3 ").unwrap(), [0.0, 0.0, 4.0, 3.0]);
/// assert!(validate_rectangle_line("0 0 4").is_err());
/// ```
pub fn validate_rectangle_line(line: &str) -> IoResult<[f64; 4]> {
    let count = line.split_whitespace().count();
    if count != RECTANGLE_FIELDS {
        return Err(IoError::Rectangle(format!(
            "expected exactly 4 values (x y width height), got {count}"
        )));
    }
    let values = parse_fields(line)
        .ok_or_else(|| IoError::Rectangle("parameters must be valid numbers".into()))?;
    Ok([values[0], values[1], values[2], values[3]])
}

/// Validate a rectangle value list `[x, y, width, height]`.
pub fn validate_rectangle_values(values: &[f64]) -> IoResult<()> {
    if values.len() != RECTANGLE_FIELDS {
        return Err(IoError::Rectangle(format!(
            "expected 4 numeric params (x y width height), got {}",
            values.len()
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(IoError::Rectangle("all values must be finite numbers".into()));
    }
    Ok(())
}

/// Validate a cone line `cx cy cz radius height`.
pub fn validate_cone_line(line: &str) -> IoResult<[f64; 5]> {
    if line.trim().is_empty() {
        return Err(IoError::Cone("line is empty".into()));
    }
    let count = line.split_whitespace().count();
    if count != CONE_FIELDS {
        return Err(IoError::Cone(format!(
            "expected exactly 5 values (cx cy cz radius height), got {count}"
        )));
    }
    let values =
        parse_fields(line).ok_or_else(|| IoError::Cone("contains invalid numeric values".into()))?;
    validate_cone_values(&values)?;
    Ok([values[0], values[1], values[2], values[3], values[4]])
}

/// Validate a cone value list `[cx, cy, cz, radius, height]`.
pub fn validate_cone_values(values: &[f64]) -> IoResult<()> {
    if values.len() != CONE_FIELDS {
        return Err(IoError::Cone(format!(
            "expected 5 numeric values (cx cy cz radius height), got {}",
            values.len()
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(IoError::Cone("contains invalid numeric values".into()));
    }
    if values[3] <= 0.0 || values[4] <= 0.0 {
        return Err(IoError::Cone("radius and height must be positive".into()));
    }
    Ok(())
}
