//! Build shape values from validated numbers or raw lines.
//!
//! The `*_from_line` helpers return `Result`; callers that only want the
//! shapes that parse can use `.ok()`.

use shapevault_types::{ConeModel, Point3D, RectangleModel};

use crate::error::IoResult;
use crate::validate::{
    validate_cone_line, validate_cone_values, validate_rectangle_line, validate_rectangle_values,
};

/// Build a rectangle from `[x, y, width, height]`.
pub fn rectangle_from_values(values: &[f64]) -> IoResult<RectangleModel> {
    validate_rectangle_values(values)?;
    Ok(RectangleModel::new(values[0], values[1], values[2], values[3])?)
}

/// Build a rectangle from a line `x y width height`.
pub fn rectangle_from_line(line: &str) -> IoResult<RectangleModel> {
    let values = validate_rectangle_line(line)?;
    rectangle_from_values(&values)
}

/// Build a cone from `[cx, cy, cz, radius, height]`.
pub fn cone_from_values(values: &[f64]) -> IoResult<ConeModel> {
    validate_cone_values(values)?;
    let center = Point3D::new(values[0], values[1], values[2])?;
    Ok(ConeModel::new(center, values[3], values[4])?)
}

/// Build a cone from a line `cx cy cz radius height`.
pub fn cone_from_line(line: &str) -> IoResult<ConeModel> {
    let values = validate_cone_line(line)?;
    cone_from_values(&values)
}

#[cfg(test)]
mod tests {
    use shapevault_types::TypeError;

    use super::*;
    use crate::error::IoError;

    #[test]
    fn rectangle_from_valid_line() {
        let rect = rectangle_from_line("1 2 4 3").unwrap();
        assert_eq!(rect.x(), 1.0);
        assert_eq!(rect.y(), 2.0);
        assert_eq!(rect.area(), 12.0);
    }

    #[test]
    fn rectangle_with_zero_side_is_shape_error() {
        let err = rectangle_from_values(&[0.0, 0.0, 0.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            IoError::Shape(TypeError::NonPositiveDimension { field: "width", .. })
        ));
    }

    #[test]
    fn malformed_rectangle_line_is_ok_none() {
        assert!(rectangle_from_line("not a rectangle").ok().is_none());
    }

    #[test]
    fn cone_from_valid_line() {
        let cone = cone_from_line("1 2 3 5 10").unwrap();
        assert_eq!(cone.center(), &Point3D::new(1.0, 2.0, 3.0).unwrap());
        assert_eq!(cone.radius(), 5.0);
        assert_eq!(cone.height(), 10.0);
    }

    #[test]
    fn cone_from_short_values_fails() {
        assert!(matches!(
            cone_from_values(&[0.0, 0.0, 0.0, 1.0]),
            Err(IoError::Cone(_))
        ));
    }
}
