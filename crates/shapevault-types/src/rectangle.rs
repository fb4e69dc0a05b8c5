use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::ShapeId;
use crate::kind::{Dimension, ShapeKind};

const EPSILON: f64 = 1e-9;

/// Axis-aligned rectangle spanning `[x, x + width] x [y, y + height]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct RectangleModel {
    id: ShapeId,
    name: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Serialized form, checked by [`RectangleModel::new`] before use.
#[derive(Deserialize)]
struct RawRectangle {
    id: ShapeId,
    name: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl TryFrom<RawRectangle> for RectangleModel {
    type Error = TypeError;

    fn try_from(raw: RawRectangle) -> Result<Self, Self::Error> {
        Ok(RectangleModel::new(raw.x, raw.y, raw.width, raw.height)?
            .with_id(raw.id)
            .with_name(raw.name))
    }
}

impl RectangleModel {
    /// Build a rectangle with a freshly generated id.
    ///
    /// Width and height must be positive; every value must be finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, TypeError> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(TypeError::NonFiniteCoordinate { shape: "Rectangle" });
        }
        if width <= 0.0 {
            return Err(TypeError::NonPositiveDimension {
                shape: "Rectangle",
                field: "width",
                value: width,
            });
        }
        if height <= 0.0 {
            return Err(TypeError::NonPositiveDimension {
                shape: "Rectangle",
                field: "height",
                value: height,
            });
        }
        Ok(Self {
            id: ShapeId::generate(ShapeKind::Rectangle),
            name: ShapeKind::Rectangle.to_string(),
            x,
            y,
            width,
            height,
        })
    }

    /// Replace the generated id with an explicit one.
    pub fn with_id(mut self, id: impl Into<ShapeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::Planar
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Returns `true` if the rectangle touches or crosses the X or Y axis.
    pub fn touches_axis(&self) -> bool {
        let crosses_x = self.y <= 0.0 && self.y + self.height >= 0.0;
        let crosses_y = self.x <= 0.0 && self.x + self.width >= 0.0;
        crosses_x || crosses_y
    }

    pub fn is_square(&self) -> bool {
        (self.width - self.height).abs() < EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> RectangleModel {
        RectangleModel::new(x, y, width, height).unwrap()
    }

    #[test]
    fn area_and_perimeter() {
        let r = RectangleModel::new(0.0, 0.0, 4.0, 3.0).unwrap();
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.perimeter(), 14.0);
        assert_eq!(r.diagonal(), 5.0);
    }

    #[test]
    fn rejects_non_positive_sides() {
        let err = RectangleModel::new(0.0, 0.0, 0.0, 3.0).unwrap_err();
        assert!(matches!(
            err,
            TypeError::NonPositiveDimension { field: "width", .. }
        ));
        let err = RectangleModel::new(0.0, 0.0, 2.0, -1.0).unwrap_err();
        assert!(matches!(
            err,
            TypeError::NonPositiveDimension { field: "height", .. }
        ));
    }

    #[test]
    fn rejects_nan() {
        assert!(RectangleModel::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn tags_and_default_name() {
        let r = RectangleModel::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(r.kind(), ShapeKind::Rectangle);
        assert_eq!(r.dimension(), Dimension::Planar);
        assert_eq!(r.name(), "rectangle");
        assert!(r.id().as_str().starts_with("rectangle-"));
    }

    #[test]
    fn builders_override_id_and_name() {
        let r = RectangleModel::new(0.0, 0.0, 1.0, 2.0)
            .unwrap()
            .with_id("r-1")
            .with_name("door");
        assert_eq!(r.id().as_str(), "r-1");
        assert_eq!(r.name(), "door");
    }

    #[test]
    fn touches_axis() {
        assert!(rect(-1.0, 5.0, 2.0, 1.0).touches_axis());
        assert!(rect(5.0, -2.0, 1.0, 2.0).touches_axis());
        assert!(rect(0.0, 3.0, 1.0, 1.0).touches_axis());
        assert!(!rect(1.0, 1.0, 2.0, 2.0).touches_axis());
    }

    #[test]
    fn deserialize_rejects_invalid_sides() {
        let json = serde_json::json!({
            "id": "r-1",
            "name": "bad",
            "x": 0.0,
            "y": 0.0,
            "width": -4.0,
            "height": 3.0,
        });
        let err = serde_json::from_value::<RectangleModel>(json).unwrap_err();
        assert!(err.to_string().contains("width must be a positive number"));
    }

    #[test]
    fn serde_keeps_id_and_name() {
        let r = RectangleModel::new(1.0, 2.0, 3.0, 4.0)
            .unwrap()
            .with_id("r-7")
            .with_name("window");
        let back: RectangleModel =
            serde_json::from_value(serde_json::to_value(&r).unwrap()).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn square_detection() {
        assert!(rect(0.0, 0.0, 2.0, 2.0).is_square());
        assert!(!rect(0.0, 0.0, 2.0, 3.0).is_square());
    }
}
