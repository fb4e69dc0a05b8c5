//! Points in the plane and in space.
//!
//! Coordinates are private so every point goes through a finiteness check,
//! including points read back from serialized data.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint2D")]
pub struct Point2D {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawPoint2D {
    x: f64,
    y: f64,
}

impl TryFrom<RawPoint2D> for Point2D {
    type Error = TypeError;

    fn try_from(raw: RawPoint2D) -> Result<Self, Self::Error> {
        Point2D::new(raw.x, raw.y)
    }
}

impl Point2D {
    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Self, TypeError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(TypeError::NonFiniteCoordinate { shape: "Point2D" });
        }
        Ok(Self { x, y })
    }

    /// The origin `(0, 0)`.
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if the point lies on the X or Y axis.
    pub fn is_on_axis(&self) -> bool {
        self.x == 0.0 || self.y == 0.0
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let (dx, dy) = self.vector_to(other);
        dx.hypot(dy)
    }

    /// Displacement from `self` to `other` as `(dx, dy)`.
    pub fn vector_to(&self, other: &Point2D) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }
}

/// A point in space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint3D")]
pub struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Deserialize)]
struct RawPoint3D {
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<RawPoint3D> for Point3D {
    type Error = TypeError;

    fn try_from(raw: RawPoint3D) -> Result<Self, Self::Error> {
        Point3D::new(raw.x, raw.y, raw.z)
    }
}

impl Point3D {
    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, TypeError> {
        if !x.is_finite() || !y.is_finite() || !z.is_finite() {
            return Err(TypeError::NonFiniteCoordinate { shape: "Point3D" });
        }
        Ok(Self { x, y, z })
    }

    pub const fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let (dx, dy, dz) = self.vector_to(other);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn vector_to(&self, other: &Point3D) -> (f64, f64, f64) {
        (other.x - self.x, other.y - self.y, other.z - self.z)
    }
}
