use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::geometry::Point3D;
use crate::id::ShapeId;
use crate::kind::{Dimension, ShapeKind};

/// Right circular cone whose base is centred on `center` and whose apex lies
/// `height` units above it along +Z.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCone")]
pub struct ConeModel {
    id: ShapeId,
    name: String,
    center: Point3D,
    radius: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawCone {
    id: ShapeId,
    name: String,
    center: Point3D,
    radius: f64,
    height: f64,
}

impl TryFrom<RawCone> for ConeModel {
    type Error = TypeError;

    fn try_from(raw: RawCone) -> Result<Self, Self::Error> {
        Ok(ConeModel::new(raw.center, raw.radius, raw.height)?
            .with_id(raw.id)
            .with_name(raw.name))
    }
}

impl ConeModel {
    /// Build a cone with a freshly generated id.
    pub fn new(center: Point3D, radius: f64, height: f64) -> Result<Self, TypeError> {
        if !radius.is_finite() || !height.is_finite() {
            return Err(TypeError::NonFiniteCoordinate { shape: "Cone" });
        }
        if radius <= 0.0 {
            return Err(TypeError::NonPositiveDimension {
                shape: "Cone",
                field: "radius",
                value: radius,
            });
        }
        if height <= 0.0 {
            return Err(TypeError::NonPositiveDimension {
                shape: "Cone",
                field: "height",
                value: height,
            });
        }
        Ok(Self {
            id: ShapeId::generate(ShapeKind::Cone),
            name: ShapeKind::Cone.to_string(),
            center,
            radius,
            height,
        })
    }

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
        ShapeKind::Cone
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::Solid
    }

    pub fn center(&self) -> &Point3D {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn volume(&self) -> f64 {
        PI * self.radius * self.radius * self.height / 3.0
    }

    pub fn base_area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Lateral area plus base area.
    pub fn surface_area(&self) -> f64 {
        let slant = self.radius.hypot(self.height);
        PI * self.radius * slant + self.base_area()
    }

    /// Ratio of the lower volume to the upper volume when the cone is cut by
    /// the horizontal plane `z = plane_z`.
    ///
    /// Returns `None` when the plane does not pass strictly between the base
    /// and the apex.
    pub fn volume_slice_ratio(&self, plane_z: f64) -> Option<f64> {
        let base_z = self.center.z();
        let apex_z = base_z + self.height;
        if plane_z <= base_z || plane_z >= apex_z {
            return None;
        }

        // The upper piece is a similar cone; its radius shrinks linearly.
        let cut_height = apex_z - plane_z;
        let cut_radius = self.radius * cut_height / self.height;
        let upper = PI * cut_radius * cut_radius * cut_height / 3.0;
        let lower = self.volume() - upper;
        Some(lower / upper)
    }

    /// Returns `true` if the base centre lies on any coordinate plane.
    pub fn is_base_on_coordinate_plane(&self) -> bool {
        self.center.x() == 0.0 || self.center.y() == 0.0 || self.center.z() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cone(r: f64, h: f64) -> ConeModel {
        ConeModel::new(Point3D::origin(), r, h).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn volume_and_areas() {
        let c = cone(3.0, 4.0);
        assert!(close(c.volume(), 12.0 * PI));
        assert!(close(c.base_area(), 9.0 * PI));
        // slant = 5, lateral = 15π, base = 9π
        assert!(close(c.surface_area(), 24.0 * PI));
    }

    #[test]
    fn rejects_non_positive() {
        assert!(ConeModel::new(Point3D::origin(), 0.0, 1.0).is_err());
        assert!(ConeModel::new(Point3D::origin(), 1.0, -3.0).is_err());
        assert!(ConeModel::new(Point3D::origin(), f64::NAN, 1.0).is_err());
    }

    #[test]
    fn slice_ratio_outside_returns_none() {
        let c = cone(2.0, 6.0);
        assert_eq!(c.volume_slice_ratio(0.0), None);
        assert_eq!(c.volume_slice_ratio(6.0), None);
        assert_eq!(c.volume_slice_ratio(-1.0), None);
    }

    #[test]
    fn slice_ratio_at_half_height() {
        // Upper cone has half the height and half the radius: 1/8 of the volume.
        let c = cone(2.0, 6.0);
        let ratio = c.volume_slice_ratio(3.0).unwrap();
        assert!(close(ratio, 7.0));
    }

    #[test]
    fn base_on_coordinate_plane() {
        assert!(cone(1.0, 1.0).is_base_on_coordinate_plane());
        let lifted = ConeModel::new(Point3D::new(1.0, 1.0, 1.0).unwrap(), 1.0, 1.0).unwrap();
        assert!(!lifted.is_base_on_coordinate_plane());
    }

    #[test]
    fn deserialize_rejects_invalid_radius_and_center() {
        let json = serde_json::json!({
            "id": "c-1",
            "name": "bad",
            "center": { "x": 0.0, "y": 0.0, "z": 0.0 },
            "radius": -1.0,
            "height": 2.0,
        });
        assert!(serde_json::from_value::<ConeModel>(json).is_err());

        let doc = r#"
            id = "c-2"
            name = "bad"
            radius = 1.0
            height = 1.0

            [center]
            x = nan
            y = 0.0
            z = inf
        "#;
        assert!(toml::from_str::<ConeModel>(doc).is_err());
    }

    #[test]
    fn tags() {
        let c = cone(1.0, 1.0).with_name("funnel");
        assert_eq!(c.kind(), ShapeKind::Cone);
        assert_eq!(c.dimension(), Dimension::Solid);
        assert_eq!(c.name(), "funnel");
    }
}
