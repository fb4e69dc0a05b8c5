use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind tag carried by every shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Cone,
    Unknown,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Cone => "cone",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimensionality of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Flat figure (2D).
    #[serde(rename = "2D")]
    Planar,
    /// Solid body (3D).
    #[serde(rename = "3D")]
    Solid,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planar => f.write_str("2D"),
            Self::Solid => f.write_str("3D"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(ShapeKind::Rectangle.to_string(), "rectangle");
        assert_eq!(ShapeKind::Cone.to_string(), "cone");
        assert_eq!(ShapeKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn dimension_serde_uses_short_tags() {
        assert_eq!(serde_json::to_string(&Dimension::Planar).unwrap(), "\"2D\"");
        assert_eq!(serde_json::to_string(&Dimension::Solid).unwrap(), "\"3D\"");
    }
}
