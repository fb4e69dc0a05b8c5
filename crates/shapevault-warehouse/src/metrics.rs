use serde::{Deserialize, Serialize};
use shapevault_types::ShapeView;

/// Derived numeric metrics for one shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "set", rename_all = "snake_case")]
pub enum ShapeMetrics {
    /// Rectangle-kind metrics.
    Planar { area: f64, perimeter: f64 },
    /// Cone-kind metrics.
    Solid {
        volume: f64,
        base_area: f64,
        surface_area: f64,
    },
}

impl ShapeMetrics {
    /// Compute the metric set for a shape, or `None` if its kind has none.
    ///
    /// This is the only place that maps shape kinds to metric sets; a new
    /// [`ShapeView`] variant will not compile until it is handled here.
    pub fn compute(view: ShapeView<'_>) -> Option<Self> {
        match view {
            ShapeView::Rectangle(r) => Some(Self::Planar {
                area: r.area(),
                perimeter: r.perimeter(),
            }),
            ShapeView::Cone(c) => Some(Self::Solid {
                volume: c.volume(),
                base_area: c.base_area(),
                surface_area: c.surface_area(),
            }),
            ShapeView::Other => None,
        }
    }

    pub fn area(&self) -> Option<f64> {
        match self {
            Self::Planar { area, .. } => Some(*area),
            Self::Solid { .. } => None,
        }
    }

    pub fn perimeter(&self) -> Option<f64> {
        match self {
            Self::Planar { perimeter, .. } => Some(*perimeter),
            Self::Solid { .. } => None,
        }
    }

    pub fn volume(&self) -> Option<f64> {
        match self {
            Self::Solid { volume, .. } => Some(*volume),
            Self::Planar { .. } => None,
        }
    }

    pub fn base_area(&self) -> Option<f64> {
        match self {
            Self::Solid { base_area, .. } => Some(*base_area),
            Self::Planar { .. } => None,
        }
    }

    pub fn surface_area(&self) -> Option<f64> {
        match self {
            Self::Solid { surface_area, .. } => Some(*surface_area),
            Self::Planar { .. } => None,
        }
    }
}
