//! Shape value objects for shapevault.
//!
//! This crate provides the immutable entities stored by the repository and
//! measured by the metrics warehouse. Every other shapevault crate depends on
//! `shapevault-types`.
//!
//! # Key Types
//!
//! - [`ShapeId`]: Unique identifier generated at construction
//! - [`ShapeKind`] / [`Dimension`]: Kind and dimensionality tags
//! - [`RectangleModel`]: Axis-aligned rectangle (2D)
//! - [`VertexRectangle`]: Rectangle given by four corners, any orientation
//! - [`ConeModel`]: Right circular cone standing on its base (3D)
//! - [`Shape`]: Tagged union over every known shape kind
//!
//! # Capability Contract
//!
//! - [`Identified`]: anything keyed by a [`ShapeId`]
//! - [`Classify`]: exposes a [`ShapeView`] so consumers can match on the
//!   metric set a shape carries without run-time type inspection

pub mod cone;
pub mod error;
pub mod geometry;
pub mod id;
pub mod kind;
pub mod rectangle;
pub mod shape;
pub mod vertex_rectangle;

pub use cone::ConeModel;
pub use error::TypeError;
pub use geometry::{Point2D, Point3D};
pub use id::ShapeId;
pub use kind::{Dimension, ShapeKind};
pub use rectangle::RectangleModel;
pub use shape::{Classify, Identified, Shape, ShapeView, UnknownShape};
pub use vertex_rectangle::VertexRectangle;
