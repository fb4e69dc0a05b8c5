//! Rectangles given by their four corners, in any orientation.

use serde::Serialize;

use crate::error::TypeError;
use crate::geometry::Point2D;

const EPSILON: f64 = 1e-9;

/// A rectangle described by the vertices `a`, `b`, `c`, `d` in boundary
/// order. Edges need not be parallel to the axes.
///
/// Width is the length of `ab` and height the length of `bc`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VertexRectangle {
    a: Point2D,
    b: Point2D,
    c: Point2D,
    d: Point2D,
}

fn dot(u: (f64, f64), v: (f64, f64)) -> f64 {
    u.0 * v.0 + u.1 * v.1
}

fn length(v: (f64, f64)) -> f64 {
    v.0.hypot(v.1)
}

impl VertexRectangle {
    /// Check that consecutive edges are perpendicular, opposite edges have
    /// equal length and no edge is degenerate.
    pub fn new(a: Point2D, b: Point2D, c: Point2D, d: Point2D) -> Result<Self, TypeError> {
        let edges = [
            a.vector_to(&b),
            b.vector_to(&c),
            c.vector_to(&d),
            d.vector_to(&a),
        ];

        if edges.iter().any(|e| length(*e) < EPSILON) {
            return Err(TypeError::NotARectangle {
                reason: "an edge has zero length",
            });
        }
        let right_angles = edges
            .iter()
            .zip(edges.iter().cycle().skip(1))
            .all(|(u, v)| dot(*u, *v).abs() < EPSILON);
        if !right_angles {
            return Err(TypeError::NotARectangle {
                reason: "consecutive edges are not perpendicular",
            });
        }
        let opposite_equal = (length(edges[0]) - length(edges[2])).abs() < EPSILON
            && (length(edges[1]) - length(edges[3])).abs() < EPSILON;
        if !opposite_equal {
            return Err(TypeError::NotARectangle {
                reason: "opposite edges differ in length",
            });
        }
        Ok(Self { a, b, c, d })
    }

    pub fn vertices(&self) -> [Point2D; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn width(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    pub fn height(&self) -> f64 {
        self.b.distance_to(&self.c)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    /// Returns `true` if any vertex lies on the X or Y axis.
    pub fn touches_axis(&self) -> bool {
        self.vertices().iter().any(Point2D::is_on_axis)
    }

    pub fn is_square(&self) -> bool {
        (self.width() - self.height()).abs() < EPSILON
    }

    /// All four edges have the same length.
    pub fn is_rhombus(&self) -> bool {
        let sides = [
            self.a.distance_to(&self.b),
            self.b.distance_to(&self.c),
            self.c.distance_to(&self.d),
            self.d.distance_to(&self.a),
        ];
        sides.windows(2).all(|w| (w[0] - w[1]).abs() < EPSILON)
    }
}
