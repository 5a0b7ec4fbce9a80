//! Shape types.
//!
//! Each shape is its own immutable type that knows how to:
//! - Report its accumulated rotation, center and local-frame bounding box
//! - Produce a rotated or reflected copy of itself

use enum_dispatch::enum_dispatch;

use crate::errors::GeometryError;
use crate::types::{Axis, BoundingBox, Point};

mod group;
mod polyline;
mod rectangle;
mod segment;

pub use group::ShapeGroup;
pub use polyline::Polyline;
pub use rectangle::Rectangle;
pub use segment::Segment;

/// Common queries answered by every shape
#[enum_dispatch]
pub trait Shape {
    /// Orientation (degrees) accumulated through rotations
    fn rotation(&self) -> f64;

    /// The point the shape rotates about by default
    fn center(&self) -> Point;

    /// Extent in the shape's local frame, tagged with [`Shape::rotation`].
    ///
    /// The box is not rotated into world space; callers that need world
    /// coordinates rotate its corners about [`Shape::center`].
    fn bounding_box(&self) -> BoundingBox;
}

/// Rigid transforms producing a new shape of the same kind
pub trait Transform: Sized {
    /// Rotate by `angle` degrees about `pivot` (default: the shape's own center)
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self;

    /// Mirror across `axis`
    fn reflected(&self, axis: &Axis) -> Self;

    /// Mirror across the line through a segment's endpoints.
    ///
    /// Fails with [`GeometryError::InvalidAxis`] for a zero-length segment.
    fn reflected_across(&self, axis: &Segment) -> Result<Self, GeometryError> {
        Ok(self.reflected(&Axis::try_from(axis)?))
    }
}

/// Reflections about axes through the shape's own center
pub trait Mirror: Shape + Transform {
    /// Mirror across the horizontal line through the center (or `y = 0`)
    fn reflected_by_horizontal(&self, centered: bool) -> Self {
        let y = if centered { self.center().y() } else { 0.0 };
        self.reflected(&Axis::horizontal(y))
    }

    /// Mirror across the vertical line through the center (or `x = 0`)
    fn reflected_by_vertical(&self, centered: bool) -> Self {
        let x = if centered { self.center().x() } else { 0.0 };
        self.reflected(&Axis::vertical(x))
    }
}

impl<T: Shape + Transform> Mirror for T {}

/// Any shape that can live inside a [`ShapeGroup`]
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Segment(Segment),
    Rectangle(Rectangle),
    Polyline(Polyline),
    ShapeGroup(ShapeGroup),
}

impl Transform for AnyShape {
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        match self {
            AnyShape::Segment(s) => AnyShape::Segment(s.rotated(angle, pivot)),
            AnyShape::Rectangle(r) => AnyShape::Rectangle(r.rotated(angle, pivot)),
            AnyShape::Polyline(p) => AnyShape::Polyline(p.rotated(angle, pivot)),
            AnyShape::ShapeGroup(g) => AnyShape::ShapeGroup(g.rotated(angle, pivot)),
        }
    }

    fn reflected(&self, axis: &Axis) -> Self {
        match self {
            AnyShape::Segment(s) => AnyShape::Segment(s.reflected(axis)),
            AnyShape::Rectangle(r) => AnyShape::Rectangle(r.reflected(axis)),
            AnyShape::Polyline(p) => AnyShape::Polyline(p.reflected(axis)),
            AnyShape::ShapeGroup(g) => AnyShape::ShapeGroup(g.reflected(axis)),
        }
    }
}
