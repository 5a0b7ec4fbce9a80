//! Composite shapes.
//!
//! A group owns no geometry of its own. Its bounding box is derived from the
//! children in two phases:
//!
//! 1. every child's local box is placed around the child's center and turned
//!    by the child's rotation tag, giving four world-space corners per child;
//! 2. if the group itself carries a rotation, all corners are turned back by
//!    that angle about the midpoint of their world extent, and the box is
//!    measured in that de-rotated frame.
//!
//! The result looks like any other shape's local-frame box, so groups nest:
//! a parent cannot tell a child group from a rotated rectangle.

use crate::log::{debug, trace};
use crate::types::{Axis, BoundingBox, Extent, Point};

use super::{AnyShape, Shape, Transform};

/// An ordered collection of shapes with its own accumulated rotation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeGroup {
    shapes: Vec<AnyShape>,
    rotation: f64,
}

impl ShapeGroup {
    pub fn new<I>(shapes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AnyShape>,
    {
        Self { shapes: shapes.into_iter().map(Into::into).collect(), rotation: 0.0 }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Append a child, returning the extended group
    pub fn with_shape(mut self, shape: impl Into<AnyShape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    pub fn shapes(&self) -> &[AnyShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn map_shapes(&self, rotation: f64, f: impl Fn(&AnyShape) -> AnyShape) -> Self {
        ShapeGroup { shapes: self.shapes.iter().map(f).collect(), rotation }
    }
}

/// World-space corners of a child: its local box centered on the child's
/// center, turned by the child's rotation tag.
fn world_corners(shape: &AnyShape) -> [Point; 4] {
    let bbox = shape.bounding_box();
    let center = shape.center();
    let half_w = bbox.width() / 2.0;
    let half_h = bbox.height() / 2.0;

    let corners = [
        Point::new(center.x() - half_w, center.y() - half_h),
        Point::new(center.x() + half_w, center.y() - half_h),
        Point::new(center.x() + half_w, center.y() + half_h),
        Point::new(center.x() - half_w, center.y() + half_h),
    ];

    let rotation = bbox.rotation();
    if rotation != 0.0 {
        corners.map(|corner| corner.rotated(rotation, center))
    } else {
        corners
    }
}

impl Shape for ShapeGroup {
    fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Midpoint of [`ShapeGroup::bounding_box`], not a centroid of the children
    fn center(&self) -> Point {
        self.bounding_box().center()
    }

    fn bounding_box(&self) -> BoundingBox {
        if self.shapes.is_empty() {
            return BoundingBox::empty(self.rotation);
        }

        let mut corners = Vec::with_capacity(self.shapes.len() * 4);
        for shape in &self.shapes {
            let child = world_corners(shape);
            trace!(?child, "child corners");
            corners.extend(child);
        }

        let world = Extent::of_points(corners.iter().copied());
        let bbox = if self.rotation != 0.0 {
            let pivot = world.center();
            Extent::of_points(corners.iter().map(|corner| corner.rotated(-self.rotation, pivot)))
                .to_bounding_box(self.rotation)
        } else {
            world.to_bounding_box(self.rotation)
        };

        debug!(children = self.shapes.len(), rotation = self.rotation, %bbox, "group bounding box");
        bbox
    }
}

impl Transform for ShapeGroup {
    /// Rotates every child about one common pivot (default: the group center)
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        let pivot = pivot.unwrap_or_else(|| self.center());
        self.map_shapes(self.rotation + angle, |shape| shape.rotated(angle, Some(pivot)))
    }

    /// Mirrors every child. The group's rotation tag is carried over unchanged.
    fn reflected(&self, axis: &Axis) -> Self {
        self.map_shapes(self.rotation, |shape| shape.reflected(axis))
    }
}
