use crate::errors::GeometryError;
use crate::types::{Axis, BoundingBox, Extent, Point};

use super::{Shape, Transform};

/// A straight segment between two points.
///
/// `rotation` is orientation metadata accumulated through [`Transform::rotated`];
/// it is independent of the direction from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    rotation: f64,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end, rotation: 0.0 }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl Shape for Segment {
    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    fn bounding_box(&self) -> BoundingBox {
        Extent::of_points([self.start, self.end]).to_bounding_box(self.rotation)
    }
}

impl Transform for Segment {
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        let pivot = pivot.unwrap_or_else(|| self.center());
        Segment {
            start: self.start.rotated(angle, pivot),
            end: self.end.rotated(angle, pivot),
            rotation: self.rotation + angle,
        }
    }

    /// Mirrors both endpoints. The rotation tag is carried over unchanged.
    fn reflected(&self, axis: &Axis) -> Self {
        Segment {
            start: self.start.reflected_across(axis),
            end: self.end.reflected_across(axis),
            rotation: self.rotation,
        }
    }
}

impl TryFrom<&Segment> for Axis {
    type Error = GeometryError;

    fn try_from(segment: &Segment) -> Result<Self, Self::Error> {
        Axis::new(segment.start, segment.end)
    }
}
