use crate::types::{Axis, BoundingBox, Extent, Point};

use super::{Shape, Transform};

/// An open chain of points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point>,
    rotation: f64,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, rotation: 0.0 }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn map_points(&self, rotation: f64, f: impl Fn(Point) -> Point) -> Self {
        Polyline { points: self.points.iter().copied().map(f).collect(), rotation }
    }
}

impl Shape for Polyline {
    fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Midpoint of the first and last point (origin when empty)
    fn center(&self) -> Point {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.midpoint(*last),
            _ => Point::ORIGIN,
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        Extent::of_points(self.points.iter().copied()).to_bounding_box(self.rotation)
    }
}

impl Transform for Polyline {
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        let pivot = pivot.unwrap_or_else(|| self.center());
        self.map_points(self.rotation + angle, |p| p.rotated(angle, pivot))
    }

    fn reflected(&self, axis: &Axis) -> Self {
        self.map_points(self.rotation, |p| p.reflected_across(axis))
    }
}
