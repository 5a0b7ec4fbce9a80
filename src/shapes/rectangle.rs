use crate::types::{Axis, BoundingBox, Point};

use super::{Shape, Transform};

/// A rigid rectangle.
///
/// Width and height are fixed in the rectangle's local frame. Rotation moves
/// the center and updates the `rotation` tag; the stored corners always
/// describe the unrotated local box around the current center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    top_left: Point,
    bottom_right: Point,
    rotation: f64,
}

impl Rectangle {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right, rotation: 0.0 }
    }

    pub fn from_top_left_and_size(top_left: Point, width: f64, height: f64) -> Self {
        Self::new(top_left, Point::new(top_left.x() + width, top_left.y() + height))
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x() - self.top_left.x()
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y() - self.top_left.y()
    }

    /// Same size, recentred on `center`, with a new rotation tag
    fn recentred(&self, center: Point, rotation: f64) -> Self {
        let top_left = Point::new(center.x() - self.width() / 2.0, center.y() - self.height() / 2.0);
        Rectangle::from_top_left_and_size(top_left, self.width(), self.height()).with_rotation(rotation)
    }
}

impl Shape for Rectangle {
    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn center(&self) -> Point {
        self.top_left.midpoint(self.bottom_right)
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.top_left, self.width(), self.height()).with_rotation(self.rotation)
    }
}

impl Transform for Rectangle {
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        let center = self.center();
        let pivot = pivot.unwrap_or(center);
        self.recentred(center.rotated(angle, pivot), self.rotation + angle)
    }

    /// Mirrors the center; mirroring flips the sense of orientation, so the
    /// rotation tag is negated.
    fn reflected(&self, axis: &Axis) -> Self {
        self.recentred(self.center().reflected_across(axis), -self.rotation)
    }
}
