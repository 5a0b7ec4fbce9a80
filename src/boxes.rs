//! Axis-aligned boxes without an orientation tag.
//!
//! Unlike [`crate::shapes`], these boxes forget how they were turned: rotating
//! a [`Box2D`] replaces it with the axis-aligned box around its rotated
//! corners, so repeated rotations only ever grow it.

use enum_dispatch::enum_dispatch;

use crate::angle::degrees_to_radians;
use crate::errors::GeometryError;
use crate::log::debug;
use crate::shapes::Transform;
use crate::types::{Axis, BoundingBox, Extent, Point};

/// Queries shared by every axis-aligned box
#[enum_dispatch]
pub trait AxisBox {
    fn top_left(&self) -> Point;

    fn bottom_right(&self) -> Point;

    fn width(&self) -> f64 {
        self.bottom_right().x() - self.top_left().x()
    }

    fn height(&self) -> f64 {
        self.bottom_right().y() - self.top_left().y()
    }

    fn center(&self) -> Point {
        self.top_left().midpoint(self.bottom_right())
    }

    /// The same extent as an unrotated [`BoundingBox`]
    fn to_bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.top_left(), self.width(), self.height())
    }
}

/// Either kind of axis-aligned box
#[enum_dispatch(AxisBox)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBox {
    Box2D(Box2D),
    GroupBox(GroupBox),
}

impl Transform for AnyBox {
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        match self {
            AnyBox::Box2D(b) => AnyBox::Box2D(b.rotated(angle, pivot)),
            AnyBox::GroupBox(g) => AnyBox::GroupBox(g.rotated(angle, pivot)),
        }
    }

    fn reflected(&self, axis: &Axis) -> Self {
        match self {
            AnyBox::Box2D(b) => AnyBox::Box2D(b.reflected(axis)),
            AnyBox::GroupBox(g) => AnyBox::GroupBox(g.reflected(axis)),
        }
    }
}

/// A box given by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2D {
    top_left: Point,
    bottom_right: Point,
}

impl Box2D {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    pub fn from_top_left_and_size(top_left: Point, width: f64, height: f64) -> Self {
        Self::new(top_left, Point::new(top_left.x() + width, top_left.y() + height))
    }

    fn corners(&self) -> [Point; 4] {
        let (tl, br) = (self.top_left, self.bottom_right);
        [tl, Point::new(br.x(), tl.y()), br, Point::new(tl.x(), br.y())]
    }

    fn from_extent(extent: Extent) -> Self {
        Self::new(extent.min(), extent.max())
    }
}

impl AxisBox for Box2D {
    fn top_left(&self) -> Point {
        self.top_left
    }

    fn bottom_right(&self) -> Point {
        self.bottom_right
    }
}

impl Transform for Box2D {
    /// Axis-aligned box around the four corners rotated about `pivot`
    /// (default: the box center)
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        let pivot = pivot.unwrap_or_else(|| self.center());
        let radians = degrees_to_radians(angle);
        Box2D::from_extent(Extent::of_points(self.corners().map(|c| c.rotated_radians(radians, pivot))))
    }

    /// Axis-aligned box around the four mirrored corners
    fn reflected(&self, axis: &Axis) -> Self {
        Box2D::from_extent(Extent::of_points(self.corners().map(|c| c.reflected_across(axis))))
    }
}

/// A non-empty collection of boxes treated as one
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBox {
    boxes: Vec<AnyBox>,
}

impl GroupBox {
    /// Fails with [`GeometryError::EmptyGroup`] when `boxes` yields nothing
    pub fn new<I>(boxes: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator,
        I::Item: Into<AnyBox>,
    {
        let boxes: Vec<AnyBox> = boxes.into_iter().map(Into::into).collect();
        if boxes.is_empty() {
            return Err(GeometryError::EmptyGroup);
        }
        Ok(Self { boxes })
    }

    pub fn boxes(&self) -> &[AnyBox] {
        &self.boxes
    }

    fn map_boxes(&self, f: impl Fn(&AnyBox) -> AnyBox) -> Self {
        GroupBox { boxes: self.boxes.iter().map(f).collect() }
    }
}

impl AxisBox for GroupBox {
    fn top_left(&self) -> Point {
        self.boxes
            .iter()
            .map(AxisBox::top_left)
            .reduce(|a, b| Point::new(a.x().min(b.x()), a.y().min(b.y())))
            .unwrap_or(Point::ORIGIN)
    }

    fn bottom_right(&self) -> Point {
        self.boxes
            .iter()
            .map(AxisBox::bottom_right)
            .reduce(|a, b| Point::new(a.x().max(b.x()), a.y().max(b.y())))
            .unwrap_or(Point::ORIGIN)
    }
}

impl Transform for GroupBox {
    /// Rotates every child about one common pivot (default: the group center)
    fn rotated(&self, angle: f64, pivot: Option<Point>) -> Self {
        let pivot = pivot.unwrap_or_else(|| self.center());
        debug!(angle, %pivot, children = self.boxes.len(), "rotating box group");
        self.map_boxes(|b| b.rotated(angle, Some(pivot)))
    }

    fn reflected(&self, axis: &Axis) -> Self {
        self.map_boxes(|b| b.reflected(axis))
    }
}
