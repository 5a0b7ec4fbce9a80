//! Value types shared by every shape: points, axes, extents and bounding boxes.
//!
//! All of them are small `Copy` values. Transforms never mutate; they return a
//! new value.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::angle::degrees_to_radians;
use crate::defaults::{AXIS_UNIT, TOLERANCE};
use crate::errors::{GeometryError, ensure_finite};

/// A point in the plane
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point with validation (rejects NaN/infinite coordinates)
    pub fn try_new(x: f64, y: f64) -> Result<Self, GeometryError> {
        Ok(Point::new(ensure_finite("x", x)?, ensure_finite("y", y)?))
    }

    #[inline]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Rotate this point about `center` by `angle` degrees (counter-clockwise).
    pub fn rotated(self, angle: f64, center: Point) -> Point {
        self.rotated_radians(degrees_to_radians(angle), center)
    }

    /// Rotate this point about `center` by `angle` radians.
    pub fn rotated_radians(self, angle: f64, center: Point) -> Point {
        let c = center.to_vec();
        let offset = self.to_vec() - c;
        Point::from_vec(c + DVec2::from_angle(angle).rotate(offset))
    }

    /// Reflect this point across the line through `axis_start` and `axis_end`.
    ///
    /// Fails with [`GeometryError::InvalidAxis`] when the two axis points coincide.
    pub fn reflected(self, axis_start: Point, axis_end: Point) -> Result<Point, GeometryError> {
        Ok(self.reflected_across(&Axis::new(axis_start, axis_end)?))
    }

    /// Reflect this point across an already validated axis.
    pub fn reflected_across(self, axis: &Axis) -> Point {
        let origin = axis.start.to_vec();
        let offset = self.to_vec() - origin;
        let projection = origin + axis.direction * (offset.dot(axis.direction) * axis.inv_len_sq);
        Point::from_vec(projection * 2.0 - self.to_vec())
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    /// Component-wise comparison within the crate tolerance
    pub fn approx_eq(self, other: Point) -> bool {
        self.approx_eq_within(other, TOLERANCE)
    }

    pub fn approx_eq_within(self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    #[inline]
    pub(crate) fn to_vec(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    #[inline]
    pub(crate) fn from_vec(v: DVec2) -> Point {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An infinite line used as a mirror.
///
/// Construction guarantees the two defining points differ, so reflecting
/// across an `Axis` cannot divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    start: Point,
    direction: DVec2,
    inv_len_sq: f64,
}

impl Axis {
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        let direction = end.to_vec() - start.to_vec();
        let inv_len_sq = direction.length_squared().recip();
        // zero or subnormal length has no finite inverse
        if !inv_len_sq.is_finite() {
            return Err(GeometryError::InvalidAxis { x: start.x, y: start.y });
        }
        Ok(Axis { start, direction, inv_len_sq })
    }

    /// The line `y = y`
    pub fn horizontal(y: f64) -> Self {
        Axis { start: Point::new(0.0, y), direction: dvec2(AXIS_UNIT, 0.0), inv_len_sq: (AXIS_UNIT * AXIS_UNIT).recip() }
    }

    /// The line `x = x`
    pub fn vertical(x: f64) -> Self {
        Axis { start: Point::new(x, 0.0), direction: dvec2(0.0, AXIS_UNIT), inv_len_sq: (AXIS_UNIT * AXIS_UNIT).recip() }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        Point::from_vec(self.start.to_vec() + self.direction)
    }
}

/// Running min/max over a set of points.
///
/// Starts empty and grows with [`Extent::expand_point`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    min: Point,
    max: Point,
}

impl Default for Extent {
    fn default() -> Self {
        Self::new()
    }
}

impl Extent {
    /// Create an empty extent (will expand on first point)
    pub fn new() -> Self {
        Extent {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn of_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut extent = Extent::new();
        for p in points {
            extent.expand_point(p);
        }
        extent
    }

    /// Check if the extent is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn expand_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Describe this extent as a bounding box tagged with `rotation`.
    ///
    /// An empty extent becomes the zero-sized box at the origin.
    pub fn to_bounding_box(&self, rotation: f64) -> BoundingBox {
        if self.is_empty() {
            return BoundingBox::empty(rotation);
        }
        BoundingBox::new(self.min, self.width(), self.height()).with_rotation(rotation)
    }
}

/// Axis-aligned box in a shape's local frame.
///
/// `rotation` (degrees) describes how the enclosed shape is oriented; the box
/// itself is not rotated. Consumers that need world coordinates rotate the box
/// corners about the shape's center by this angle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    top_left: Point,
    width: f64,
    height: f64,
    rotation: f64,
}

impl BoundingBox {
    pub fn new(top_left: Point, width: f64, height: f64) -> Self {
        BoundingBox { top_left, width, height, rotation: 0.0 }
    }

    /// Create a box with validation (finite values, non-negative size)
    pub fn try_new(top_left: Point, width: f64, height: f64) -> Result<Self, GeometryError> {
        let top_left = Point::try_new(top_left.x, top_left.y)?;
        let width = ensure_finite("width", width)?;
        let height = ensure_finite("height", height)?;
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeSize { width, height });
        }
        Ok(BoundingBox::new(top_left, width, height))
    }

    /// The zero-sized box at the origin
    pub fn empty(rotation: f64) -> Self {
        BoundingBox::new(Point::ORIGIN, 0.0, 0.0).with_rotation(rotation)
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.top_left.x + self.width, self.top_left.y + self.height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn center(&self) -> Point {
        Point::new(self.top_left.x + self.width / 2.0, self.top_left.y + self.height / 2.0)
    }

    /// Compare position, size and rotation within the crate tolerance
    pub fn approx_eq(&self, other: &BoundingBox) -> bool {
        self.top_left.approx_eq(other.top_left)
            && (self.width - other.width).abs() <= TOLERANCE
            && (self.height - other.height).abs() <= TOLERANCE
            && (self.rotation - other.rotation).abs() <= TOLERANCE
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{} rot {}", self.top_left, self.width, self.height, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point(p: Point, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x(), x, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y(), y, epsilon = 1e-9);
    }

    // ==================== Point tests ====================

    #[test]
    fn point_stores_coordinates() {
        let p = Point::new(-10.0, -20.0);
        assert_eq!(p.x(), -10.0);
        assert_eq!(p.y(), -20.0);
    }

    #[test]
    fn point_try_new_rejects_non_finite() {
        assert!(Point::try_new(1.0, 2.0).is_ok());
        assert!(matches!(Point::try_new(f64::NAN, 0.0), Err(GeometryError::NonFinite { what: "x", .. })));
        assert!(matches!(Point::try_new(0.0, f64::NEG_INFINITY), Err(GeometryError::NonFinite { what: "y", .. })));
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        assert_point(Point::new(1.0, 0.0).rotated(90.0, Point::ORIGIN), 0.0, 1.0);
    }

    #[test]
    fn rotate_half_turn_about_origin() {
        assert_point(Point::new(1.0, 0.0).rotated(180.0, Point::ORIGIN), -1.0, 0.0);
    }

    #[test]
    fn rotate_about_custom_center() {
        assert_point(Point::new(2.0, 1.0).rotated(90.0, Point::new(1.0, 1.0)), 1.0, 2.0);
    }

    #[test]
    fn rotate_about_itself_is_identity() {
        let p = Point::new(5.0, 5.0);
        assert_point(p.rotated(45.0, p), 5.0, 5.0);
    }

    #[test]
    fn rotate_full_turn_in_radians() {
        let p = Point::new(3.0, 4.0).rotated_radians(2.0 * std::f64::consts::PI, Point::new(1.0, 1.0));
        assert_point(p, 3.0, 4.0);
    }

    #[test]
    fn reflect_over_horizontal_axis() {
        let p = Point::new(2.0, 3.0).reflected(Point::ORIGIN, Point::new(10.0, 0.0)).unwrap();
        assert_point(p, 2.0, -3.0);
    }

    #[test]
    fn reflect_over_vertical_axis() {
        let p = Point::new(3.0, 2.0).reflected(Point::ORIGIN, Point::new(0.0, 10.0)).unwrap();
        assert_point(p, -3.0, 2.0);
    }

    #[test]
    fn reflect_over_diagonal_swaps_coordinates() {
        let p = Point::new(3.0, 1.0).reflected(Point::ORIGIN, Point::new(1.0, 1.0)).unwrap();
        assert_point(p, 1.0, 3.0);
    }

    #[test]
    fn point_on_axis_is_fixed() {
        let p = Point::new(5.0, 0.0).reflected(Point::ORIGIN, Point::new(10.0, 0.0)).unwrap();
        assert_point(p, 5.0, 0.0);
    }

    #[test]
    fn reflect_over_offset_axis() {
        let p = Point::ORIGIN.reflected(Point::new(0.0, 5.0), Point::new(10.0, 5.0)).unwrap();
        assert_point(p, 0.0, 10.0);
    }

    #[test]
    fn reflect_over_degenerate_axis_fails() {
        let pivot = Point::new(4.0, 4.0);
        assert_eq!(
            Point::new(1.0, 2.0).reflected(pivot, pivot),
            Err(GeometryError::InvalidAxis { x: 4.0, y: 4.0 })
        );
    }

    #[test]
    fn midpoint_and_distance() {
        let a = Point::new(5.0, 5.0);
        let b = Point::new(8.0, 9.0);
        assert_eq!(a.midpoint(b), Point::new(6.5, 7.0));
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    // ==================== Axis tests ====================

    #[test]
    fn synthetic_axes_match_explicit_ones() {
        let p = Point::new(3.0, 7.0);
        let explicit = Axis::new(Point::new(0.0, 2.0), Point::new(1.0, 2.0)).unwrap();
        assert_eq!(p.reflected_across(&Axis::horizontal(2.0)), p.reflected_across(&explicit));
        assert_point(p.reflected_across(&Axis::vertical(1.0)), -1.0, 7.0);
    }

    #[test]
    fn nearly_coincident_axis_points_are_rejected() {
        let tiny = Axis::new(Point::ORIGIN, Point::new(1e-160, 0.0));
        assert_eq!(tiny, Err(GeometryError::InvalidAxis { x: 0.0, y: 0.0 }));
        assert!(Axis::new(Point::ORIGIN, Point::new(1e-100, 0.0)).is_ok());
    }

    #[test]
    fn axis_end_is_recovered() {
        let axis = Axis::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0)).unwrap();
        assert_eq!(axis.start(), Point::new(1.0, 1.0));
        assert_eq!(axis.end(), Point::new(4.0, 5.0));
    }

    // ==================== Extent tests ====================

    #[test]
    fn extent_new_is_empty() {
        assert!(Extent::new().is_empty());
        assert_eq!(Extent::new().to_bounding_box(30.0), BoundingBox::empty(30.0));
    }

    #[test]
    fn extent_tracks_min_and_max() {
        let extent = Extent::of_points([Point::new(-10.0, -20.0), Point::new(5.0, 10.0), Point::new(-5.0, 0.0)]);
        assert!(!extent.is_empty());
        assert_eq!(extent.min(), Point::new(-10.0, -20.0));
        assert_eq!(extent.max(), Point::new(5.0, 10.0));
        assert_eq!(extent.width(), 15.0);
        assert_eq!(extent.height(), 30.0);
        assert_eq!(extent.center(), Point::new(-2.5, -5.0));
    }

    #[test]
    fn single_point_extent_has_zero_size() {
        let bbox = Extent::of_points([Point::new(5.0, 10.0)]).to_bounding_box(0.0);
        assert_eq!(bbox.top_left(), Point::new(5.0, 10.0));
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
    }

    // ==================== BoundingBox tests ====================

    #[test]
    fn bbox_stores_fields() {
        let bbox = BoundingBox::new(Point::new(5.0, 10.0), 20.0, 30.0).with_rotation(45.0);
        assert_eq!(bbox.top_left(), Point::new(5.0, 10.0));
        assert_eq!(bbox.width(), 20.0);
        assert_eq!(bbox.height(), 30.0);
        assert_eq!(bbox.rotation(), 45.0);
        assert_eq!(bbox.bottom_right(), Point::new(25.0, 40.0));
    }

    #[test]
    fn bbox_rotation_defaults_to_zero() {
        assert_eq!(BoundingBox::new(Point::ORIGIN, 100.0, 50.0).rotation(), 0.0);
    }

    #[test]
    fn bbox_center() {
        assert_eq!(BoundingBox::new(Point::ORIGIN, 100.0, 50.0).center(), Point::new(50.0, 25.0));
        assert_eq!(BoundingBox::new(Point::new(10.0, 20.0), 30.0, 40.0).center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn bbox_try_new_validates() {
        assert!(BoundingBox::try_new(Point::new(10.0, 10.0), 0.0, 0.0).is_ok());
        assert_eq!(
            BoundingBox::try_new(Point::ORIGIN, -1.0, 2.0),
            Err(GeometryError::NegativeSize { width: -1.0, height: 2.0 })
        );
        assert!(matches!(
            BoundingBox::try_new(Point::ORIGIN, 1.0, f64::NAN),
            Err(GeometryError::NonFinite { what: "height", .. })
        ));
    }

    #[test]
    fn bbox_approx_eq_ignores_float_noise() {
        let a = BoundingBox::new(Point::new(1.0, 2.0), 3.0, 4.0);
        let b = BoundingBox::new(Point::new(1.0 + 1e-12, 2.0), 3.0, 4.0 - 1e-12);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&b.with_rotation(1.0)));
    }
}
