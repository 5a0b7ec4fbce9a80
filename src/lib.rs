//! Immutable 2D shapes with rotation-aware bounding boxes.
//!
//! This crate is organized into modules:
//! - `types`: `Point`, `Axis`, `Extent` and `BoundingBox`
//! - `shapes`: `Segment`, `Rectangle`, `Polyline` and the composite `ShapeGroup`
//! - `boxes`: axis-aligned `Box2D`/`GroupBox` that drop orientation on rotation
//! - `angle`: degree/radian conversion
//! - `errors`: `GeometryError` with diagnostic codes
//!
//! Angles are in degrees, counter-clockwise positive. Every transform returns
//! a new value; nothing is mutated in place.
//!
//! ```
//! use tiltbox::{Point, Rectangle, Shape, ShapeGroup, Transform};
//!
//! let group = ShapeGroup::new([
//!     Rectangle::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
//!     Rectangle::new(Point::new(20.0, 0.0), Point::new(30.0, 10.0)),
//! ]);
//! let turned = group.rotated(90.0, None);
//!
//! assert_eq!(turned.rotation(), 90.0);
//! assert!((turned.bounding_box().width() - 30.0).abs() < 1e-9);
//! ```

pub mod angle;
pub mod boxes;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod shapes;
pub mod types;

pub use boxes::{AnyBox, AxisBox, Box2D, GroupBox};
pub use errors::GeometryError;
pub use shapes::{AnyShape, Mirror, Polyline, Rectangle, Segment, Shape, ShapeGroup, Transform};
pub use types::{Axis, BoundingBox, Extent, Point};
