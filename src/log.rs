//! `debug!` and `trace!` for the group code paths.
//!
//! `ShapeGroup::bounding_box` reports each child's world corners at trace
//! level and the resulting box at debug level; `GroupBox::rotated` reports its
//! pivot. Build with `--features tracing` to route these to `tracing`.
//! Otherwise the macros discard their arguments.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
