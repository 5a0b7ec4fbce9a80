//! Crate-wide constants

/// Absolute tolerance used by the `approx_eq` helpers
pub const TOLERANCE: f64 = 1e-9;

/// Distance between the two points of a synthetic horizontal or vertical axis
pub const AXIS_UNIT: f64 = 1.0;
