//! Degree/radian conversion.
//!
//! Public APIs take degrees; trigonometry happens in radians.

use std::f64::consts::PI;

/// Convert an angle in degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert an angle in radians to degrees
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
