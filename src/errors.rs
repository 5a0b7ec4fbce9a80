//! Error types for geometric construction and reflection.
//!
//! Nearly every operation in the crate is total. The few that are not report
//! one of these variants, each carrying a diagnostic code.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by validated constructors and reflections
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid reflection axis: both axis points are ({x}, {y})")]
    #[diagnostic(
        code(tiltbox::axis::invalid),
        help("an axis needs two distinct points to define a direction")
    )]
    InvalidAxis { x: f64, y: f64 },

    #[error("{what} is not finite: {value}")]
    #[diagnostic(code(tiltbox::numeric::non_finite))]
    NonFinite { what: &'static str, value: f64 },

    #[error("negative box size: {width} x {height}")]
    #[diagnostic(
        code(tiltbox::bbox::negative_size),
        help("width and height are measured from the top-left corner and must be >= 0")
    )]
    NegativeSize { width: f64, height: f64 },

    #[error("box group has no children")]
    #[diagnostic(
        code(tiltbox::boxes::empty_group),
        help("a GroupBox takes its extent from its children; pass at least one box")
    )]
    EmptyGroup,
}

/// Reject NaN and infinite inputs for a named quantity
pub(crate) fn ensure_finite(what: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { what, value })
    }
}
