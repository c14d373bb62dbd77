//! Error types with diagnostics using miette
//!
//! Construction errors are raised synchronously by the shape constructors;
//! once a tree exists, emitting its text cannot fail. Only persistence can.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Construction Errors
// ============================================================================

/// Errors raised while building a shape tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid geometry: {what} out of range, got {value}")]
    #[diagnostic(
        code(cps::shape::invalid_geometry),
        help("lengths must be finite and strictly positive; polygons take 3 to 1024 sides")
    )]
    InvalidGeometry { what: &'static str, value: f64 },

    #[error("invalid rotation angle: {degrees}")]
    #[diagnostic(
        code(cps::shape::invalid_angle),
        help("rotations are limited to 90, 180 and 270 degrees")
    )]
    InvalidAngle { degrees: f64 },

    #[error("invalid scale factor: {axis} = {value}")]
    #[diagnostic(
        code(cps::shape::invalid_scale_factor),
        help("scale factors must be finite and strictly positive")
    )]
    InvalidScaleFactor { axis: char, value: f64 },

    #[error("invalid recursion depth: {depth}")]
    #[diagnostic(
        code(cps::shape::invalid_depth),
        help("depth must be between 0 and {max}")
    )]
    InvalidDepth { depth: i64, max: u32 },

    #[error("composition has no shapes")]
    #[diagnostic(
        code(cps::shape::empty_composition),
        help("layered, vertical and horizontal need at least one child")
    )]
    EmptyComposition,
}

// ============================================================================
// Persistence Errors
// ============================================================================

/// Errors raised while writing a finished program to storage
#[derive(Error, Diagnostic, Debug)]
pub enum WriteError {
    #[error("failed to write {}", path.display())]
    #[diagnostic(code(cps::write::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
