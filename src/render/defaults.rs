//! Default settings for emitted programs (PostScript points)

/// Where the root shape's lower-left corner lands on the page (one inch in)
pub const PAGE_ORIGIN_X: f64 = 72.0;
pub const PAGE_ORIGIN_Y: f64 = 72.0;
pub const LINE_WIDTH: f64 = 1.0;

/// Significant figures for every number written into a program
pub const PRECISION: usize = 6;
/// Float-noise tolerance. Vertex coordinates this small relative to their
/// shape's extents become exact zeros; page coordinates this close to an
/// integer count as that integer in `%%BoundingBox`.
pub const EPSILON: f64 = 1e-9;

/// Most sides a regular polygon may have
pub const MAX_POLYGON_SIDES: u32 = 1024;

/// Deepest fractal expansion accepted (3^10 triangles, 4^10 curves)
pub const MAX_DEPTH: u32 = 10;
pub const DEEP_EXPANSION_WARNING: u32 = 8;

/// Spaces of indentation per nested save scope
pub const INDENT: usize = 2;
