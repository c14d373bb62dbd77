//! Self-similar generators: the Sierpinski triangle, the line-plane
//! bijection curve and the U curve it is built from.
//!
//! Each generator expands its rule once, in its constructor, into a list of
//! [`Placed`] parts. One recursion level produces a single shared child that
//! is placed several times, so memory grows with depth, not with the number
//! of emitted primitives.

use std::f64::consts::PI;

use glam::DVec2;

use super::defaults;
use super::postscript::PsWriter;
use super::shapes::{Draw, Polygon, Polyline, Shape, ShapeRef};
use crate::errors::ShapeError;
use crate::types::{RotationAngle, Size, positive};

/// A generated part: a shape and where its lower-left corner goes
#[derive(Debug, Clone)]
pub struct Placed {
    pub offset: DVec2,
    pub shape: ShapeRef,
}

impl Placed {
    pub fn new(offset: DVec2, shape: impl Into<ShapeRef>) -> Self {
        Self {
            offset,
            shape: shape.into(),
        }
    }
}

fn draw_parts(parts: &[Placed], out: &mut PsWriter) {
    for part in parts {
        part.shape.emit(out, part.offset);
    }
}

/// Accept `0..=MAX_DEPTH`.
fn checked_depth(depth: i32) -> Result<u32, ShapeError> {
    match u32::try_from(depth) {
        Ok(d) if d <= defaults::MAX_DEPTH => Ok(d),
        _ => Err(ShapeError::InvalidDepth {
            depth: i64::from(depth),
            max: defaults::MAX_DEPTH,
        }),
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn warn_if_deep(kind: &str, depth: u32) {
    if depth >= defaults::DEEP_EXPANSION_WARNING {
        crate::log::warn!(kind, depth, "deep fractal expansion, output will be large");
    }
}

/// A straight stroke from `from` to `to`, placed where its points lie.
fn segment(from: DVec2, to: DVec2) -> Result<Placed, ShapeError> {
    let line = Polyline::new(&[from, to])?;
    Ok(Placed::new(line.origin(), Shape::from(line)))
}

// ============================================================================
// Sierpinski triangle
// ============================================================================

/// Sierpinski triangle: three half-size copies per level, at the two base
/// corners and the apex of the parent triangle.
#[derive(Debug, Clone)]
pub struct STriangle {
    side: f64,
    depth: u32,
    parts: Vec<Placed>,
}

impl STriangle {
    pub fn new(side: f64, depth: i32) -> Result<Self, ShapeError> {
        let side = positive("side length", side)?;
        let depth = checked_depth(depth)?;
        warn_if_deep("striangle", depth);
        let node = Self::expand(side, depth)?;
        crate::log::debug!(
            side,
            depth,
            triangles = 3u64.pow(depth),
            "expanded sierpinski triangle"
        );
        Ok(node)
    }

    fn expand(side: f64, depth: u32) -> Result<Self, ShapeError> {
        let parts = if depth == 0 {
            vec![Placed::new(DVec2::ZERO, Shape::from(Polygon::triangle(side)?))]
        } else {
            let half = side / 2.0;
            let sub: ShapeRef = Shape::from(Self::expand(half, depth - 1)?).into();
            vec![
                Placed::new(DVec2::ZERO, sub.clone()),
                Placed::new(DVec2::new(half, 0.0), sub.clone()),
                Placed::new(DVec2::new(half / 2.0, triangle_height(half)), sub),
            ]
        };
        Ok(Self { side, depth, parts })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn parts(&self) -> &[Placed] {
        &self.parts
    }
}

fn triangle_height(side: f64) -> f64 {
    side * (PI / 3.0).sin()
}

impl Draw for STriangle {
    fn kind(&self) -> &'static str {
        "striangle"
    }

    fn size(&self) -> Size {
        Size::new(self.side, triangle_height(self.side))
    }

    fn draw(&self, out: &mut PsWriter) {
        draw_parts(&self.parts, out);
    }
}

// ============================================================================
// U curve
// ============================================================================

/// Three strokes tracing a U open at the top, through the centres of the
/// four quarter cells of its square footprint.
#[derive(Debug, Clone)]
pub struct UCurve {
    side: f64,
    parts: Vec<Placed>,
}

impl UCurve {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        let side = positive("side length", side)?;
        let (lo, hi) = (side / 4.0, side * 3.0 / 4.0);
        let corners = [
            DVec2::new(lo, hi),
            DVec2::new(lo, lo),
            DVec2::new(hi, lo),
            DVec2::new(hi, hi),
        ];
        let parts: Vec<Placed> = corners
            .windows(2)
            .map(|pair| segment(pair[0], pair[1]))
            .collect::<Result<_, _>>()?;
        Ok(Self { side, parts })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn parts(&self) -> &[Placed] {
        &self.parts
    }
}

impl Draw for UCurve {
    fn kind(&self) -> &'static str {
        "u-curve"
    }

    fn size(&self) -> Size {
        Size::new(self.side, self.side)
    }

    fn draw(&self, out: &mut PsWriter) {
        draw_parts(&self.parts, out);
    }
}

// ============================================================================
// Line-plane bijection
// ============================================================================

/// Line-plane bijection: a Hilbert-style space-filling curve.
///
/// Level 0 is a [`UCurve`]. Each further level visits the four quadrants in
/// the order top-left, bottom-left, bottom-right, top-right. The top
/// quadrants hold the half-size curve turned a quarter (top-left) or three
/// quarters (top-right) so its open ends face the neighbouring quadrants,
/// and three connector strokes join the quadrant curves end to end.
#[derive(Debug, Clone)]
pub struct Lpb {
    side: f64,
    depth: u32,
    parts: Vec<Placed>,
}

impl Lpb {
    pub fn new(side: f64, depth: i32) -> Result<Self, ShapeError> {
        let side = positive("side length", side)?;
        let depth = checked_depth(depth)?;
        warn_if_deep("lpb", depth);
        let node = Self::expand(side, depth)?;
        crate::log::debug!(
            side,
            depth,
            curves = 4u64.pow(depth),
            "expanded line-plane bijection"
        );
        Ok(node)
    }

    fn expand(side: f64, depth: u32) -> Result<Self, ShapeError> {
        if depth == 0 {
            let parts = vec![Placed::new(DVec2::ZERO, Shape::from(UCurve::new(side)?))];
            return Ok(Self { side, depth, parts });
        }

        let q = side / 2.0;
        // Distance from a quadrant's edge to the nearest grid line of the
        // finished curve, where its open ends sit.
        let m = side / 2f64.powi(depth as i32 + 2);

        let sub: ShapeRef = Shape::from(Self::expand(q, depth - 1)?).into();
        let parts = vec![
            Placed::new(DVec2::new(0.0, q), Shape::rotated(sub.clone(), RotationAngle::Quarter)),
            Placed::new(DVec2::ZERO, sub.clone()),
            Placed::new(DVec2::new(q, 0.0), sub.clone()),
            Placed::new(DVec2::new(q, q), Shape::rotated(sub, RotationAngle::ThreeQuarter)),
            segment(DVec2::new(m, q - m), DVec2::new(m, q + m))?,
            segment(DVec2::new(q - m, q - m), DVec2::new(q + m, q - m))?,
            segment(DVec2::new(side - m, q - m), DVec2::new(side - m, q + m))?,
        ];
        Ok(Self { side, depth, parts })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn parts(&self) -> &[Placed] {
        &self.parts
    }
}

impl Draw for Lpb {
    fn kind(&self) -> &'static str {
        "lpb"
    }

    fn size(&self) -> Size {
        Size::new(self.side, self.side)
    }

    fn draw(&self, out: &mut PsWriter) {
        draw_parts(&self.parts, out);
    }
}
