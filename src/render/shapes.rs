//! Shape types
//!
//! `Shape` is a closed enum over every node kind. Each variant wraps its own
//! type that knows how to:
//! - Report its footprint (the bounding rectangle its parent lays out)
//! - Draw its body inside its local frame
//!
//! The per-node scaffolding (save scope, placement, bounding-box comment)
//! lives in [`Shape::emit`] so every node gets it identically.

use std::path::Path;
use std::rc::Rc;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::adapters::{Rotated, Scaled};
use super::compound::{Compound, Layout};
use super::fractal::{Lpb, STriangle, UCurve};
use super::defaults;
use super::geometry;
use super::postscript::{PsWriter, is_zero_offset};
use super::{RenderOptions, write_file};
use crate::errors::{ShapeError, WriteError};
use crate::types::{RotationAngle, Size, positive};

/// Shared handle to a finished shape.
///
/// Composite nodes hold their children through this so one instance can
/// appear under several parents.
pub type ShapeRef = Rc<Shape>;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Draw {
    /// Short lowercase name written into the bounding-box comment
    fn kind(&self) -> &'static str;

    /// Width and height of the node's bounding rectangle
    fn size(&self) -> Size;

    /// Write the node's body. The caller has already opened the save scope
    /// and moved the origin to the node's lower-left corner.
    fn draw(&self, out: &mut PsWriter);
}

// ============================================================================
// Primitives
// ============================================================================

/// A circle, stroked around the centre of its footprint
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: positive("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Draw for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn size(&self) -> Size {
        Size::new(self.radius * 2.0, self.radius * 2.0)
    }

    fn draw(&self, out: &mut PsWriter) {
        out.stroke_circle(DVec2::splat(self.radius), self.radius);
    }
}

/// A regular polygon resting on a horizontal bottom edge
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    sides: u32,
    side_length: f64,
    vertices: Vec<DVec2>,
    size: Size,
}

impl Polygon {
    pub fn new(sides: u32, side_length: f64) -> Result<Self, ShapeError> {
        if !(3..=defaults::MAX_POLYGON_SIDES).contains(&sides) {
            return Err(ShapeError::InvalidGeometry {
                what: "polygon side count",
                value: f64::from(sides),
            });
        }
        let side_length = positive("side length", side_length)?;
        let (vertices, size) = geometry::regular_polygon(sides, side_length);
        Ok(Self {
            sides,
            side_length,
            vertices,
            size,
        })
    }

    pub fn square(side_length: f64) -> Result<Self, ShapeError> {
        Self::new(4, side_length)
    }

    pub fn triangle(side_length: f64) -> Result<Self, ShapeError> {
        Self::new(3, side_length)
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}

impl Draw for Polygon {
    fn kind(&self) -> &'static str {
        "polygon"
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, out: &mut PsWriter) {
        out.stroke_path(&self.vertices, true);
    }
}

/// An axis-aligned rectangle filling its footprint
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    size: Size,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            size: Size::new(positive("width", width)?, positive("height", height)?),
        })
    }
}

impl Draw for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, out: &mut PsWriter) {
        out.stroke_path(&geometry::rectangle(self.size), true);
    }
}

/// Empty space: takes part in layout but draws nothing
#[derive(Debug, Clone, PartialEq)]
pub struct Spacer {
    size: Size,
}

impl Spacer {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            size: Size::new(positive("width", width)?, positive("height", height)?),
        })
    }
}

impl Draw for Spacer {
    fn kind(&self) -> &'static str {
        "spacer"
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, _out: &mut PsWriter) {}
}

/// A square turned 45 degrees, vertices on the midpoints of its footprint
#[derive(Debug, Clone, PartialEq)]
pub struct Diamond {
    side_length: f64,
}

impl Diamond {
    pub fn new(side_length: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            side_length: positive("side length", side_length)?,
        })
    }
}

impl Draw for Diamond {
    fn kind(&self) -> &'static str {
        "diamond"
    }

    fn size(&self) -> Size {
        let diagonal = self.side_length * std::f64::consts::SQRT_2;
        Size::new(diagonal, diagonal)
    }

    fn draw(&self, out: &mut PsWriter) {
        out.stroke_path(&geometry::diamond(self.size()), true);
    }
}

/// An open stroked path
///
/// Points are stored relative to the minimum corner of their extents;
/// [`Polyline::origin`] keeps the corner so a generator can place the line
/// where its points originally were.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<DVec2>,
    origin: DVec2,
    size: Size,
}

impl Polyline {
    pub fn new(points: &[DVec2]) -> Result<Self, ShapeError> {
        if points.len() < 2 {
            return Err(ShapeError::InvalidGeometry {
                what: "polyline point count",
                value: points.len() as f64,
            });
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            let value = if bad.x.is_finite() { bad.y } else { bad.x };
            return Err(ShapeError::InvalidGeometry {
                what: "polyline coordinate",
                value,
            });
        }
        let (points, origin, size) = geometry::normalize(points);
        Ok(Self {
            points,
            origin,
            size,
        })
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }
}

impl Draw for Polyline {
    fn kind(&self) -> &'static str {
        "polyline"
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, out: &mut PsWriter) {
        out.stroke_path(&self.points, false);
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// Any node of a shape tree
#[enum_dispatch(Draw)]
#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Spacer(Spacer),
    Diamond(Diamond),
    Polyline(Polyline),
    Rotated(Rotated),
    Scaled(Scaled),
    Compound(Compound),
    STriangle(STriangle),
    Lpb(Lpb),
    UCurve(UCurve),
}

impl Shape {
    pub fn circle(radius: f64) -> Result<Self, ShapeError> {
        Circle::new(radius).map(Shape::from)
    }

    pub fn polygon(sides: u32, side_length: f64) -> Result<Self, ShapeError> {
        Polygon::new(sides, side_length).map(Shape::from)
    }

    pub fn square(side_length: f64) -> Result<Self, ShapeError> {
        Polygon::square(side_length).map(Shape::from)
    }

    pub fn triangle(side_length: f64) -> Result<Self, ShapeError> {
        Polygon::triangle(side_length).map(Shape::from)
    }

    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        Rectangle::new(width, height).map(Shape::from)
    }

    pub fn spacer(width: f64, height: f64) -> Result<Self, ShapeError> {
        Spacer::new(width, height).map(Shape::from)
    }

    pub fn diamond(side_length: f64) -> Result<Self, ShapeError> {
        Diamond::new(side_length).map(Shape::from)
    }

    pub fn polyline(points: &[DVec2]) -> Result<Self, ShapeError> {
        Polyline::new(points).map(Shape::from)
    }

    pub fn rotated(child: impl Into<ShapeRef>, angle: RotationAngle) -> Self {
        Rotated::new(child, angle).into()
    }

    /// Rotate by a raw angle; only 90, 180 and 270 are accepted.
    pub fn rotated_degrees(child: impl Into<ShapeRef>, degrees: f64) -> Result<Self, ShapeError> {
        Rotated::from_degrees(child, degrees).map(Shape::from)
    }

    pub fn scaled(child: impl Into<ShapeRef>, fx: f64, fy: f64) -> Result<Self, ShapeError> {
        Scaled::new(child, fx, fy).map(Shape::from)
    }

    pub fn layered<I>(children: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        Compound::new(Layout::Layered, children).map(Shape::from)
    }

    pub fn vertical<I>(children: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        Compound::new(Layout::Vertical, children).map(Shape::from)
    }

    pub fn horizontal<I>(children: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        Compound::new(Layout::Horizontal, children).map(Shape::from)
    }

    pub fn s_triangle(side: f64, depth: i32) -> Result<Self, ShapeError> {
        STriangle::new(side, depth).map(Shape::from)
    }

    pub fn lpb(side: f64, depth: i32) -> Result<Self, ShapeError> {
        Lpb::new(side, depth).map(Shape::from)
    }

    pub fn u_curve(side: f64) -> Result<Self, ShapeError> {
        UCurve::new(side).map(Shape::from)
    }

    pub fn kind(&self) -> &'static str {
        Draw::kind(self)
    }

    pub fn size(&self) -> Size {
        Draw::size(self)
    }

    pub fn width(&self) -> f64 {
        self.size().w
    }

    pub fn height(&self) -> f64 {
        self.size().h
    }

    /// Write this node's complete block, placed at `offset` in the parent's
    /// frame: `gsave`, the placement, the bounding-box comment, the body,
    /// `grestore`.
    pub fn emit(&self, out: &mut PsWriter, offset: DVec2) {
        out.save();
        if !is_zero_offset(offset) {
            out.translate(offset);
        }
        out.bbox_comment(self.kind(), self.size());
        self.draw(out);
        out.restore();
    }

    /// The PostScript program for this subtree, without a document header
    pub fn to_text(&self) -> String {
        crate::log::trace!(kind = self.kind(), "emitting shape program");
        let mut out = PsWriter::new();
        self.emit(&mut out, DVec2::ZERO);
        out.finish()
    }

    /// Render this shape as a complete page with default options and write
    /// it to `path`, replacing any existing file.
    pub fn generate_postscript_file(&self, path: impl AsRef<Path>) -> Result<(), WriteError> {
        write_file(path, &self.to_document(&RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn circle_footprint_is_its_diameter() {
        let c = Shape::circle(2.5).unwrap();
        assert_eq!(c.kind(), "circle");
        assert_eq!(c.size(), Size::new(5.0, 5.0));
    }

    #[test]
    fn polygon_specialisations() {
        let sq = Shape::square(10.0).unwrap();
        assert!(close(sq.width(), 10.0) && close(sq.height(), 10.0));

        let tri = Shape::triangle(10.0).unwrap();
        assert!(close(tri.width(), 10.0));
        assert!(close(tri.height(), 5.0 * 3f64.sqrt()));

        let Shape::Polygon(p) = Shape::square(3.0).unwrap() else {
            panic!("square should be a polygon");
        };
        assert_eq!(p.sides(), 4);
        assert_eq!(p.side_length(), 3.0);
    }

    #[test]
    fn polygon_side_count_is_bounded() {
        let most = Shape::polygon(defaults::MAX_POLYGON_SIDES, 1.0).unwrap();
        assert_eq!(most.kind(), "polygon");
        assert_eq!(
            Shape::polygon(u32::MAX, 1.0).unwrap_err(),
            ShapeError::InvalidGeometry {
                what: "polygon side count",
                value: f64::from(u32::MAX),
            }
        );
    }

    #[test]
    fn tiny_circle_keeps_its_radius() {
        let text = Shape::circle(5e-10).unwrap().to_text();
        assert!(
            text.contains("0.0000000005 0.0000000005 0.0000000005 0 360 arc\n"),
            "{text}"
        );
        assert!(text.contains("% circle width 0.000000001 height 0.000000001\n"));
    }

    #[test]
    fn diamond_footprint_is_its_diagonal() {
        let d = Shape::diamond(2.0).unwrap();
        assert!(close(d.width(), 2.0 * 2f64.sqrt()));
        assert!(close(d.height(), d.width()));
    }

    #[test]
    fn non_positive_geometry_is_rejected() {
        let attempts = [
            Shape::circle(0.0),
            Shape::circle(-1.0),
            Shape::circle(f64::NAN),
            Shape::square(0.0),
            Shape::triangle(-2.0),
            Shape::rectangle(0.0, 1.0),
            Shape::rectangle(1.0, f64::INFINITY),
            Shape::spacer(-1.0, 1.0),
            Shape::diamond(0.0),
            Shape::polygon(2, 1.0),
            Shape::polygon(defaults::MAX_POLYGON_SIDES + 1, 1.0),
            Shape::polygon(u32::MAX, 1.0),
        ];
        for attempt in attempts {
            assert!(
                matches!(attempt, Err(ShapeError::InvalidGeometry { .. })),
                "{attempt:?}"
            );
        }
    }

    #[test]
    fn polyline_is_normalised_to_its_extents() {
        let line = Polyline::new(&[DVec2::new(3.0, 7.0), DVec2::new(3.0, 2.0)]).unwrap();
        assert_eq!(line.origin(), DVec2::new(3.0, 2.0));
        assert_eq!(line.size(), Size::new(0.0, 5.0));
        assert_eq!(line.points(), &[DVec2::new(0.0, 5.0), DVec2::ZERO]);
    }

    #[test]
    fn polyline_needs_two_finite_points() {
        assert!(Polyline::new(&[DVec2::ONE]).is_err());
        assert!(Polyline::new(&[DVec2::ONE, DVec2::new(f64::NAN, 0.0)]).is_err());
    }

    #[test]
    fn spacer_draws_nothing() {
        let text = Shape::spacer(4.0, 2.0).unwrap().to_text();
        assert_eq!(text, "gsave\n  % spacer width 4 height 2\ngrestore\n");
    }

    #[test]
    fn rectangle_block() {
        let text = Shape::rectangle(4.0, 2.0).unwrap().to_text();
        insta::assert_snapshot!(text, @r"
        gsave
          % rectangle width 4 height 2
          newpath
          0 0 moveto
          4 0 lineto
          4 2 lineto
          0 2 lineto
          closepath
          stroke
        grestore
        ");
    }

    #[test]
    fn circle_block() {
        let text = Shape::circle(2.5).unwrap().to_text();
        insta::assert_snapshot!(text, @r"
        gsave
          % circle width 5 height 5
          newpath
          2.5 2.5 2.5 0 360 arc
          closepath
          stroke
        grestore
        ");
    }

    #[test]
    fn placement_goes_inside_the_save_scope() {
        let mut out = PsWriter::new();
        Shape::spacer(1.0, 1.0)
            .unwrap()
            .emit(&mut out, DVec2::new(0.0, 10.0));
        assert_eq!(
            out.finish(),
            "gsave\n  0 10 translate\n  % spacer width 1 height 1\ngrestore\n"
        );
    }
}
