//! Combinators: layered, vertical and horizontal composition
//!
//! One `Compound` type covers all three layout policies. The translation
//! offset of every child is derived from the current children each time it
//! is needed, so there is no table to regenerate after the children change.

use glam::DVec2;

use super::postscript::{PsWriter, translate_instruction};
use super::shapes::{Draw, ShapeRef};
use crate::errors::ShapeError;
use crate::types::Size;

/// How a compound arranges its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Every child at the origin; later children paint over earlier ones
    Layered,
    /// Bottom to top, each child above the previous one
    Vertical,
    /// Left to right, each child beside the previous one
    Horizontal,
}

impl Layout {
    fn name(self) -> &'static str {
        match self {
            Layout::Layered => "layered",
            Layout::Vertical => "vertical",
            Layout::Horizontal => "horizontal",
        }
    }
}

/// An ordered, non-empty list of children arranged by a [`Layout`]
#[derive(Debug, Clone)]
pub struct Compound {
    layout: Layout,
    shapes: Vec<ShapeRef>,
}

impl Compound {
    pub fn new<I>(layout: Layout, shapes: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        Ok(Self {
            layout,
            shapes: collect_non_empty(shapes)?,
        })
    }

    pub fn layered<I>(shapes: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        Self::new(Layout::Layered, shapes)
    }

    pub fn vertical<I>(shapes: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        Self::new(Layout::Vertical, shapes)
    }

    pub fn horizontal<I>(shapes: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        Self::new(Layout::Horizontal, shapes)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn shapes(&self) -> &[ShapeRef] {
        &self.shapes
    }

    /// Replace the children. An empty list is rejected and leaves the
    /// current children in place.
    pub fn set_shapes<I>(&mut self, shapes: I) -> Result<(), ShapeError>
    where
        I: IntoIterator,
        I::Item: Into<ShapeRef>,
    {
        self.shapes = collect_non_empty(shapes)?;
        Ok(())
    }

    /// Offset of each child's lower-left corner in this node's frame,
    /// in child order.
    pub fn translate_points(&self) -> Vec<DVec2> {
        let mut cursor = DVec2::ZERO;
        self.shapes
            .iter()
            .map(|shape| {
                let at = cursor;
                let size = shape.size();
                match self.layout {
                    Layout::Layered => {}
                    Layout::Vertical => cursor.y += size.h,
                    Layout::Horizontal => cursor.x += size.w,
                }
                at
            })
            .collect()
    }

    /// The `translate` instruction that places child `index`
    pub fn translate(&self, index: usize) -> Option<String> {
        self.translate_points()
            .get(index)
            .map(|&offset| translate_instruction(offset))
    }
}

fn collect_non_empty<I>(shapes: I) -> Result<Vec<ShapeRef>, ShapeError>
where
    I: IntoIterator,
    I::Item: Into<ShapeRef>,
{
    let shapes: Vec<ShapeRef> = shapes.into_iter().map(Into::into).collect();
    if shapes.is_empty() {
        Err(ShapeError::EmptyComposition)
    } else {
        Ok(shapes)
    }
}

impl Draw for Compound {
    fn kind(&self) -> &'static str {
        self.layout.name()
    }

    fn size(&self) -> Size {
        let sizes = self.shapes.iter().map(|s| s.size());
        match self.layout {
            Layout::Layered => sizes.fold(Size::ZERO, Size::max),
            Layout::Vertical => sizes.fold(Size::ZERO, |acc, s| Size::new(acc.w.max(s.w), acc.h + s.h)),
            Layout::Horizontal => sizes.fold(Size::ZERO, |acc, s| Size::new(acc.w + s.w, acc.h.max(s.h))),
        }
    }

    fn draw(&self, out: &mut PsWriter) {
        for (shape, offset) in self.shapes.iter().zip(self.translate_points()) {
            shape.emit(out, offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shapes::Shape;

    fn rect(w: f64, h: f64) -> Shape {
        Shape::rectangle(w, h).unwrap()
    }

    #[test]
    fn footprints_follow_the_layout() {
        let a = || rect(3.0, 1.0);
        let b = || rect(2.0, 4.0);

        assert_eq!(Shape::vertical([a(), b()]).unwrap().size(), Size::new(3.0, 5.0));
        assert_eq!(Shape::horizontal([a(), b()]).unwrap().size(), Size::new(5.0, 4.0));
        assert_eq!(Shape::layered([a(), b()]).unwrap().size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn offsets_accumulate_along_the_stacking_axis() {
        let shapes = || [rect(3.0, 1.0), rect(2.0, 4.0), rect(1.0, 2.0)];

        let v = Compound::vertical(shapes()).unwrap();
        assert_eq!(
            v.translate_points(),
            vec![DVec2::ZERO, DVec2::new(0.0, 1.0), DVec2::new(0.0, 5.0)]
        );

        let h = Compound::horizontal(shapes()).unwrap();
        assert_eq!(
            h.translate_points(),
            vec![DVec2::ZERO, DVec2::new(3.0, 0.0), DVec2::new(5.0, 0.0)]
        );

        let l = Compound::layered(shapes()).unwrap();
        assert_eq!(l.translate_points(), vec![DVec2::ZERO; 3]);
    }

    #[test]
    fn translate_reads_the_current_offsets() {
        let v = Compound::vertical([rect(3.0, 1.0), rect(2.0, 4.0)]).unwrap();
        assert_eq!(v.translate(1).as_deref(), Some("0 1 translate"));
        assert_eq!(v.translate(0).as_deref(), Some("0 0 translate"));
        assert_eq!(v.translate(2), None);
    }

    #[test]
    fn offsets_follow_reassigned_children() {
        let mut v = Compound::vertical([rect(1.0, 1.0), rect(1.0, 1.0)]).unwrap();
        assert_eq!(v.translate(1).as_deref(), Some("0 1 translate"));

        v.set_shapes([rect(1.0, 7.0), rect(1.0, 1.0), rect(1.0, 1.0)]).unwrap();
        assert_eq!(v.translate_points().len(), 3);
        assert_eq!(v.translate(1).as_deref(), Some("0 7 translate"));
        assert_eq!(v.translate(2).as_deref(), Some("0 8 translate"));
    }

    #[test]
    fn empty_compositions_are_rejected() {
        let none: Vec<Shape> = Vec::new();
        for layout in [Layout::Layered, Layout::Vertical, Layout::Horizontal] {
            assert_eq!(
                Compound::new(layout, none.clone()).unwrap_err(),
                ShapeError::EmptyComposition
            );
        }

        let mut v = Compound::vertical([rect(1.0, 2.0)]).unwrap();
        assert_eq!(v.set_shapes(none).unwrap_err(), ShapeError::EmptyComposition);
        assert_eq!(v.shapes().len(), 1);
    }

    #[test]
    fn first_child_is_not_translated() {
        let text = Shape::horizontal([rect(2.0, 1.0), rect(1.0, 1.0)])
            .unwrap()
            .to_text();
        let translates: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| l.ends_with("translate"))
            .collect();
        assert_eq!(translates, vec!["2 0 translate"]);
    }

    #[test]
    fn one_child_can_appear_twice() {
        let shared: ShapeRef = rect(2.0, 3.0).into();
        let h = Shape::horizontal([shared.clone(), shared.clone()]).unwrap();
        assert_eq!(h.size(), Size::new(4.0, 3.0));
        assert_eq!(h.to_text().matches("% rectangle").count(), 2);
    }
}
