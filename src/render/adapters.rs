//! Single-child adapters: rotation and scaling
//!
//! Both report the child's footprint after the transform, so a parent
//! combinator lays them out by what they look like on the page.

use glam::DVec2;

use super::postscript::PsWriter;
use super::shapes::{Draw, ShapeRef};
use crate::errors::ShapeError;
use crate::types::{RotationAngle, Size};

/// A child turned by a quarter, half or three-quarter turn about the centre
/// of its footprint
#[derive(Debug, Clone)]
pub struct Rotated {
    child: ShapeRef,
    angle: RotationAngle,
}

impl Rotated {
    pub fn new(child: impl Into<ShapeRef>, angle: RotationAngle) -> Self {
        Self {
            child: child.into(),
            angle,
        }
    }

    pub fn from_degrees(child: impl Into<ShapeRef>, degrees: f64) -> Result<Self, ShapeError> {
        Ok(Self::new(child, RotationAngle::from_degrees(degrees)?))
    }

    pub fn child(&self) -> &ShapeRef {
        &self.child
    }

    pub fn angle(&self) -> RotationAngle {
        self.angle
    }
}

impl Draw for Rotated {
    fn kind(&self) -> &'static str {
        "rotated"
    }

    fn size(&self) -> Size {
        let inner = self.child.size();
        if self.angle.swaps_axes() {
            inner.swapped()
        } else {
            inner
        }
    }

    fn draw(&self, out: &mut PsWriter) {
        let outer = self.size().center();
        let inner = self.child.size().center();
        let degrees = self.angle.degrees();

        out.translate(outer);
        out.rotate(degrees);
        out.translate(-inner);
        self.child.emit(out, DVec2::ZERO);
        out.translate(inner);
        out.rotate(-degrees);
        out.translate(-outer);
    }
}

/// A child stretched independently along x and y
#[derive(Debug, Clone)]
pub struct Scaled {
    child: ShapeRef,
    fx: f64,
    fy: f64,
}

impl Scaled {
    pub fn new(child: impl Into<ShapeRef>, fx: f64, fy: f64) -> Result<Self, ShapeError> {
        for (axis, value) in [('x', fx), ('y', fy)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ShapeError::InvalidScaleFactor { axis, value });
            }
        }
        Ok(Self {
            child: child.into(),
            fx,
            fy,
        })
    }

    pub fn child(&self) -> &ShapeRef {
        &self.child
    }

    pub fn factors(&self) -> (f64, f64) {
        (self.fx, self.fy)
    }
}

impl Draw for Scaled {
    fn kind(&self) -> &'static str {
        "scaled"
    }

    fn size(&self) -> Size {
        self.child.size().scaled(self.fx, self.fy)
    }

    fn draw(&self, out: &mut PsWriter) {
        out.scale(self.fx, self.fy);
        self.child.emit(out, DVec2::ZERO);
        out.scale(self.fx.recip(), self.fy.recip());
    }
}
