//! Small value types shared by every shape: footprints, rotation angles and
//! the checked constructors that turn raw `f64` input into valid geometry.

use std::fmt;

use glam::DVec2;

use crate::errors::ShapeError;

/// A node's footprint: the width and height of its bounding rectangle.
///
/// Every shape draws inside `[0, w] x [0, h]` of its local frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// Per-axis maximum of two footprints
    pub fn max(self, other: Size) -> Size {
        Size {
            w: self.w.max(other.w),
            h: self.h.max(other.h),
        }
    }

    /// Footprint with width and height exchanged (quarter turns)
    pub fn swapped(self) -> Size {
        Size { w: self.h, h: self.w }
    }

    /// Footprint scaled independently along each axis
    pub fn scaled(self, fx: f64, fy: f64) -> Size {
        Size {
            w: self.w * fx,
            h: self.h * fy,
        }
    }

    /// Centre of the footprint in the node's local frame
    pub fn center(self) -> DVec2 {
        DVec2::new(self.w / 2.0, self.h / 2.0)
    }
}

impl From<DVec2> for Size {
    fn from(v: DVec2) -> Self {
        Size { w: v.x, h: v.y }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Reject NaN, infinite, zero and negative lengths.
pub(crate) fn positive(what: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidGeometry { what, value })
    }
}

/// Rotation angles an adapter may apply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationAngle {
    Quarter,
    Half,
    ThreeQuarter,
}

impl RotationAngle {
    /// Counter-clockwise rotation in degrees, as PostScript `rotate` expects
    pub fn degrees(self) -> f64 {
        match self {
            RotationAngle::Quarter => 90.0,
            RotationAngle::Half => 180.0,
            RotationAngle::ThreeQuarter => 270.0,
        }
    }

    /// Parse a raw angle; anything other than 90, 180 or 270 is rejected.
    pub fn from_degrees(degrees: f64) -> Result<Self, ShapeError> {
        if degrees == 90.0 {
            Ok(RotationAngle::Quarter)
        } else if degrees == 180.0 {
            Ok(RotationAngle::Half)
        } else if degrees == 270.0 {
            Ok(RotationAngle::ThreeQuarter)
        } else {
            Err(ShapeError::InvalidAngle { degrees })
        }
    }

    /// Whether this rotation exchanges the footprint's width and height
    pub fn swaps_axes(self) -> bool {
        !matches!(self, RotationAngle::Half)
    }
}

impl TryFrom<i32> for RotationAngle {
    type Error = ShapeError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        RotationAngle::from_degrees(f64::from(degrees))
    }
}

impl fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_degenerate_values() {
        assert_eq!(positive("radius", 2.5), Ok(2.5));
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                positive("radius", bad),
                Err(ShapeError::InvalidGeometry { what: "radius", .. })
            ));
        }
    }

    #[test]
    fn rotation_angles_round_trip_through_degrees() {
        assert_eq!(RotationAngle::try_from(90), Ok(RotationAngle::Quarter));
        assert_eq!(RotationAngle::try_from(180), Ok(RotationAngle::Half));
        assert_eq!(RotationAngle::try_from(270), Ok(RotationAngle::ThreeQuarter));
        assert!(RotationAngle::Quarter.swaps_axes());
        assert!(!RotationAngle::Half.swaps_axes());
    }

    #[test]
    fn other_angles_are_rejected() {
        for bad in [0, 45, 360, -90] {
            assert!(matches!(
                RotationAngle::try_from(bad),
                Err(ShapeError::InvalidAngle { .. })
            ));
        }
    }

    #[test]
    fn size_helpers() {
        let a = Size::new(3.0, 8.0);
        let b = Size::new(5.0, 2.0);
        assert_eq!(a.max(b), Size::new(5.0, 8.0));
        assert_eq!(a.swapped(), Size::new(8.0, 3.0));
        assert_eq!(a.scaled(2.0, 0.5), Size::new(6.0, 4.0));
        assert_eq!(a.center(), DVec2::new(1.5, 4.0));
    }
}
