//! Vertex generation for the path-based primitives
//!
//! All functions return points already shifted into the shape's local
//! frame, so the minimum corner of their extents is the origin.

use std::f64::consts::PI;

use glam::DVec2;

use super::defaults;
use crate::types::Size;

/// Shift `points` so their minimum corner lands on the origin.
///
/// Returns the shifted points, the shift that was removed (the original
/// minimum corner) and the extents. Coordinates that are float noise
/// relative to the extents are snapped to zero.
pub fn normalize(points: &[DVec2]) -> (Vec<DVec2>, DVec2, Size) {
    let Some(&first) = points.first() else {
        return (Vec::new(), DVec2::ZERO, Size::ZERO);
    };
    let (min, max) = points
        .iter()
        .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let extent = max - min;
    let noise = extent.max_element() * defaults::EPSILON;
    let shifted = points
        .iter()
        .map(|&p| {
            let d = p - min;
            DVec2::new(snap(d.x, noise), snap(d.y, noise))
        })
        .collect();
    (shifted, min, Size::from(extent))
}

fn snap(value: f64, noise: f64) -> f64 {
    if value.abs() <= noise { 0.0 } else { value }
}

/// Vertices of a regular polygon resting on a horizontal bottom edge.
///
/// The circumradius is `side / (2 sin(π/n))`; vertex `k` sits at angle
/// `-π/2 + π/n + 2πk/n`, which puts vertices `n-1` and `0` at the ends of
/// the bottom edge.
pub fn regular_polygon(sides: u32, side_length: f64) -> (Vec<DVec2>, Size) {
    let n = f64::from(sides);
    let radius = side_length / (2.0 * (PI / n).sin());
    let start = -PI / 2.0 + PI / n;
    let raw: Vec<DVec2> = (0..sides)
        .map(|k| {
            let angle = start + 2.0 * PI * f64::from(k) / n;
            DVec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    let (points, _, size) = normalize(&raw);
    (points, size)
}

/// Corners of an axis-aligned rectangle, counter-clockwise from the origin
pub fn rectangle(size: Size) -> [DVec2; 4] {
    [
        DVec2::ZERO,
        DVec2::new(size.w, 0.0),
        DVec2::new(size.w, size.h),
        DVec2::new(0.0, size.h),
    ]
}

/// Edge midpoints of the frame: south, east, north, west
pub fn diamond(size: Size) -> [DVec2; 4] {
    let c = size.center();
    [
        DVec2::new(c.x, 0.0),
        DVec2::new(size.w, c.y),
        DVec2::new(c.x, size.h),
        DVec2::new(0.0, c.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn triangle_extents() {
        let (pts, size) = regular_polygon(3, 10.0);
        assert_eq!(pts.len(), 3);
        assert!(close(size.w, 10.0));
        assert!(close(size.h, 10.0 * 3f64.sqrt() / 2.0));
    }

    #[test]
    fn square_is_axis_aligned() {
        let (pts, size) = regular_polygon(4, 10.0);
        assert!(close(size.w, 10.0) && close(size.h, 10.0));
        for p in pts {
            assert!(close(p.x, 0.0) || close(p.x, 10.0));
            assert!(close(p.y, 0.0) || close(p.y, 10.0));
        }
    }

    #[test]
    fn hexagon_is_wider_than_tall() {
        let (_, size) = regular_polygon(6, 1.0);
        assert!(close(size.w, 2.0));
        assert!(close(size.h, 3f64.sqrt()));
    }

    #[test]
    fn bottom_edge_is_horizontal() {
        for n in 3..=9 {
            let (pts, _) = regular_polygon(n, 3.0);
            let last = pts[pts.len() - 1];
            assert!(close(pts[0].y, 0.0), "n={n}");
            assert!(close(last.y, 0.0), "n={n}");
            assert!(close((pts[0] - last).length(), 3.0), "n={n}");
        }
    }

    #[test]
    fn rounding_residue_becomes_exact_zero() {
        for side in [10.0, 3e-8, 4e6] {
            let (pts, _) = regular_polygon(4, side);
            for p in &pts {
                assert!(p.x == 0.0 || close(p.x / side, 1.0), "side {side}: {p}");
                assert!(p.y == 0.0 || close(p.y / side, 1.0), "side {side}: {p}");
            }
        }
    }

    #[test]
    fn normalize_reports_removed_shift() {
        let (pts, min, size) = normalize(&[DVec2::new(3.0, 5.0), DVec2::new(1.0, 9.0)]);
        assert_eq!(min, DVec2::new(1.0, 5.0));
        assert_eq!(size, Size::new(2.0, 4.0));
        assert_eq!(pts, vec![DVec2::new(2.0, 0.0), DVec2::new(0.0, 4.0)]);
    }
}
