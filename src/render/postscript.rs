//! PostScript text generation
//!
//! `PsWriter` is the only thing that knows PostScript syntax. Shapes call
//! its operator methods and it takes care of number formatting and of
//! indenting each nested save scope.

use glam::DVec2;

use super::defaults;
use crate::types::Size;

/// Accumulates the lines of a PostScript program.
#[derive(Debug, Default)]
pub struct PsWriter {
    buf: String,
    depth: usize,
}

impl PsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one instruction line at the current nesting depth
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth * defaults::INDENT {
            self.buf.push(' ');
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// `gsave` and open a nested scope
    pub fn save(&mut self) {
        self.line("gsave");
        self.depth += 1;
    }

    /// Close the innermost scope with `grestore`
    pub fn restore(&mut self) {
        debug_assert!(self.depth > 0, "grestore without matching gsave");
        self.depth = self.depth.saturating_sub(1);
        self.line("grestore");
    }

    pub fn comment(&mut self, text: impl AsRef<str>) {
        self.line(format!("% {}", text.as_ref()));
    }

    /// The metadata comment that opens every node's block
    pub fn bbox_comment(&mut self, kind: &str, size: Size) {
        self.comment(format!(
            "{} width {} height {}",
            kind,
            fmt_num(size.w),
            fmt_num(size.h)
        ));
    }

    pub fn translate(&mut self, offset: DVec2) {
        self.line(translate_instruction(offset));
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.line(format!("{} rotate", fmt_num(degrees)));
    }

    pub fn scale(&mut self, fx: f64, fy: f64) {
        self.line(format!("{} {} scale", fmt_num(fx), fmt_num(fy)));
    }

    /// Stroke a path through `points`, closing it back to the first point
    /// when `closed` is set.
    pub fn stroke_path(&mut self, points: &[DVec2], closed: bool) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.line("newpath");
        self.line(format!("{} {} moveto", fmt_num(first.x), fmt_num(first.y)));
        for p in rest {
            self.line(format!("{} {} lineto", fmt_num(p.x), fmt_num(p.y)));
        }
        if closed {
            self.line("closepath");
        }
        self.line("stroke");
    }

    /// Stroke a full circle
    pub fn stroke_circle(&mut self, center: DVec2, radius: f64) {
        self.line("newpath");
        self.line(format!(
            "{} {} {} 0 360 arc",
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius)
        ));
        self.line("closepath");
        self.line("stroke");
    }

    pub fn finish(self) -> String {
        debug_assert_eq!(self.depth, 0, "unbalanced gsave/grestore");
        self.buf
    }
}

/// `x y translate` for an offset
pub fn translate_instruction(offset: DVec2) -> String {
    format!("{} {} translate", fmt_num(offset.x), fmt_num(offset.y))
}

/// Whether a placement is exactly the parent's origin. Offsets are sums of
/// footprints, so an unmoved child gets an exact zero.
pub fn is_zero_offset(offset: DVec2) -> bool {
    offset == DVec2::ZERO
}

/// Format a number with six significant figures, trailing zeros trimmed.
///
/// Never uses exponent notation and never rounds a nonzero value to `0`,
/// so tiny scale factors and lengths survive.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, defaults::PRECISION)
}

fn fmt_num_precision(value: f64, sig_figs: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` rounds to significant figures at any magnitude; `Display` on
    // the rounded value prints it positionally with no trailing zeros.
    let rounded = format!("{:.*e}", sig_figs.saturating_sub(1), value);
    match rounded.parse::<f64>() {
        Ok(r) => r.to_string(),
        Err(_) => value.to_string(),
    }
}

/// Integer bounding box around `[origin, origin + size]`, widened outward.
pub fn integer_bbox(origin: DVec2, size: Size) -> [i64; 4] {
    let eps = defaults::EPSILON;
    [
        (origin.x + eps).floor() as i64,
        (origin.y + eps).floor() as i64,
        (origin.x + size.w - eps).ceil() as i64,
        (origin.y + size.h - eps).ceil() as i64,
    ]
}
