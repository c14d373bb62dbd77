//! PostScript rendering for shape trees
//!
//! This module is organized into submodules:
//! - `defaults`: Default page settings and limits
//! - `postscript`: `PsWriter` and number formatting
//! - `geometry`: Vertex generation for path-based primitives
//! - `shapes`: The `Shape` enum, the `Draw` trait and the primitives
//! - `adapters`: Rotated and Scaled
//! - `compound`: Layered, Vertical and Horizontal composition
//! - `fractal`: STriangle, LPB and U curve generators

pub mod adapters;
pub mod compound;
pub mod defaults;
pub mod fractal;
pub mod geometry;
pub mod postscript;
pub mod shapes;

use std::path::Path;

use glam::DVec2;

use crate::errors::WriteError;
use postscript::{PsWriter, fmt_num, integer_bbox};
use shapes::Shape;

/// Page-level settings for [`Shape::to_document`]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Where the root shape's lower-left corner lands on the page
    pub origin: DVec2,
    pub line_width: f64,
    /// End the page with `showpage` so printers eject it
    pub showpage: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            origin: DVec2::new(defaults::PAGE_ORIGIN_X, defaults::PAGE_ORIGIN_Y),
            line_width: defaults::LINE_WIDTH,
            showpage: true,
        }
    }
}

impl Shape {
    /// A complete Encapsulated PostScript page holding this shape.
    pub fn to_document(&self, options: &RenderOptions) -> String {
        let [llx, lly, urx, ury] = integer_bbox(options.origin, self.size());

        let mut out = PsWriter::new();
        out.line("%!PS-Adobe-3.0 EPSF-3.0");
        out.line(format!("%%BoundingBox: {llx} {lly} {urx} {ury}"));
        out.line(format!("%%Creator: cps {}", env!("CARGO_PKG_VERSION")));
        out.line("%%EndComments");
        out.line(format!("{} setlinewidth", fmt_num(options.line_width)));
        self.emit(&mut out, options.origin);
        if options.showpage {
            out.line("showpage");
        }
        out.line("%%EOF");
        out.finish()
    }
}

/// Write a finished program to `path` in one call, replacing any existing
/// file.
pub fn write_file(path: impl AsRef<Path>, text: &str) -> Result<(), WriteError> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    crate::log::debug!(path = %path.display(), bytes = text.len(), "wrote postscript file");
    Ok(())
}
