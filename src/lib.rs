//! Compose geometric shapes into PostScript programs.
//!
//! A tree is built bottom-up from primitives ([`Shape::circle`],
//! [`Shape::polygon`], [`Shape::rectangle`], ...), adapters
//! ([`Shape::rotated`], [`Shape::scaled`]), combinators ([`Shape::layered`],
//! [`Shape::vertical`], [`Shape::horizontal`]) and the fractal generators
//! ([`Shape::s_triangle`], [`Shape::lpb`]). Every constructor validates its
//! input, so once a tree exists, turning it into text cannot fail.
//!
//! ```
//! use cps::{RotationAngle, Shape};
//!
//! let tower = Shape::vertical([
//!     Shape::square(10.0)?,
//!     Shape::rotated(Shape::triangle(10.0)?, RotationAngle::Half),
//! ])?;
//! let program = tower.to_text();
//! assert!(program.starts_with("gsave\n"));
//! # Ok::<(), cps::ShapeError>(())
//! ```

pub mod errors;
mod log;
pub mod render;
pub mod types;

pub use errors::{ShapeError, WriteError};
pub use render::adapters::{Rotated, Scaled};
pub use render::compound::{Compound, Layout};
pub use render::fractal::{Lpb, Placed, STriangle, UCurve};
pub use render::shapes::{
    Circle, Diamond, Draw, Polygon, Polyline, Rectangle, Shape, ShapeRef, Spacer,
};
pub use render::{RenderOptions, write_file};
pub use types::{RotationAngle, Size};
