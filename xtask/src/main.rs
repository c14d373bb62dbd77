use camino::{Utf8Path, Utf8PathBuf};
use cps::{RotationAngle, Shape, ShapeError};
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use rayon::prelude::*;

/// A named demo tree. Trees hold `Rc` children, so each one is built on the
/// worker thread that renders it.
type Demo = (&'static str, fn() -> Result<Shape, ShapeError>);

const DEMOS: &[Demo] = &[
    ("primitives", primitives),
    ("tower", tower),
    ("turns", turns),
    ("stretched", stretched),
    ("sierpinski", sierpinski),
    ("hilbert", hilbert),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [DIR]   Write every demo shape as a .ps page into DIR (default: gallery)");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => {
            let dir = args
                .get(2)
                .map(Utf8PathBuf::from)
                .unwrap_or_else(default_gallery_dir);
            gallery(&dir)
        }
        other => Err(miette!("unknown command: {other}")),
    }
}

fn default_gallery_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Utf8Path::new("."))
        .join("gallery")
}

fn gallery(dir: &Utf8Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("creating {dir}"))?;

    let written = DEMOS
        .par_iter()
        .map(|(name, build)| -> Result<Utf8PathBuf> {
            let shape = build().wrap_err_with(|| format!("building demo {name}"))?;
            let path = dir.join(format!("{name}.ps"));
            shape.generate_postscript_file(&path)?;
            tracing::info!(%path, width = shape.width(), height = shape.height(), "wrote demo");
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;

    eprintln!("Wrote {} files to {dir}", written.len());
    Ok(())
}

fn primitives() -> Result<Shape, ShapeError> {
    Shape::horizontal([
        Shape::circle(20.0)?,
        Shape::spacer(10.0, 1.0)?,
        Shape::triangle(40.0)?,
        Shape::spacer(10.0, 1.0)?,
        Shape::square(40.0)?,
        Shape::spacer(10.0, 1.0)?,
        Shape::polygon(7, 20.0)?,
        Shape::spacer(10.0, 1.0)?,
        Shape::rectangle(60.0, 30.0)?,
        Shape::spacer(10.0, 1.0)?,
        Shape::diamond(30.0)?,
    ])
}

fn tower() -> Result<Shape, ShapeError> {
    Shape::vertical([
        Shape::rectangle(120.0, 20.0)?,
        Shape::layered([Shape::square(80.0)?, Shape::circle(40.0)?])?,
        Shape::triangle(80.0)?,
    ])
}

fn turns() -> Result<Shape, ShapeError> {
    let flag = Shape::vertical([Shape::rectangle(60.0, 20.0)?, Shape::triangle(20.0)?])?;
    let shared: cps::ShapeRef = flag.into();
    Shape::horizontal([
        Shape::rotated(shared.clone(), RotationAngle::Quarter),
        Shape::rotated(shared.clone(), RotationAngle::Half),
        Shape::rotated(shared, RotationAngle::ThreeQuarter),
    ])
}

fn stretched() -> Result<Shape, ShapeError> {
    Shape::horizontal([
        Shape::scaled(Shape::circle(30.0)?, 2.0, 1.0)?,
        Shape::scaled(Shape::square(60.0)?, 0.5, 1.5)?,
    ])
}

fn sierpinski() -> Result<Shape, ShapeError> {
    Shape::s_triangle(400.0, 6)
}

fn hilbert() -> Result<Shape, ShapeError> {
    Shape::lpb(400.0, 5)
}
