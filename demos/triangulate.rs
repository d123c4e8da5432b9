//! Fills a square-with-a-hole and a lettered glyph, then sweeps a tube.
//!
//! ```text
//! cargo run --example triangulate
//! RUST_LOG=shapelis=debug cargo run --example triangulate
//! ```

use shapelis::geometry::curve::{CatmullRomCurve3, CatmullRomKind};
use shapelis::geometry::{Path, Shape, ShapePath};
use shapelis::math::Vector3;
use shapelis::tessellation::{TessellateShape, TessellateTube, TessellationParams, TubeParams};
use shapelis::ShapelisError;

fn main() -> Result<(), ShapelisError> {
    // Default: WARN for everything, INFO for shapelis.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shapelis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Square with a round hole
    let mut frame = Shape::new();
    frame
        .move_to(0.0, 0.0)
        .line_to(10.0, 0.0)
        .line_to(10.0, 10.0)
        .line_to(0.0, 10.0)
        .close_path();
    let mut hole = Path::new();
    hole.absarc(5.0, 5.0, 2.5, 0.0, std::f64::consts::TAU, false);
    frame.add_hole(hole);

    let shapes = [frame];
    let mesh = TessellateShape::new(&shapes, TessellationParams::default()).execute()?;
    println!(
        "frame: {} vertices, {} triangles, area {:.3}",
        mesh.vertices.len(),
        mesh.triangle_count(),
        mesh.area()
    );

    // Two concentric outlines classified into one shape with a hole
    let mut outlines = ShapePath::new();
    outlines
        .move_to(0.0, 0.0)
        .line_to(0.0, 8.0)
        .line_to(8.0, 8.0)
        .line_to(8.0, 0.0)
        .line_to(0.0, 0.0);
    outlines
        .move_to(2.0, 2.0)
        .line_to(6.0, 2.0)
        .line_to(6.0, 6.0)
        .line_to(2.0, 6.0)
        .line_to(2.0, 2.0);
    let shapes = outlines.into_shapes(false, false);
    let mesh = TessellateShape::new(&shapes, TessellationParams::default()).execute()?;
    println!(
        "outlines: {} shape(s), {} triangles, area {:.3}",
        shapes.len(),
        mesh.triangle_count(),
        mesh.area()
    );

    // Tube around a closed loop
    let spine = CatmullRomCurve3::new(
        vec![
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 4.0, 1.0),
            Vector3::new(-4.0, 0.0, 0.0),
            Vector3::new(0.0, -4.0, -1.0),
        ],
        true,
        CatmullRomKind::Centripetal,
    )?;
    let params = TubeParams::default().with_radius(0.5).closed();
    let mesh = TessellateTube::new(&spine, params).execute()?;
    println!(
        "tube: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangle_count()
    );

    Ok(())
}
