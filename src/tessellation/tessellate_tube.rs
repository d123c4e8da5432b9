use std::f64::consts::TAU;

use crate::error::{GeometryError, Result, TessellationError};
use crate::geometry::curve::{fraction, Curve, FrenetFramesExt};
use crate::math::{Point2, Point3, Vector3, EPSILON};

use super::TriangleMesh;

/// Configuration for tube extrusion.
#[derive(Debug, Clone, Copy)]
pub struct TubeParams {
    /// Number of rings along the spine (excluding the seam ring).
    pub tubular_segments: usize,
    /// Radius of the tube.
    pub radius: f64,
    /// Number of segments around the circumference.
    pub radial_segments: usize,
    /// Whether the spine is a closed loop.
    pub closed: bool,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            tubular_segments: 64,
            radius: 1.0,
            radial_segments: 8,
            closed: false,
        }
    }
}

impl TubeParams {
    /// Sets the number of segments along the spine.
    #[must_use]
    pub fn with_tubular_segments(mut self, segments: usize) -> Self {
        self.tubular_segments = segments;
        self
    }

    /// Sets the tube radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the number of segments around the circumference.
    #[must_use]
    pub fn with_radial_segments(mut self, segments: usize) -> Self {
        self.radial_segments = segments;
        self
    }

    /// Treats the spine as a closed loop.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }
}

/// Sweeps a circular cross-section along a 3D curve.
///
/// Ring `i` sits at `spine.point_at_arc_length(i / tubular_segments)` and is
/// oriented by the curve's Frenet frame `i`. Each ring has
/// `radial_segments + 1` vertices, the last repeating the first with a
/// different texture coordinate. A closed tube emits ring 0 again as its
/// last ring for the same reason.
#[derive(Debug)]
pub struct TessellateTube<'a> {
    spine: &'a dyn Curve<3>,
    params: TubeParams,
}

impl<'a> TessellateTube<'a> {
    /// Creates a new tube tessellation operation.
    #[must_use]
    pub fn new(spine: &'a dyn Curve<3>, params: TubeParams) -> Self {
        Self { spine, params }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns an error if either segment count is zero, the radius is not
    /// a positive finite number, or the spine has no length.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let TubeParams {
            tubular_segments,
            radius,
            radial_segments,
            closed,
        } = self.params;

        if tubular_segments == 0 || radial_segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "tube segment counts must be at least 1".to_owned(),
            )
            .into());
        }
        if radius <= 0.0 || !radius.is_finite() {
            return Err(TessellationError::InvalidParameters(format!(
                "tube radius must be positive, got {radius}"
            ))
            .into());
        }
        if self.spine.length() <= EPSILON {
            return Err(GeometryError::Degenerate("tube spine has zero length".to_owned()).into());
        }

        let frames = self.spine.compute_frenet_frames(tubular_segments, closed);
        let ring = radial_segments + 1;
        let vertex_count = (tubular_segments + 1) * ring;

        let mut mesh = TriangleMesh {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(tubular_segments * radial_segments * 2),
        };

        for i in 0..=tubular_segments {
            // The seam ring of a closed tube reuses the first frame.
            let sample = if closed && i == tubular_segments { 0 } else { i };
            let center = self.spine.point_at_arc_length(fraction(sample, tubular_segments));
            let n = frames.normals[sample];
            let b = frames.binormals[sample];

            for j in 0..=radial_segments {
                let normal = ring_normal(&n, &b, fraction(j, radial_segments) * TAU);
                let position = center + normal * radius;

                mesh.vertices.push(Point3::from(position));
                mesh.normals.push(normal);
                mesh.uvs.push(Point2::new(
                    fraction(i, tubular_segments),
                    fraction(j, radial_segments),
                ));
            }
        }

        for i in 1..=tubular_segments {
            for j in 1..=radial_segments {
                let a = (ring * (i - 1) + (j - 1)) as u32;
                let b = (ring * i + (j - 1)) as u32;
                let c = (ring * i + j) as u32;
                let d = (ring * (i - 1) + j) as u32;
                mesh.indices.push([a, b, d]);
                mesh.indices.push([b, c, d]);
            }
        }

        Ok(mesh)
    }
}

/// Direction from the spine to the ring vertex at `angle`.
fn ring_normal(normal: &Vector3, binormal: &Vector3, angle: f64) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    (normal * -cos + binormal * sin).normalize()
}
