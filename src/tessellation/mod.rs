mod tessellate_shape;
mod tessellate_tube;
mod triangulate;
mod triangulate_shape;

pub use tessellate_shape::TessellateShape;
pub use tessellate_tube::{TessellateTube, TubeParams};
pub use triangulate::{triangulate, triangulate_points};
pub use triangulate_shape::triangulate_shape;

use crate::math::{Point2, Point3, Vector3};

/// Parameters controlling how finely shape outlines are sampled.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Divisions per curve when sampling outlines and holes.
    pub curve_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { curve_segments: 12 }
    }
}

/// An indexed triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Sum of the triangle areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let a = self.vertices[a as usize];
                let b = self.vertices[b as usize];
                let c = self.vertices[c as usize];
                (b - a).cross(&(c - a)).norm() * 0.5
            })
            .sum()
    }
}
