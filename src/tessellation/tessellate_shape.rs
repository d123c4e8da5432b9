use crate::error::{Result, TessellationError};
use crate::geometry::Shape;
use crate::math::polygon_2d::{is_clockwise, remove_duplicate_end_point};
use crate::math::{Point2, Point3, Vector3};

use super::triangulate_shape::triangulate_shape;
use super::{TessellationParams, TriangleMesh};

/// Fills planar shapes (with their holes) into a flat triangle mesh.
///
/// Every shape is sampled with `curve_segments` divisions per curve and laid
/// in the XY plane (z = 0) facing +Z. UVs are the XY coordinates.
#[derive(Debug)]
pub struct TessellateShape<'a> {
    shapes: &'a [Shape],
    params: TessellationParams,
}

impl<'a> TessellateShape<'a> {
    /// Creates a new shape tessellation operation.
    #[must_use]
    pub fn new(shapes: &'a [Shape], params: TessellationParams) -> Self {
        Self { shapes, params }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if `curve_segments` is zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        if self.params.curve_segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "curve_segments must be at least 1".to_owned(),
            )
            .into());
        }

        let mut mesh = TriangleMesh::default();
        for shape in self.shapes {
            let extracted = shape.extract_points(self.params.curve_segments);

            let mut contour = extracted.shape;
            remove_duplicate_end_point(&mut contour);
            if !is_clockwise(&contour) {
                contour.reverse();
            }
            let holes: Vec<_> = extracted
                .holes
                .into_iter()
                .map(|mut hole| {
                    remove_duplicate_end_point(&mut hole);
                    if is_clockwise(&hole) {
                        hole.reverse();
                    }
                    hole
                })
                .collect();

            let faces = triangulate_shape(&contour, &holes);

            let offset = mesh.vertices.len() as u32;
            for p in contour.iter().chain(holes.iter().flatten()) {
                mesh.vertices.push(Point3::new(p.x, p.y, 0.0));
                mesh.normals.push(Vector3::z());
                mesh.uvs.push(Point2::new(p.x, p.y));
            }
            mesh.indices
                .extend(faces.into_iter().map(|face| face.map(|i| offset + i as u32)));
        }
        Ok(mesh)
    }
}
