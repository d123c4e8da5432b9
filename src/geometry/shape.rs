use std::ops::{Deref, DerefMut};

use crate::math::Vector2;

use super::curve::Curve;
use super::path::Path;

/// Sampled outline of a [`Shape`]: the outer contour and one point list per hole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPoints {
    pub shape: Vec<Vector2>,
    pub holes: Vec<Vec<Vector2>>,
}

/// A closed planar outline with optional holes.
///
/// The outline itself is drawn through the [`Path`] API (via `Deref`); holes
/// are separate paths owned by the shape.
#[derive(Debug, Default)]
pub struct Shape {
    path: Path,
    holes: Vec<Path>,
}

impl Shape {
    /// Creates an empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shape whose outline is the polyline through `points`.
    #[must_use]
    pub fn from_points(points: &[Vector2]) -> Self {
        Self {
            path: Path::from_points(points),
            holes: Vec::new(),
        }
    }

    /// Wraps an existing path as a hole-less shape.
    #[must_use]
    pub fn from_path(path: Path) -> Self {
        Self {
            path,
            holes: Vec::new(),
        }
    }

    /// The holes cut out of this shape.
    #[must_use]
    pub fn holes(&self) -> &[Path] {
        &self.holes
    }

    /// Mutable access to the holes.
    pub fn holes_mut(&mut self) -> &mut Vec<Path> {
        &mut self.holes
    }

    /// Adds a hole.
    pub fn add_hole(&mut self, hole: Path) -> &mut Self {
        self.holes.push(hole);
        self
    }

    /// Samples every hole with `divisions` per curve.
    #[must_use]
    pub fn points_holes(&self, divisions: usize) -> Vec<Vec<Vector2>> {
        self.holes.iter().map(|hole| hole.points(divisions)).collect()
    }

    /// Samples the outline and every hole with `divisions` per curve.
    #[must_use]
    pub fn extract_points(&self, divisions: usize) -> ExtractedPoints {
        ExtractedPoints {
            shape: self.path.points(divisions),
            holes: self.points_holes(divisions),
        }
    }
}

impl Deref for Shape {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl DerefMut for Shape {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.path
    }
}
