use tracing::debug;

use crate::math::polygon_2d::{is_clockwise, point_in_polygon};
use crate::math::Vector2;

use super::curve::Curve;
use super::curve_path::DEFAULT_PATH_DIVISIONS;
use super::path::Path;
use super::shape::Shape;

/// A set of sub-paths drawn with one pen, later sorted into shapes and holes.
///
/// Every [`ShapePath::move_to`] starts a new sub-path. Drawing before the
/// first `move_to` starts an implicit sub-path at the origin.
#[derive(Debug, Default)]
pub struct ShapePath {
    sub_paths: Vec<Path>,
}

impl ShapePath {
    /// Creates an empty shape path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The sub-paths in drawing order.
    #[must_use]
    pub fn sub_paths(&self) -> &[Path] {
        &self.sub_paths
    }

    /// Starts a new sub-path at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let mut path = Path::new();
        path.move_to(x, y);
        self.sub_paths.push(path);
        self
    }

    /// Draws a straight line in the current sub-path.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.current_path().line_to(x, y);
        self
    }

    /// Draws a quadratic Bezier in the current sub-path.
    pub fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) -> &mut Self {
        self.current_path().quadratic_curve_to(cpx, cpy, x, y);
        self
    }

    /// Draws a cubic Bezier in the current sub-path.
    pub fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.current_path().bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
        self
    }

    /// Draws a spline through `points` in the current sub-path.
    pub fn spline_thru(&mut self, points: &[Vector2]) -> &mut Self {
        self.current_path().spline_thru(points);
        self
    }

    fn current_path(&mut self) -> &mut Path {
        if self.sub_paths.is_empty() {
            self.sub_paths.push(Path::new());
        }
        let last = self.sub_paths.len() - 1;
        &mut self.sub_paths[last]
    }

    /// Sorts the sub-paths into solid shapes and the holes inside them.
    ///
    /// A sub-path is solid when it winds clockwise (counter-clockwise when
    /// `is_ccw` is set) and a hole otherwise. The winding of the first
    /// sub-path decides whether holes precede or follow their solid in
    /// drawing order, which gives a first grouping. Each hole is then tested
    /// against every solid: when all holes have at most one containing solid
    /// and at least one sits in a different solid than its ordering implies,
    /// the containment-based grouping replaces the ordering-based one.
    ///
    /// With `no_holes`, a single sub-path, or no solid sub-path at all,
    /// every sub-path becomes its own hole-less shape.
    #[must_use]
    pub fn into_shapes(self, is_ccw: bool, no_holes: bool) -> Vec<Shape> {
        let sub_paths = self.sub_paths;
        if no_holes || sub_paths.len() <= 1 {
            return sub_paths.into_iter().map(Shape::from_path).collect();
        }

        let outlines: Vec<Vec<Vector2>> = sub_paths
            .iter()
            .map(|path| path.points(DEFAULT_PATH_DIVISIONS))
            .collect();

        let holes_first = is_clockwise(&outlines[0]) == is_ccw;

        // `groups[k]` holds the holes assigned to `solids[k]`.
        let mut solids: Vec<usize> = Vec::new();
        let mut groups: Vec<Vec<usize>> = vec![Vec::new()];
        for (i, outline) in outlines.iter().enumerate() {
            let solid = is_clockwise(outline) != is_ccw;
            if !solid {
                if let Some(group) = groups.last_mut() {
                    group.push(i);
                }
            } else if holes_first {
                solids.push(i);
                groups.push(Vec::new());
            } else {
                if !solids.is_empty() {
                    groups.push(Vec::new());
                }
                solids.push(i);
            }
        }

        if solids.is_empty() {
            debug!("No solid sub-path found, emitting every sub-path as its own shape");
            return sub_paths.into_iter().map(Shape::from_path).collect();
        }
        if groups.len() > solids.len() && groups[solids.len()..].iter().any(|g| !g.is_empty()) {
            debug!("Dropping holes drawn after the last solid sub-path");
        }
        groups.truncate(solids.len());

        if solids.len() > 1 {
            reassign_holes(&outlines, &solids, &mut groups);
        }

        let mut slots: Vec<Option<Path>> = sub_paths.into_iter().map(Some).collect();
        solids
            .iter()
            .zip(groups)
            .filter_map(|(&solid, holes)| {
                let mut shape = Shape::from_path(slots[solid].take()?);
                for h in holes {
                    if let Some(hole) = slots[h].take() {
                        shape.add_hole(hole);
                    }
                }
                Some(shape)
            })
            .collect()
    }
}

/// Moves each hole to the single solid containing its first point.
///
/// Leaves `groups` untouched if any hole lies in more than one solid, or if
/// no hole needs to move.
fn reassign_holes(outlines: &[Vec<Vector2>], solids: &[usize], groups: &mut Vec<Vec<usize>>) {
    let mut better: Vec<Vec<usize>> = vec![Vec::new(); solids.len()];
    let mut ambiguous = false;
    let mut to_change = 0;

    for (s, group) in groups.iter().enumerate() {
        for &h in group {
            let mut owner = None;
            if let Some(probe) = outlines[h].first() {
                for (s2, &solid) in solids.iter().enumerate() {
                    if !point_in_polygon(probe, &outlines[solid]) {
                        continue;
                    }
                    if s != s2 {
                        to_change += 1;
                    }
                    if owner.is_none() {
                        owner = Some(s2);
                    } else {
                        ambiguous = true;
                    }
                }
            }
            better[owner.unwrap_or(s)].push(h);
        }
    }

    if ambiguous {
        debug!("Hole lies inside several solids, keeping ordering-based hole assignment");
    } else if to_change > 0 {
        *groups = better;
    }
}
