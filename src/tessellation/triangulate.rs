use tracing::warn;

use crate::math::polygon_2d::area;
use crate::math::{Vector2, EPSILON};

/// Triangulates a simple polygon by ear clipping.
///
/// Returns index triples into `contour`, each wound counter-clockwise.
/// Polygons with fewer than three points produce no triangles.
///
/// Every pass looks for an ear at the next vertex of the remaining polygon.
/// After `2 * remaining` passes without an ear (self-intersecting or
/// degenerate input) the clipping stops and the triangles found so far are
/// returned.
#[must_use]
pub fn triangulate(contour: &[Vector2]) -> Vec<[usize; 3]> {
    let n = contour.len();
    if n < 3 {
        return Vec::new();
    }

    // Remaining polygon as indices into `contour`, counter-clockwise.
    let mut verts: Vec<usize> = if area(contour) > 0.0 {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    };

    let mut result = Vec::with_capacity(n - 2);
    let mut count = 2 * n;
    let mut v = n - 1;

    while verts.len() > 2 {
        let nv = verts.len();
        if count == 0 {
            warn!(remaining = nv, "Unable to triangulate polygon, returning partial result");
            break;
        }
        count -= 1;

        let u = if v < nv { v } else { 0 };
        v = if u + 1 < nv { u + 1 } else { 0 };
        let w = if v + 1 < nv { v + 1 } else { 0 };

        if snip(contour, &verts, u, v, w) {
            result.push([verts[u], verts[v], verts[w]]);
            verts.remove(v);
            count = 2 * verts.len();
        }
    }

    result
}

/// Same as [`triangulate`] but returns the corner points of each triangle.
#[must_use]
pub fn triangulate_points(contour: &[Vector2]) -> Vec<[Vector2; 3]> {
    triangulate(contour)
        .into_iter()
        .map(|tri| tri.map(|i| contour[i]))
        .collect()
}

/// Tests whether `(u, v, w)` is an ear: a convex corner whose triangle holds
/// no other remaining vertex.
#[allow(clippy::float_cmp)]
fn snip(contour: &[Vector2], verts: &[usize], u: usize, v: usize, w: usize) -> bool {
    let a = contour[verts[u]];
    let b = contour[verts[v]];
    let c = contour[verts[w]];

    if (b - a).perp(&(c - a)) < EPSILON {
        return false;
    }

    !verts.iter().map(|&i| contour[i]).any(|p| {
        // Points coinciding with a corner (bridge duplicates) never block an ear.
        if p == a || p == b || p == c {
            return false;
        }
        inside_triangle(&a, &b, &c, &p)
    })
}

fn inside_triangle(a: &Vector2, b: &Vector2, c: &Vector2, p: &Vector2) -> bool {
    let a_cross_bp = (c - b).perp(&(p - b));
    let c_cross_ap = (b - a).perp(&(p - a));
    let b_cross_cp = (a - c).perp(&(p - c));
    a_cross_bp >= -EPSILON && b_cross_cp >= -EPSILON && c_cross_ap >= -EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_area(contour: &[Vector2], tri: &[usize; 3]) -> f64 {
        area(&[contour[tri[0]], contour[tri[1]], contour[tri[2]]])
    }

    #[test]
    fn convex_quad_gives_two_triangles() {
        let quad = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];
        let tris = triangulate(&quad);
        assert_eq!(tris.len(), 2);
        let total: f64 = tris.iter().map(|t| triangle_area(&quad, t)).sum();
        assert_relative_eq!(total, 2.0);
    }

    #[test]
    fn clockwise_input_yields_ccw_triangles() {
        let quad = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 0.0),
        ];
        let tris = triangulate(&quad);
        assert_eq!(tris.len(), 2);
        for t in &tris {
            assert!(triangle_area(&quad, t) > 0.0);
        }
    }

    #[test]
    fn concave_polygon_is_covered() {
        // An L shape with a reflex corner at (1, 1).
        let l_shape = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 2.0),
            Vector2::new(0.0, 2.0),
        ];
        let tris = triangulate(&l_shape);
        assert_eq!(tris.len(), 4);
        let total: f64 = tris.iter().map(|t| triangle_area(&l_shape, t)).sum();
        assert_relative_eq!(total, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Vector2::zeros(), Vector2::new(1.0, 0.0)]).is_empty());
    }

    #[test]
    fn collinear_points_give_partial_result() {
        let line = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, 0.0),
        ];
        assert!(triangulate(&line).is_empty());
    }

    #[test]
    fn points_variant_matches_indices() {
        let tri = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        ];
        let pts = triangulate_points(&tri);
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(area(&pts[0]), 0.5);
    }
}
