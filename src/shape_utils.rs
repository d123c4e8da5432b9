//! Polygon helpers for planar outlines: winding, ear clipping and
//! triangulation of polygons with holes.

pub use crate::math::interpolation::{b2, b3};
pub use crate::math::polygon_2d::{area, is_clockwise};
pub use crate::tessellation::{triangulate, triangulate_points, triangulate_shape};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Vector2> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn unit_square_area_and_winding() {
        let mut square = unit_square();
        assert_relative_eq!(area(&square), 1.0);
        assert!(!is_clockwise(&square));
        square.reverse();
        assert_relative_eq!(area(&square), -1.0);
        assert!(is_clockwise(&square));
    }

    #[test]
    fn triangulated_quad_covers_its_area() {
        let square = unit_square();
        let tris = triangulate_points(&square);
        assert_eq!(tris.len(), 2);
        let covered: f64 = tris.iter().map(|t| area(t)).sum();
        assert_relative_eq!(covered, area(&square));
    }

    #[test]
    fn bezier_kernels() {
        assert_relative_eq!(b2(0.5, 0.0, 1.0, 0.0), 0.5);
        assert_relative_eq!(b3(0.5, 0.0, 1.0, 1.0, 0.0), 0.75);
    }
}
