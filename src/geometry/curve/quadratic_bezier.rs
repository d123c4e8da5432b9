use crate::math::interpolation::{b2, b2_derivative};
use crate::math::VectorN;

use super::{unit_or_numeric, ArcLengthCache, Curve};

/// Quadratic Bezier curve from `v0` to `v2` with control point `v1`.
#[derive(Debug, Clone)]
pub struct QuadraticBezierCurve<const D: usize> {
    v0: VectorN<D>,
    v1: VectorN<D>,
    v2: VectorN<D>,
    cache: ArcLengthCache,
}

/// Quadratic Bezier curve in the plane.
pub type QuadraticBezierCurve2 = QuadraticBezierCurve<2>;

/// Quadratic Bezier curve in space.
pub type QuadraticBezierCurve3 = QuadraticBezierCurve<3>;

impl<const D: usize> QuadraticBezierCurve<D> {
    /// Creates a new quadratic Bezier curve.
    #[must_use]
    pub fn new(v0: VectorN<D>, v1: VectorN<D>, v2: VectorN<D>) -> Self {
        Self {
            v0,
            v1,
            v2,
            cache: ArcLengthCache::default(),
        }
    }

    /// Samples `divisions` chords for the arc-length table instead of the default.
    #[must_use]
    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.cache = ArcLengthCache::with_divisions(divisions);
        self
    }

    /// Returns the control points `[v0, v1, v2]`.
    #[must_use]
    pub fn control_points(&self) -> [VectorN<D>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Replaces the control points.
    pub fn set_control_points(&mut self, v0: VectorN<D>, v1: VectorN<D>, v2: VectorN<D>) {
        self.v0 = v0;
        self.v1 = v1;
        self.v2 = v2;
        self.cache.invalidate();
    }
}

impl<const D: usize> Curve<D> for QuadraticBezierCurve<D> {
    fn point(&self, t: f64) -> VectorN<D> {
        VectorN::<D>::from_fn(|i, _| b2(t, self.v0[i], self.v1[i], self.v2[i]))
    }

    fn arc_length_cache(&self) -> &ArcLengthCache {
        &self.cache
    }

    fn tangent(&self, t: f64) -> VectorN<D> {
        let derivative =
            VectorN::<D>::from_fn(|i, _| b2_derivative(t, self.v0[i], self.v1[i], self.v2[i]));
        unit_or_numeric(self, derivative, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vector2, Vector3};
    use approx::assert_relative_eq;

    fn arch() -> QuadraticBezierCurve2 {
        QuadraticBezierCurve2::new(
            Vector2::new(-1.0, 0.0),
            Vector2::new(0.0, 2.0),
            Vector2::new(1.0, 0.0),
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let curve = arch();
        assert_eq!(curve.point(0.0), Vector2::new(-1.0, 0.0));
        assert_eq!(curve.point(1.0), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn apex_at_half() {
        assert_relative_eq!(arch().point(0.5), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn closed_form_tangent() {
        let curve = arch();
        let start = curve.tangent(0.0);
        assert_relative_eq!(start, Vector2::new(1.0, 2.0).normalize());
        assert_relative_eq!(curve.tangent(0.5), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn degenerate_control_point_falls_back_to_numeric() {
        let curve = QuadraticBezierCurve3::new(
            Vector3::zeros(),
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let tangent = curve.tangent(0.0);
        assert_relative_eq!(tangent, Vector3::z(), epsilon = 1e-9);
    }

    #[test]
    fn lengths_monotonic() {
        let curve = arch();
        let lengths = curve.lengths(50);
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
        assert!(curve.length() > 2.0);
    }

    #[test]
    fn mutation_invalidates_length() {
        let mut curve = arch();
        let before = curve.length();
        curve.set_control_points(
            Vector2::new(-1.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
        );
        assert!(curve.length() < before);
        assert_relative_eq!(curve.length(), 2.0, epsilon = 1e-9);
    }
}
