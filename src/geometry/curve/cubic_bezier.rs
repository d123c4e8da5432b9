use crate::math::interpolation::{b3, b3_derivative};
use crate::math::VectorN;

use super::{unit_or_numeric, ArcLengthCache, Curve};

/// Cubic Bezier curve from `v0` to `v3` with control points `v1` and `v2`.
#[derive(Debug, Clone)]
pub struct CubicBezierCurve<const D: usize> {
    v0: VectorN<D>,
    v1: VectorN<D>,
    v2: VectorN<D>,
    v3: VectorN<D>,
    cache: ArcLengthCache,
}

/// Cubic Bezier curve in the plane.
pub type CubicBezierCurve2 = CubicBezierCurve<2>;

/// Cubic Bezier curve in space.
pub type CubicBezierCurve3 = CubicBezierCurve<3>;

impl<const D: usize> CubicBezierCurve<D> {
    /// Creates a new cubic Bezier curve.
    #[must_use]
    pub fn new(v0: VectorN<D>, v1: VectorN<D>, v2: VectorN<D>, v3: VectorN<D>) -> Self {
        Self {
            v0,
            v1,
            v2,
            v3,
            cache: ArcLengthCache::default(),
        }
    }

    /// Samples `divisions` chords for the arc-length table instead of the default.
    #[must_use]
    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.cache = ArcLengthCache::with_divisions(divisions);
        self
    }

    /// Returns the control points `[v0, v1, v2, v3]`.
    #[must_use]
    pub fn control_points(&self) -> [VectorN<D>; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }

    /// Replaces the control points.
    pub fn set_control_points(
        &mut self,
        v0: VectorN<D>,
        v1: VectorN<D>,
        v2: VectorN<D>,
        v3: VectorN<D>,
    ) {
        self.v0 = v0;
        self.v1 = v1;
        self.v2 = v2;
        self.v3 = v3;
        self.cache.invalidate();
    }
}

impl<const D: usize> Curve<D> for CubicBezierCurve<D> {
    fn point(&self, t: f64) -> VectorN<D> {
        VectorN::<D>::from_fn(|i, _| b3(t, self.v0[i], self.v1[i], self.v2[i], self.v3[i]))
    }

    fn arc_length_cache(&self) -> &ArcLengthCache {
        &self.cache
    }

    fn tangent(&self, t: f64) -> VectorN<D> {
        let derivative = VectorN::<D>::from_fn(|i, _| {
            b3_derivative(t, self.v0[i], self.v1[i], self.v2[i], self.v3[i])
        });
        unit_or_numeric(self, derivative, t)
    }
}
