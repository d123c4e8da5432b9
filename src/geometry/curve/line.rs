use crate::math::VectorN;

use super::{ArcLengthCache, Curve, SamplingHint};

/// A straight segment from `v1` to `v2`.
///
/// The parametric form is: `P(t) = v1 + t * (v2 - v1)`, which already has
/// uniform speed, so arc-length queries bypass the length table.
#[derive(Debug, Clone)]
pub struct LineCurve<const D: usize> {
    v1: VectorN<D>,
    v2: VectorN<D>,
    cache: ArcLengthCache,
}

/// Straight segment in the plane.
pub type LineCurve2 = LineCurve<2>;

/// Straight segment in space.
pub type LineCurve3 = LineCurve<3>;

impl<const D: usize> LineCurve<D> {
    /// Creates a new segment between two points.
    #[must_use]
    pub fn new(v1: VectorN<D>, v2: VectorN<D>) -> Self {
        Self {
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

    /// Returns the start point.
    #[must_use]
    pub fn v1(&self) -> &VectorN<D> {
        &self.v1
    }

    /// Returns the end point.
    #[must_use]
    pub fn v2(&self) -> &VectorN<D> {
        &self.v2
    }

    /// Moves the start point.
    pub fn set_v1(&mut self, v1: VectorN<D>) {
        self.v1 = v1;
        self.cache.invalidate();
    }

    /// Moves the end point.
    pub fn set_v2(&mut self, v2: VectorN<D>) {
        self.v2 = v2;
        self.cache.invalidate();
    }
}

impl<const D: usize> Curve<D> for LineCurve<D> {
    #[allow(clippy::float_cmp)]
    fn point(&self, t: f64) -> VectorN<D> {
        // Return the endpoint itself so the segment closes exactly.
        if t == 1.0 {
            return self.v2;
        }
        self.v1 + (self.v2 - self.v1) * t
    }

    fn arc_length_cache(&self) -> &ArcLengthCache {
        &self.cache
    }

    fn sampling_hint(&self) -> SamplingHint {
        SamplingHint::Linear
    }

    fn point_at_arc_length(&self, u: f64) -> VectorN<D> {
        self.point(u)
    }

    fn tangent(&self, _t: f64) -> VectorN<D> {
        let direction = self.v2 - self.v1;
        direction.try_normalize(0.0).unwrap_or(direction)
    }

    fn tangent_at_arc_length(&self, u: f64) -> VectorN<D> {
        self.tangent(u)
    }
}
