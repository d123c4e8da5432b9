use crate::error::{GeometryError, Result};
use crate::math::interpolation::catmull_rom;
use crate::math::VectorN;

use super::{ArcLengthCache, Curve, SamplingHint};

/// Uniform Catmull-Rom spline through a sequence of points.
///
/// Each span interpolates between two consecutive points, using their outer
/// neighbors as tangent guides. At the ends of the sequence the missing
/// neighbor is replaced by the nearest valid point.
#[derive(Debug, Clone)]
pub struct SplineCurve<const D: usize> {
    points: Vec<VectorN<D>>,
    cache: ArcLengthCache,
}

/// Spline in the plane.
pub type SplineCurve2 = SplineCurve<2>;

/// Spline in space.
pub type SplineCurve3 = SplineCurve<3>;

impl<const D: usize> SplineCurve<D> {
    /// Creates a spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] if `points` is empty.
    pub fn new(points: Vec<VectorN<D>>) -> Result<Self> {
        check_points(&points)?;
        Ok(Self {
            points,
            cache: ArcLengthCache::default(),
        })
    }

    /// Samples `divisions` chords for the arc-length table instead of the default.
    #[must_use]
    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.cache = ArcLengthCache::with_divisions(divisions);
        self
    }

    /// Spline from `start` through `rest`; never empty.
    pub(crate) fn through(start: VectorN<D>, rest: &[VectorN<D>]) -> Self {
        let mut points = Vec::with_capacity(rest.len() + 1);
        points.push(start);
        points.extend_from_slice(rest);
        Self {
            points,
            cache: ArcLengthCache::default(),
        }
    }

    /// Returns the interpolated points.
    #[must_use]
    pub fn control_points(&self) -> &[VectorN<D>] {
        &self.points
    }

    /// Replaces the interpolated points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] if `points` is empty; the
    /// curve is left unchanged.
    pub fn set_control_points(&mut self, points: Vec<VectorN<D>>) -> Result<()> {
        check_points(&points)?;
        self.points = points;
        self.cache.invalidate();
        Ok(())
    }
}

fn check_points<const D: usize>(points: &[VectorN<D>]) -> Result<()> {
    if points.is_empty() {
        return Err(GeometryError::TooFewPoints { min: 1, actual: 0 }.into());
    }
    Ok(())
}

impl<const D: usize> Curve<D> for SplineCurve<D> {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn point(&self, t: f64) -> VectorN<D> {
        let pts = &self.points;
        let last = pts.len() - 1;

        let p = last as f64 * t;
        let int_point = (p.floor().max(0.0) as usize).min(last);
        let weight = p - int_point as f64;

        let p0 = pts[int_point.saturating_sub(1)];
        let p1 = pts[int_point];
        let p2 = pts[(int_point + 1).min(last)];
        let p3 = pts[(int_point + 2).min(last)];

        VectorN::<D>::from_fn(|i, _| catmull_rom(weight, p0[i], p1[i], p2[i], p3[i]))
    }

    fn arc_length_cache(&self) -> &ArcLengthCache {
        &self.cache
    }

    fn sampling_hint(&self) -> SamplingHint {
        SamplingHint::Spline {
            control_points: self.points.len(),
        }
    }
}
