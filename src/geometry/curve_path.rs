use crate::math::VectorN;

use super::curve::{fraction, ArcLengthCache, Curve, LineCurve};

/// Default divisions per sub-curve for [`CurvePath::points`].
pub const DEFAULT_PATH_DIVISIONS: usize = 12;

/// Default divisions for [`CurvePath::spaced_points`].
pub const DEFAULT_PATH_SPACED_DIVISIONS: usize = 40;

/// An ordered chain of curves treated as one curve.
///
/// The path owns its curves. It does not check that consecutive curves
/// connect; [`CurvePath::close_path`] is the only operation that adds a
/// segment on its own.
#[derive(Debug, Default)]
pub struct CurvePath<const D: usize> {
    curves: Vec<Box<dyn Curve<D>>>,
    auto_close: bool,
    cache: ArcLengthCache,
    /// Cumulative sub-curve lengths with a leading zero, one chord per curve.
    curve_lengths: ArcLengthCache,
}

impl<const D: usize> CurvePath<D> {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples `divisions` chords for the path's own arc-length table.
    #[must_use]
    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.cache = ArcLengthCache::with_divisions(divisions);
        self
    }

    /// Appends a curve.
    pub fn add(&mut self, curve: impl Curve<D> + 'static) -> &mut Self {
        self.add_boxed(Box::new(curve))
    }

    /// Appends an already boxed curve.
    pub fn add_boxed(&mut self, curve: Box<dyn Curve<D>>) -> &mut Self {
        self.curves.push(curve);
        self.invalidate();
        self
    }

    /// Connects the end of the last curve back to the start of the first
    /// with a straight segment, unless they already coincide exactly.
    #[allow(clippy::float_cmp)]
    pub fn close_path(&mut self) -> &mut Self {
        let (Some(first), Some(last)) = (self.curves.first(), self.curves.last()) else {
            return self;
        };
        let start = first.point(0.0);
        let end = last.point(1.0);
        if start != end {
            self.add(LineCurve::new(end, start));
        }
        self
    }

    /// Returns the curves in order.
    #[must_use]
    pub fn curves(&self) -> &[Box<dyn Curve<D>>] {
        &self.curves
    }

    /// Mutable access to the curves. Cached lengths are dropped.
    pub fn curves_mut(&mut self) -> &mut Vec<Box<dyn Curve<D>>> {
        self.invalidate();
        &mut self.curves
    }

    /// Number of curves in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` if the path holds no curve.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Whether sampled point lists are closed back to their first point.
    #[must_use]
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    /// Sets whether sampled point lists are closed back to their first point.
    pub fn set_auto_close(&mut self, auto_close: bool) {
        self.auto_close = auto_close;
    }

    /// Cumulative lengths: entry `i` is the length of curves `0..=i`.
    #[must_use]
    pub fn curve_lengths(&self) -> Vec<f64> {
        let mut lengths = self.cumulative_lengths();
        lengths.remove(0);
        lengths
    }

    fn cumulative_lengths(&self) -> Vec<f64> {
        self.curve_lengths.lengths_with(self.curves.len(), || {
            let mut sum = 0.0;
            std::iter::once(0.0)
                .chain(self.curves.iter().map(|curve| {
                    sum += curve.length();
                    sum
                }))
                .collect()
        })
    }

    fn invalidate(&self) {
        self.cache.invalidate();
        self.curve_lengths.invalidate();
    }
}

impl<const D: usize> Curve<D> for CurvePath<D> {
    /// Point at the fraction `t` of the total length, found in the sub-curve
    /// whose cumulative length bracket contains it.
    ///
    /// Parameters past either end clamp to the first or last curve. An empty
    /// path evaluates to the origin.
    #[allow(clippy::float_cmp)]
    fn point(&self, t: f64) -> VectorN<D> {
        let n = self.curves.len();
        if n == 0 {
            return VectorN::<D>::zeros();
        }
        let cumulative = self.cumulative_lengths();
        let d = t * cumulative[n];

        let i = (0..n).find(|&i| cumulative[i + 1] >= d).unwrap_or(n - 1);
        let segment = cumulative[i + 1] - cumulative[i];
        let u = if segment == 0.0 {
            0.0
        } else {
            1.0 - (cumulative[i + 1] - d) / segment
        };
        self.curves[i].point_at_arc_length(u.clamp(0.0, 1.0))
    }

    fn arc_length_cache(&self) -> &ArcLengthCache {
        &self.cache
    }

    /// Sum of the sub-curve lengths.
    fn length(&self) -> f64 {
        self.cumulative_lengths().last().copied().unwrap_or(0.0)
    }

    /// Cumulative lengths at `point(i / divisions)`, measured with chords
    /// and rescaled so the last entry is [`CurvePath::length`].
    fn lengths(&self, divisions: usize) -> Vec<f64> {
        let divisions = divisions.max(1);
        self.cache.lengths_with(divisions, || {
            let total = self.length();
            let mut lengths = Vec::with_capacity(divisions + 1);
            let mut last = self.point(0.0);
            let mut sum = 0.0;
            lengths.push(sum);
            for i in 1..=divisions {
                let current = self.point(fraction(i, divisions));
                sum += (current - last).norm();
                lengths.push(sum);
                last = current;
            }

            if sum > 0.0 {
                let scale = total / sum;
                for length in &mut lengths {
                    *length *= scale;
                }
            }
            lengths[divisions] = total;
            lengths
        })
    }

    /// Samples every curve at the density its [`SamplingHint`](super::curve::SamplingHint)
    /// asks for, skipping points equal to their predecessor.
    #[allow(clippy::float_cmp)]
    fn points(&self, divisions: usize) -> Vec<VectorN<D>> {
        let mut points: Vec<VectorN<D>> = Vec::new();
        for curve in &self.curves {
            let resolution = curve.sampling_hint().resolution(divisions);
            for point in curve.points(resolution) {
                if points.last() == Some(&point) {
                    continue;
                }
                points.push(point);
            }
        }

        if self.auto_close && points.len() > 1 && points.last() != points.first() {
            points.push(points[0]);
        }
        points
    }

    fn spaced_points(&self, divisions: usize) -> Vec<VectorN<D>> {
        let divisions = divisions.max(1);
        let mut points: Vec<VectorN<D>> = (0..=divisions)
            .map(|i| self.point(fraction(i, divisions)))
            .collect();
        if self.auto_close {
            points.push(points[0]);
        }
        points
    }

    fn update_arc_lengths(&self) {
        self.invalidate();
    }
}
