mod catmull_rom;
mod cubic_bezier;
mod ellipse;
mod frenet;
mod line;
mod quadratic_bezier;
mod spline;

pub use catmull_rom::{CatmullRomCurve, CatmullRomCurve2, CatmullRomCurve3, CatmullRomKind};
pub use cubic_bezier::{CubicBezierCurve, CubicBezierCurve2, CubicBezierCurve3};
pub use ellipse::EllipseCurve;
pub use frenet::{FrenetFrames, FrenetFramesExt};
pub use line::{LineCurve, LineCurve2, LineCurve3};
pub use quadratic_bezier::{QuadraticBezierCurve, QuadraticBezierCurve2, QuadraticBezierCurve3};
pub use spline::{SplineCurve, SplineCurve2, SplineCurve3};

use std::cell::{Cell, RefCell};
use std::fmt::Debug;

use crate::math::VectorN;

/// Default number of divisions for [`Curve::points`] and [`Curve::spaced_points`].
pub const DEFAULT_DIVISIONS: usize = 5;

/// Default number of samples used to build the arc-length table.
pub const DEFAULT_ARC_LENGTH_DIVISIONS: usize = 200;

/// Parameter offset used by the central-difference tangent estimate.
const TANGENT_DELTA: f64 = 0.0001;

/// How densely a curve wants to be sampled when it is part of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingHint {
    /// Straight segment: its two endpoints describe it exactly.
    Linear,
    /// Elliptic arc: sampled at twice the requested divisions.
    Elliptic,
    /// Interpolating spline: sampled once per division per control point.
    Spline { control_points: usize },
    /// Any other smooth curve: sampled at the requested divisions.
    Smooth,
}

impl SamplingHint {
    /// Number of divisions to use for a curve requested at `divisions`.
    #[must_use]
    pub fn resolution(self, divisions: usize) -> usize {
        match self {
            Self::Linear => 1,
            Self::Elliptic => divisions * 2,
            Self::Spline { control_points } => divisions * control_points,
            Self::Smooth => divisions,
        }
    }
}

#[derive(Debug, Clone)]
struct ArcLengthEntry {
    revision: u64,
    lengths: Vec<f64>,
}

/// Lazily built table of cumulative arc lengths owned by a curve.
///
/// The table is tagged with the revision it was computed at; bumping the
/// revision (on any control-point mutation) makes the next query rebuild it.
#[derive(Debug, Clone)]
pub struct ArcLengthCache {
    divisions: usize,
    revision: Cell<u64>,
    entry: RefCell<Option<ArcLengthEntry>>,
}

impl Default for ArcLengthCache {
    fn default() -> Self {
        Self::with_divisions(DEFAULT_ARC_LENGTH_DIVISIONS)
    }
}

impl ArcLengthCache {
    /// Creates an empty cache that samples `divisions` chords by default.
    #[must_use]
    pub fn with_divisions(divisions: usize) -> Self {
        Self {
            divisions: divisions.max(1),
            revision: Cell::new(0),
            entry: RefCell::new(None),
        }
    }

    /// Default number of chords sampled for the arc-length table.
    #[must_use]
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// Current revision of the owning curve's control points.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Marks the cached table as stale.
    pub fn invalidate(&self) {
        self.revision.set(self.revision.get().wrapping_add(1));
    }

    /// Returns the cumulative lengths for `divisions` chords, computing them
    /// with `compute` only when the cached table is stale or sized differently.
    pub fn lengths_with(&self, divisions: usize, compute: impl FnOnce() -> Vec<f64>) -> Vec<f64> {
        let revision = self.revision.get();
        if let Some(entry) = self.entry.borrow().as_ref() {
            if entry.revision == revision && entry.lengths.len() == divisions + 1 {
                return entry.lengths.clone();
            }
        }
        let lengths = compute();
        *self.entry.borrow_mut() = Some(ArcLengthEntry {
            revision,
            lengths: lengths.clone(),
        });
        lengths
    }
}

/// A parametric curve over `t` in `[0, 1]` in `D`-dimensional space.
///
/// Implementors provide [`Curve::point`] and storage for the arc-length
/// table; everything else (length, arc-length reparameterization, sampling,
/// tangents) has a default built on top of those two.
pub trait Curve<const D: usize>: Debug {
    /// Evaluates the curve at parameter `t`.
    fn point(&self, t: f64) -> VectorN<D>;

    /// The arc-length table owned by this curve.
    fn arc_length_cache(&self) -> &ArcLengthCache;

    /// Sampling density this curve asks for inside a path.
    fn sampling_hint(&self) -> SamplingHint {
        SamplingHint::Smooth
    }

    /// Evaluates the curve at the fraction `u` of its arc length.
    fn point_at_arc_length(&self, u: f64) -> VectorN<D> {
        self.point(self.u_to_t_parameter(u, None))
    }

    /// Samples `divisions + 1` points at uniform parameter steps.
    fn points(&self, divisions: usize) -> Vec<VectorN<D>> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|d| self.point(fraction(d, divisions)))
            .collect()
    }

    /// Samples `divisions + 1` points at uniform arc-length steps.
    fn spaced_points(&self, divisions: usize) -> Vec<VectorN<D>> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|d| self.point_at_arc_length(fraction(d, divisions)))
            .collect()
    }

    /// Total arc length, the last entry of [`Curve::lengths`].
    fn length(&self) -> f64 {
        let lengths = self.lengths(self.arc_length_cache().divisions());
        lengths.last().copied().unwrap_or(0.0)
    }

    /// Cumulative chord lengths from `point(0)` to `point(i / divisions)`
    /// for `i` in `0..=divisions`.
    fn lengths(&self, divisions: usize) -> Vec<f64> {
        let divisions = divisions.max(1);
        self.arc_length_cache().lengths_with(divisions, || {
            let mut lengths = Vec::with_capacity(divisions + 1);
            let mut last = self.point(0.0);
            let mut sum = 0.0;
            lengths.push(sum);
            for p in 1..=divisions {
                let current = self.point(fraction(p, divisions));
                sum += (current - last).norm();
                lengths.push(sum);
                last = current;
            }
            lengths
        })
    }

    /// Forces the arc-length table to be rebuilt on the next query.
    fn update_arc_lengths(&self) {
        self.arc_length_cache().invalidate();
    }

    /// Maps an arc-length fraction `u` (or an absolute `distance` along the
    /// curve) to the curve parameter `t`.
    ///
    /// Binary-searches the arc-length table for the last sample not beyond
    /// the target and interpolates linearly inside that chord.
    #[allow(clippy::cast_precision_loss)]
    fn u_to_t_parameter(&self, u: f64, distance: Option<f64>) -> f64 {
        let arc_lengths = self.lengths(self.arc_length_cache().divisions());
        let n = arc_lengths.len();
        let total = arc_lengths[n - 1];
        let target = distance.unwrap_or(u * total);

        // Index of the last entry <= target, or of an exact hit.
        let i = match arc_lengths.binary_search_by(|len| len.total_cmp(&target)) {
            Ok(hit) => return hit as f64 / (n - 1) as f64,
            Err(insert) => insert.saturating_sub(1).min(n - 2),
        };

        let before = arc_lengths[i];
        let segment = arc_lengths[i + 1] - before;
        let segment_fraction = if segment > 0.0 {
            (target - before) / segment
        } else {
            0.0
        };
        (i as f64 + segment_fraction) / (n - 1) as f64
    }

    /// Unit tangent at parameter `t`, estimated by central differences.
    fn tangent(&self, t: f64) -> VectorN<D> {
        numeric_tangent(self, t)
    }

    /// Unit tangent at the fraction `u` of the arc length.
    fn tangent_at_arc_length(&self, u: f64) -> VectorN<D> {
        self.tangent(self.u_to_t_parameter(u, None))
    }
}

/// Central-difference tangent at `t`, with the stencil clamped into `[0, 1]`.
pub(crate) fn numeric_tangent<const D: usize, C: Curve<D> + ?Sized>(curve: &C, t: f64) -> VectorN<D> {
    let t1 = (t - TANGENT_DELTA).max(0.0);
    let t2 = (t + TANGENT_DELTA).min(1.0);
    let delta = curve.point(t2) - curve.point(t1);
    delta.try_normalize(0.0).unwrap_or(delta)
}

/// Normalizes a closed-form derivative, falling back to the numeric estimate
/// where the derivative vanishes (coincident control points).
pub(crate) fn unit_or_numeric<const D: usize, C: Curve<D> + ?Sized>(
    curve: &C,
    derivative: VectorN<D>,
    t: f64,
) -> VectorN<D> {
    derivative
        .try_normalize(crate::math::EPSILON)
        .unwrap_or_else(|| numeric_tangent(curve, t))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn fraction(i: usize, n: usize) -> f64 {
    i as f64 / n as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use approx::assert_relative_eq;

    /// Quarter of the unit circle parameterized non-uniformly (t^2).
    #[derive(Debug, Default)]
    struct Warped {
        cache: ArcLengthCache,
    }

    impl Curve<2> for Warped {
        fn point(&self, t: f64) -> Vector2 {
            let angle = t * t * std::f64::consts::FRAC_PI_2;
            Vector2::new(angle.cos(), angle.sin())
        }

        fn arc_length_cache(&self) -> &ArcLengthCache {
            &self.cache
        }
    }

    #[test]
    fn sampling_hint_resolution() {
        assert_eq!(SamplingHint::Linear.resolution(12), 1);
        assert_eq!(SamplingHint::Elliptic.resolution(12), 24);
        assert_eq!(SamplingHint::Spline { control_points: 4 }.resolution(12), 48);
        assert_eq!(SamplingHint::Smooth.resolution(12), 12);
    }

    #[test]
    fn lengths_are_monotonic_and_end_at_length() {
        let curve = Warped::default();
        let lengths = curve.lengths(200);
        assert_eq!(lengths.len(), 201);
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
        assert_relative_eq!(curve.length(), lengths[200]);
        assert_relative_eq!(curve.length(), std::f64::consts::FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn u_to_t_endpoints() {
        let curve = Warped::default();
        assert_relative_eq!(curve.u_to_t_parameter(0.0, None), 0.0);
        assert_relative_eq!(curve.u_to_t_parameter(1.0, None), 1.0);
    }

    #[test]
    fn u_to_t_inverts_warp() {
        let curve = Warped::default();
        // Arc length grows with t^2, so half the length sits at t = sqrt(0.5).
        assert_relative_eq!(curve.u_to_t_parameter(0.5, None), 0.5_f64.sqrt(), epsilon = 1e-3);
        let by_distance = curve.u_to_t_parameter(0.0, Some(curve.length() * 0.25));
        assert_relative_eq!(by_distance, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn spaced_points_are_evenly_spaced() {
        let curve = Warped::default();
        let pts = curve.spaced_points(10);
        assert_eq!(pts.len(), 11);
        let chords: Vec<f64> = pts.windows(2).map(|w| (w[1] - w[0]).norm()).collect();
        let expected = curve.length() / 10.0;
        for chord in chords {
            assert_relative_eq!(chord, expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn default_points_use_parameter_steps() {
        let curve = Warped::default();
        let pts = curve.points(DEFAULT_DIVISIONS);
        assert_eq!(pts.len(), DEFAULT_DIVISIONS + 1);
        assert_relative_eq!(pts[0], Vector2::new(1.0, 0.0));
        assert_relative_eq!(pts[5], Vector2::new(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn numeric_tangent_is_unit() {
        let curve = Warped::default();
        let t = curve.tangent(0.5);
        assert_relative_eq!(t.norm(), 1.0, epsilon = 1e-12);
        let angle = 0.25 * std::f64::consts::FRAC_PI_2;
        assert_relative_eq!(t, Vector2::new(-angle.sin(), angle.cos()), epsilon = 1e-6);
    }

    #[test]
    fn cache_rebuilds_after_invalidation() {
        let cache = ArcLengthCache::default();
        let mut calls = 0;
        let _ = cache.lengths_with(2, || {
            calls += 1;
            vec![0.0, 1.0, 2.0]
        });
        let _ = cache.lengths_with(2, || {
            calls += 1;
            vec![0.0, 1.0, 2.0]
        });
        assert_eq!(calls, 1);
        cache.invalidate();
        let rebuilt = cache.lengths_with(2, || {
            calls += 1;
            vec![0.0, 2.0, 4.0]
        });
        assert_eq!(calls, 2);
        assert_relative_eq!(rebuilt[2], 4.0);
    }

    #[test]
    fn cache_rebuilds_for_other_division_count() {
        let cache = ArcLengthCache::default();
        let _ = cache.lengths_with(2, || vec![0.0, 1.0, 2.0]);
        let other = cache.lengths_with(1, || vec![0.0, 2.0]);
        assert_eq!(other.len(), 2);
    }
}
