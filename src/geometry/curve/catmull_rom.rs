use crate::error::{GeometryError, Result};
use crate::math::interpolation::CubicPoly;
use crate::math::VectorN;

use super::{ArcLengthCache, Curve};

/// Knot intervals below this are treated as coincident points.
const MIN_KNOT_INTERVAL: f64 = 1e-4;

/// Parameterization of a [`CatmullRomCurve`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CatmullRomKind {
    /// Knot spacing grows with the square root of the chord length.
    #[default]
    Centripetal,
    /// Knot spacing grows with the chord length.
    Chordal,
    /// Uniform knots; `tension` in `[0, 1]` scales the tangents.
    Uniform { tension: f64 },
}

/// Catmull-Rom spline through a sequence of points, optionally closed.
///
/// Open curves extrapolate a phantom neighbor past each end by reflecting
/// the second point through the first (and the second-to-last through the
/// last). Closed curves wrap indices around the sequence.
#[derive(Debug, Clone)]
pub struct CatmullRomCurve<const D: usize> {
    points: Vec<VectorN<D>>,
    closed: bool,
    kind: CatmullRomKind,
    cache: ArcLengthCache,
}

/// Catmull-Rom spline in the plane.
pub type CatmullRomCurve2 = CatmullRomCurve<2>;

/// Catmull-Rom spline in space.
pub type CatmullRomCurve3 = CatmullRomCurve<3>;

impl<const D: usize> CatmullRomCurve<D> {
    /// Creates a new Catmull-Rom spline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] with fewer than two points and
    /// [`GeometryError::ParameterOutOfRange`] for a tension outside `[0, 1]`.
    pub fn new(points: Vec<VectorN<D>>, closed: bool, kind: CatmullRomKind) -> Result<Self> {
        check_points(&points)?;
        check_kind(kind)?;
        Ok(Self {
            points,
            closed,
            kind,
            cache: ArcLengthCache::default(),
        })
    }

    /// Samples `divisions` chords for the arc-length table instead of the default.
    #[must_use]
    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.cache = ArcLengthCache::with_divisions(divisions);
        self
    }

    /// Returns the interpolated points.
    #[must_use]
    pub fn control_points(&self) -> &[VectorN<D>] {
        &self.points
    }

    /// Returns whether the curve loops back to its first point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the parameterization.
    #[must_use]
    pub fn kind(&self) -> CatmullRomKind {
        self.kind
    }

    /// Replaces the interpolated points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] with fewer than two points.
    pub fn set_control_points(&mut self, points: Vec<VectorN<D>>) -> Result<()> {
        check_points(&points)?;
        self.points = points;
        self.cache.invalidate();
        Ok(())
    }

    /// Opens or closes the loop.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
        self.cache.invalidate();
    }

    /// Changes the parameterization.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for a tension outside `[0, 1]`.
    pub fn set_kind(&mut self, kind: CatmullRomKind) -> Result<()> {
        check_kind(kind)?;
        self.kind = kind;
        self.cache.invalidate();
        Ok(())
    }

    /// The four points steering the span that contains `t`, and the local
    /// parameter inside that span.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    fn span(&self, t: f64) -> ([VectorN<D>; 4], f64) {
        let pts = &self.points;
        let l = pts.len();
        let spans = if self.closed { l } else { l - 1 };

        let p = spans as f64 * t;
        let mut int_point = p.floor() as i64;
        let mut weight = p - int_point as f64;

        if !self.closed && weight == 0.0 && int_point == l as i64 - 1 {
            int_point = l as i64 - 2;
            weight = 1.0;
        }

        let at = |i: i64| pts[i.rem_euclid(l as i64) as usize];

        let p0 = if self.closed || int_point > 0 {
            at(int_point - 1)
        } else {
            pts[0] * 2.0 - pts[1]
        };
        let p1 = at(int_point);
        let p2 = at(int_point + 1);
        let p3 = if self.closed || int_point + 2 < l as i64 {
            at(int_point + 2)
        } else {
            pts[l - 1] * 2.0 - pts[l - 2]
        };

        ([p0, p1, p2, p3], weight)
    }
}

fn check_points<const D: usize>(points: &[VectorN<D>]) -> Result<()> {
    if points.len() < 2 {
        return Err(GeometryError::TooFewPoints {
            min: 2,
            actual: points.len(),
        }
        .into());
    }
    Ok(())
}

fn check_kind(kind: CatmullRomKind) -> Result<()> {
    if let CatmullRomKind::Uniform { tension } = kind {
        if !(0.0..=1.0).contains(&tension) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "tension",
                value: tension,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
    }
    Ok(())
}

impl<const D: usize> Curve<D> for CatmullRomCurve<D> {
    fn point(&self, t: f64) -> VectorN<D> {
        let ([p0, p1, p2, p3], weight) = self.span(t);

        let power = match self.kind {
            CatmullRomKind::Uniform { tension } => {
                return VectorN::<D>::from_fn(|i, _| {
                    CubicPoly::catmull_rom(p0[i], p1[i], p2[i], p3[i], tension).calc(weight)
                });
            }
            CatmullRomKind::Centripetal => 0.25,
            CatmullRomKind::Chordal => 0.5,
        };

        let mut dt0 = (p1 - p0).norm_squared().powf(power);
        let mut dt1 = (p2 - p1).norm_squared().powf(power);
        let mut dt2 = (p3 - p2).norm_squared().powf(power);

        if dt1 < MIN_KNOT_INTERVAL {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_INTERVAL {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_INTERVAL {
            dt2 = dt1;
        }

        VectorN::<D>::from_fn(|i, _| {
            CubicPoly::nonuniform_catmull_rom(p0[i], p1[i], p2[i], p3[i], dt0, dt1, dt2)
                .calc(weight)
        })
    }

    fn arc_length_cache(&self) -> &ArcLengthCache {
        &self.cache
    }
}
