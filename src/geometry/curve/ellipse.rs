use std::f64::consts::TAU;

use crate::math::{Vector2, EPSILON};

use super::{ArcLengthCache, Curve, SamplingHint};

/// An ellipse (or elliptical arc) in the plane.
///
/// Defined by a center, two radii, an angular range, a winding flag and a
/// rotation of the whole ellipse about its center.
///
/// `P(t) = center + R(rotation) * (x_radius * cos(a), y_radius * sin(a))`
/// where `a = start_angle + t * sweep`.
#[derive(Debug, Clone)]
pub struct EllipseCurve {
    center: Vector2,
    x_radius: f64,
    y_radius: f64,
    start_angle: f64,
    end_angle: f64,
    clockwise: bool,
    rotation: f64,
    cache: ArcLengthCache,
}

impl EllipseCurve {
    /// Creates a new ellipse.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `x_radius` - Radius along the (unrotated) x axis
    /// * `y_radius` - Radius along the (unrotated) y axis
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    /// * `clockwise` - Sweep clockwise from start to end
    /// * `rotation` - Rotation of the ellipse about its center, in radians
    #[must_use]
    pub fn new(
        center: Vector2,
        x_radius: f64,
        y_radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> Self {
        Self {
            center,
            x_radius,
            y_radius,
            start_angle,
            end_angle,
            clockwise,
            rotation,
            cache: ArcLengthCache::default(),
        }
    }

    /// Creates a circular arc.
    #[must_use]
    pub fn arc(center: Vector2, radius: f64, start_angle: f64, end_angle: f64, clockwise: bool) -> Self {
        Self::new(center, radius, radius, start_angle, end_angle, clockwise, 0.0)
    }

    /// Samples `divisions` chords for the arc-length table instead of the default.
    #[must_use]
    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.cache = ArcLengthCache::with_divisions(divisions);
        self
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Vector2 {
        &self.center
    }

    /// Returns the radii `(x_radius, y_radius)`.
    #[must_use]
    pub fn radii(&self) -> (f64, f64) {
        (self.x_radius, self.y_radius)
    }

    /// Returns the angular range `(start_angle, end_angle)`.
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.start_angle, self.end_angle)
    }

    /// Returns whether the arc sweeps clockwise.
    #[must_use]
    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// Returns the rotation about the center.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Moves the center.
    pub fn set_center(&mut self, center: Vector2) {
        self.center = center;
        self.cache.invalidate();
    }

    /// Changes the radii.
    pub fn set_radii(&mut self, x_radius: f64, y_radius: f64) {
        self.x_radius = x_radius;
        self.y_radius = y_radius;
        self.cache.invalidate();
    }

    /// Changes the angular range and winding.
    pub fn set_angles(&mut self, start_angle: f64, end_angle: f64, clockwise: bool) {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self.clockwise = clockwise;
        self.cache.invalidate();
    }

    /// Signed angular sweep from the start angle.
    ///
    /// The raw span is wrapped into `[0, 2pi]`; a span below machine epsilon
    /// is a full turn unless start and end coincide, in which case the arc
    /// is degenerate. Clockwise arcs sweep the complementary, negative span.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn sweep(&self) -> f64 {
        let raw = self.end_angle - self.start_angle;
        let same_points = raw.abs() < EPSILON;
        let mut delta = raw.rem_euclid(TAU);

        if delta < EPSILON {
            delta = if same_points { 0.0 } else { TAU };
        }

        if self.clockwise && !same_points {
            delta = if delta == TAU { -TAU } else { delta - TAU };
        }
        delta
    }
}

impl Curve<2> for EllipseCurve {
    fn point(&self, t: f64) -> Vector2 {
        let angle = self.start_angle + t * self.sweep();
        let mut x = self.center.x + self.x_radius * angle.cos();
        let mut y = self.center.y + self.y_radius * angle.sin();

        if self.rotation != 0.0 {
            let (sin, cos) = self.rotation.sin_cos();
            let tx = x - self.center.x;
            let ty = y - self.center.y;
            x = tx * cos - ty * sin + self.center.x;
            y = tx * sin + ty * cos + self.center.y;
        }
        Vector2::new(x, y)
    }

    fn arc_length_cache(&self) -> &ArcLengthCache {
        &self.cache
    }

    fn sampling_hint(&self) -> SamplingHint {
        SamplingHint::Elliptic
    }
}
