//! Scalar interpolation kernels shared by the Bezier and spline curves.

/// Quadratic Bezier evaluation in Bernstein form.
///
/// Exact at the endpoints: `b2(0, ..) == p0` and `b2(1, ..) == p2`.
#[must_use]
pub fn b2(t: f64, p0: f64, p1: f64, p2: f64) -> f64 {
    let k = 1.0 - t;
    k * k * p0 + 2.0 * k * t * p1 + t * t * p2
}

/// Cubic Bezier evaluation in Bernstein form.
///
/// Exact at the endpoints: `b3(0, ..) == p0` and `b3(1, ..) == p3`.
#[must_use]
pub fn b3(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let k = 1.0 - t;
    k * k * k * p0 + 3.0 * k * k * t * p1 + 3.0 * k * t * t * p2 + t * t * t * p3
}

/// Derivative of [`b2`] with respect to `t`.
#[must_use]
pub fn b2_derivative(t: f64, p0: f64, p1: f64, p2: f64) -> f64 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// Derivative of [`b3`] with respect to `t`.
#[must_use]
pub fn b3_derivative(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let k = 1.0 - t;
    3.0 * k * k * (p1 - p0) + 6.0 * k * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Uniform Catmull-Rom interpolation between `p1` and `p2`.
#[must_use]
pub fn catmull_rom(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let v0 = (p2 - p0) * 0.5;
    let v1 = (p3 - p1) * 0.5;
    let t2 = t * t;
    let t3 = t * t2;
    (2.0 * p1 - 2.0 * p2 + v0 + v1) * t3 + (-3.0 * p1 + 3.0 * p2 - 2.0 * v0 - v1) * t2 + v0 * t + p1
}

/// Cubic polynomial `c0 + c1 t + c2 t^2 + c3 t^3` in Hermite form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CubicPoly {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl CubicPoly {
    /// Hermite cubic through `x0` and `x1` with end tangents `t0` and `t1`.
    #[must_use]
    pub fn hermite(x0: f64, x1: f64, t0: f64, t1: f64) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    /// Cardinal spline segment between `x1` and `x2` with the given tension.
    #[must_use]
    pub fn catmull_rom(x0: f64, x1: f64, x2: f64, x3: f64, tension: f64) -> Self {
        Self::hermite(x1, x2, tension * (x2 - x0), tension * (x3 - x1))
    }

    /// Catmull-Rom segment between `x1` and `x2` with non-uniform knot
    /// intervals `dt0`, `dt1`, `dt2`; tangents are rescaled to `[0, 1]`.
    #[must_use]
    pub fn nonuniform_catmull_rom(
        x0: f64,
        x1: f64,
        x2: f64,
        x3: f64,
        dt0: f64,
        dt1: f64,
        dt2: f64,
    ) -> Self {
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    /// Evaluates the polynomial at `t`.
    #[must_use]
    pub fn calc(&self, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}
