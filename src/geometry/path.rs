use std::ops::{Deref, DerefMut};

use crate::math::Vector2;

use super::curve::{
    Curve, CubicBezierCurve2, EllipseCurve, LineCurve2, QuadraticBezierCurve2, SplineCurve2,
};
use super::curve_path::CurvePath;

/// A 2D [`CurvePath`] built with pen-style drawing commands.
///
/// The path keeps a cursor (`current_point`). Every drawing command starts
/// its curve at the cursor and leaves the cursor at the curve's end.
#[derive(Debug, Default)]
pub struct Path {
    curves: CurvePath<2>,
    current_point: Vector2,
}

impl Path {
    /// Creates an empty path with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polyline path through `points`.
    #[must_use]
    pub fn from_points(points: &[Vector2]) -> Self {
        let mut path = Self::new();
        path.set_from_points(points);
        path
    }

    /// Moves to the first point and draws straight lines through the rest.
    pub fn set_from_points(&mut self, points: &[Vector2]) -> &mut Self {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(first.x, first.y);
            for p in rest {
                self.line_to(p.x, p.y);
            }
        }
        self
    }

    /// The pen position.
    #[must_use]
    pub fn current_point(&self) -> Vector2 {
        self.current_point
    }

    /// Moves the pen without drawing.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.current_point = Vector2::new(x, y);
        self
    }

    /// Draws a straight line to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let end = Vector2::new(x, y);
        self.curves.add(LineCurve2::new(self.current_point, end));
        self.current_point = end;
        self
    }

    /// Draws a quadratic Bezier to `(x, y)` with control point `(cpx, cpy)`.
    pub fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) -> &mut Self {
        let end = Vector2::new(x, y);
        self.curves.add(QuadraticBezierCurve2::new(
            self.current_point,
            Vector2::new(cpx, cpy),
            end,
        ));
        self.current_point = end;
        self
    }

    /// Draws a cubic Bezier to `(x, y)` with control points `(cp1x, cp1y)`
    /// and `(cp2x, cp2y)`.
    pub fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        let end = Vector2::new(x, y);
        self.curves.add(CubicBezierCurve2::new(
            self.current_point,
            Vector2::new(cp1x, cp1y),
            Vector2::new(cp2x, cp2y),
            end,
        ));
        self.current_point = end;
        self
    }

    /// Draws a spline from the pen through `points`.
    pub fn spline_thru(&mut self, points: &[Vector2]) -> &mut Self {
        let Some(last) = points.last().copied() else {
            return self;
        };
        self.curves
            .add(SplineCurve2::through(self.current_point, points));
        self.current_point = last;
        self
    }

    /// Circular arc centered at an offset `(x, y)` from the pen.
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> &mut Self {
        let c = self.current_point;
        self.absarc(x + c.x, y + c.y, radius, start_angle, end_angle, clockwise)
    }

    /// Circular arc centered at `(x, y)`.
    pub fn absarc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> &mut Self {
        self.absellipse(x, y, radius, radius, start_angle, end_angle, clockwise, 0.0)
    }

    /// Elliptic arc centered at an offset `(x, y)` from the pen.
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        x_radius: f64,
        y_radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> &mut Self {
        let c = self.current_point;
        self.absellipse(
            x + c.x,
            y + c.y,
            x_radius,
            y_radius,
            start_angle,
            end_angle,
            clockwise,
            rotation,
        )
    }

    /// Elliptic arc centered at `(x, y)`.
    ///
    /// When the path already holds curves and the arc does not start at the
    /// pen, a straight line joins the pen to the arc start first.
    #[allow(clippy::too_many_arguments, clippy::float_cmp)]
    pub fn absellipse(
        &mut self,
        x: f64,
        y: f64,
        x_radius: f64,
        y_radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> &mut Self {
        let curve = EllipseCurve::new(
            Vector2::new(x, y),
            x_radius,
            y_radius,
            start_angle,
            end_angle,
            clockwise,
            rotation,
        );

        if !self.curves.is_empty() {
            let first = curve.point(0.0);
            if first != self.current_point {
                self.line_to(first.x, first.y);
            }
        }

        self.current_point = curve.point(1.0);
        self.curves.add(curve);
        self
    }

    /// Closes the path back to its first point; the pen follows.
    pub fn close_path(&mut self) -> &mut Self {
        self.curves.close_path();
        if let Some(last) = self.curves.curves().last() {
            self.current_point = last.point(1.0);
        }
        self
    }

    /// The underlying curve chain.
    #[must_use]
    pub fn curve_path(&self) -> &CurvePath<2> {
        &self.curves
    }
}

impl Deref for Path {
    type Target = CurvePath<2>;

    fn deref(&self) -> &Self::Target {
        &self.curves
    }
}

impl DerefMut for Path {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.curves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::curve::SamplingHint;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn polyline_from_points() {
        let pts = [
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 2.0),
        ];
        let path = Path::from_points(&pts);
        assert_eq!(path.len(), 2);
        assert_eq!(path.current_point(), Vector2::new(2.0, 2.0));
        assert_eq!(path.points(12), pts.to_vec());
        assert!(Path::from_points(&[]).is_empty());
    }

    #[test]
    fn move_to_does_not_draw() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0).move_to(3.0, 4.0);
        assert!(path.is_empty());
        assert_eq!(path.current_point(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn curves_start_at_pen() {
        let mut path = Path::new();
        path.move_to(1.0, 0.0)
            .quadratic_curve_to(2.0, 1.0, 3.0, 0.0)
            .bezier_curve_to(3.0, -1.0, 4.0, -1.0, 4.0, 0.0)
            .spline_thru(&[Vector2::new(5.0, 1.0), Vector2::new(6.0, 0.0)]);
        let curves = path.curves();
        assert_eq!(curves.len(), 3);
        assert_eq!(curves[0].point(0.0), Vector2::new(1.0, 0.0));
        assert_eq!(curves[1].point(0.0), Vector2::new(3.0, 0.0));
        assert_eq!(curves[2].point(0.0), Vector2::new(4.0, 0.0));
        assert_eq!(curves[2].sampling_hint(), SamplingHint::Spline { control_points: 3 });
        assert_eq!(path.current_point(), Vector2::new(6.0, 0.0));
    }

    #[test]
    fn empty_spline_is_ignored() {
        let mut path = Path::new();
        path.spline_thru(&[]);
        assert!(path.is_empty());
    }

    #[test]
    fn first_arc_is_not_joined() {
        let mut path = Path::new();
        path.absarc(5.0, 5.0, 1.0, 0.0, PI, false);
        assert_eq!(path.len(), 1);
        assert_relative_eq!(path.current_point(), Vector2::new(4.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn later_arc_is_joined_with_a_line() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).line_to(1.0, 0.0);
        path.absarc(3.0, 0.0, 1.0, PI, 0.0, true);
        // Line to the arc start at (2, 0), then the arc itself.
        assert_eq!(path.len(), 3);
        assert_relative_eq!(path.curves()[1].point(1.0), Vector2::new(2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(path.current_point(), Vector2::new(4.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn arc_is_relative_to_pen() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0).line_to(2.0, 1.0);
        path.arc(0.0, 1.0, 1.0, -FRAC_PI_2, FRAC_PI_2, false);
        // Center (2, 2): the arc starts at the pen, so no joining line.
        assert_eq!(path.len(), 2);
        assert_relative_eq!(path.current_point(), Vector2::new(2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn relative_ellipse() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0);
        path.ellipse(1.0, 0.0, 2.0, 1.0, 0.0, PI, false, 0.0);
        assert_relative_eq!(path.current_point(), Vector2::new(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn close_path_returns_pen_to_start() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).line_to(1.0, 0.0).line_to(1.0, 1.0).close_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path.current_point(), Vector2::new(0.0, 0.0));
        assert_relative_eq!(path.length(), 2.0 + 2.0_f64.sqrt(), epsilon = 1e-12);
    }
}
