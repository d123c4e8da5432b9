use nalgebra::Unit;

use crate::math::{Matrix4, Vector3, EPSILON};

use super::{fraction, Curve};

/// Tangent, normal and binormal vectors sampled along a 3D curve.
///
/// The three vectors are parallel arrays with one entry per sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrenetFrames {
    /// Unit tangents.
    pub tangents: Vec<Vector3>,
    /// Unit normals, parallel-transported along the curve.
    pub normals: Vec<Vector3>,
    /// Unit binormals (`tangent x normal`).
    pub binormals: Vec<Vector3>,
}

impl FrenetFrames {
    /// Number of sampled frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tangents.len()
    }

    /// Returns `true` if no frame was sampled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tangents.is_empty()
    }
}

/// Frame computation for 3D curves.
pub trait FrenetFramesExt: Curve<3> {
    /// Samples `segments + 1` frames at uniform arc-length steps.
    ///
    /// The first normal is seeded perpendicular to the first tangent using
    /// the world axis the tangent is least aligned with. Each following
    /// normal is the previous one rotated by the angle between consecutive
    /// tangents (parallel transport). For `closed` curves the residual twist
    /// between the first and last normal is spread evenly over all samples.
    #[allow(clippy::cast_precision_loss)]
    fn compute_frenet_frames(&self, segments: usize, closed: bool) -> FrenetFrames {
        let segments = segments.max(1);

        let tangents: Vec<Vector3> = (0..=segments)
            .map(|i| self.tangent_at_arc_length(fraction(i, segments)))
            .collect();

        let mut normals = Vec::with_capacity(segments + 1);
        let mut binormals = Vec::with_capacity(segments + 1);

        let first_normal = initial_normal(&tangents[0]);
        binormals.push(tangents[0].cross(&first_normal));
        normals.push(first_normal);

        for i in 1..=segments {
            let mut normal = normals[i - 1];
            let axis = tangents[i - 1].cross(&tangents[i]);
            if axis.norm() > EPSILON {
                let theta = tangents[i - 1].dot(&tangents[i]).clamp(-1.0, 1.0).acos();
                normal = rotate_about(&axis, theta, &normal);
            }
            binormals.push(tangents[i].cross(&normal));
            normals.push(normal);
        }

        if closed {
            let mut theta = normals[0].dot(&normals[segments]).clamp(-1.0, 1.0).acos();
            theta /= segments as f64;
            if tangents[0].dot(&normals[0].cross(&normals[segments])) > 0.0 {
                theta = -theta;
            }
            for i in 1..=segments {
                normals[i] = rotate_about(&tangents[i], theta * i as f64, &normals[i]);
                binormals[i] = tangents[i].cross(&normals[i]);
            }
        }

        FrenetFrames {
            tangents,
            normals,
            binormals,
        }
    }
}

impl<C: Curve<3> + ?Sized> FrenetFramesExt for C {}

/// Normal perpendicular to `tangent`, built from the world axis with the
/// smallest absolute tangent component.
fn initial_normal(tangent: &Vector3) -> Vector3 {
    let (tx, ty, tz) = (tangent.x.abs(), tangent.y.abs(), tangent.z.abs());
    // Ties go to the later axis.
    let axis = if tz <= tx.min(ty) {
        Vector3::z()
    } else if ty <= tx {
        Vector3::y()
    } else {
        Vector3::x()
    };
    let side = tangent.cross(&axis).normalize();
    tangent.cross(&side)
}

fn rotate_about(axis: &Vector3, angle: f64, v: &Vector3) -> Vector3 {
    let rotation = Matrix4::from_axis_angle(&Unit::new_normalize(*axis), angle);
    rotation.transform_vector(v)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{CatmullRomCurve3, CatmullRomKind, LineCurve3};
    use approx::assert_relative_eq;

    fn assert_orthonormal(frames: &FrenetFrames) {
        for i in 0..frames.len() {
            let (t, n, b) = (frames.tangents[i], frames.normals[i], frames.binormals[i]);
            assert_relative_eq!(t.norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(b.norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(t.dot(&n), 0.0, epsilon = 1e-3);
            assert_relative_eq!(n.dot(&b), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn straight_line_frames_do_not_drift() {
        let line = LineCurve3::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0));
        let frames = line.compute_frenet_frames(16, false);
        assert_eq!(frames.len(), 17);
        for i in 1..frames.len() {
            assert_relative_eq!(frames.tangents[i], frames.tangents[0], epsilon = 1e-12);
            assert_relative_eq!(frames.normals[i], frames.normals[0], epsilon = 1e-12);
            assert_relative_eq!(frames.binormals[i], frames.binormals[0], epsilon = 1e-12);
        }
        assert_orthonormal(&frames);
    }

    #[test]
    fn seed_normal_uses_least_aligned_axis() {
        let line = LineCurve3::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 5.0));
        let frames = line.compute_frenet_frames(1, false);
        // Tangent +Z: x and y tie at zero and the later axis wins.
        assert_relative_eq!(frames.normals[0], Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(frames.binormals[0], Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn closed_loop_frames_meet_at_seam() {
        let points = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.5),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, -0.5),
        ];
        let curve = CatmullRomCurve3::new(points, true, CatmullRomKind::Centripetal).unwrap();
        let frames = curve.compute_frenet_frames(64, true);
        assert_eq!(frames.len(), 65);
        assert_relative_eq!(frames.normals[0], frames.normals[64], epsilon = 1e-3);
        assert_orthonormal(&frames);
    }
}
