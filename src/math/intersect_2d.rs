use super::{Vector2, EPSILON};

/// Result of intersecting two closed 2D segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not touch.
    None,
    /// The segments meet in a single point.
    Point(Vector2),
    /// The segments are collinear and share the sub-segment between the two points.
    Overlap(Vector2, Vector2),
}

impl SegmentIntersection {
    /// Returns `true` if the segments touch at all.
    #[must_use]
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Tests whether `other`, known to be collinear with the segment, lies within it.
#[must_use]
fn point_in_segment_collinear(seg_a: &Vector2, seg_b: &Vector2, other: &Vector2) -> bool {
    // Vertical segments are ordered along y instead of x.
    #[allow(clippy::float_cmp)]
    let vertical = seg_a.x == seg_b.x;
    let (a, b, o) = if vertical {
        (seg_a.y, seg_b.y, other.y)
    } else {
        (seg_a.x, seg_b.x, other.x)
    };
    if a < b {
        a <= o && o <= b
    } else {
        b <= o && o <= a
    }
}

/// Bounded segment-segment intersection in 2D with exact endpoint handling.
///
/// Covers crossing, touching, parallel, collinear-overlapping and
/// single-point (zero-length) segments. Endpoint hits are reported as the
/// original endpoint rather than a recomputed point to avoid rounding.
///
/// With `exclude_adjacent`, a contact that happens only at an endpoint of
/// both segments (segments sharing a vertex) is not reported.
#[must_use]
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn segment_segment_intersect_2d(
    a0: &Vector2,
    a1: &Vector2,
    b0: &Vector2,
    b1: &Vector2,
    exclude_adjacent: bool,
) -> SegmentIntersection {
    let da = a1 - a0;
    let db = b1 - b0;
    let dab = a0 - b0;

    let limit = da.y * db.x - da.x * db.y;
    let perp_a = da.y * dab.x - da.x * dab.y;

    if limit.abs() > EPSILON {
        // Not parallel: both perpendicular distances must fall in [0, limit].
        let perp_b = db.y * dab.x - db.x * dab.y;
        if limit > 0.0 {
            if perp_a < 0.0 || perp_a > limit || perp_b < 0.0 || perp_b > limit {
                return SegmentIntersection::None;
            }
        } else if perp_a > 0.0 || perp_a < limit || perp_b > 0.0 || perp_b < limit {
            return SegmentIntersection::None;
        }

        let at_b_end = perp_a == 0.0 || perp_a == limit;
        if perp_b == 0.0 {
            if exclude_adjacent && at_b_end {
                return SegmentIntersection::None;
            }
            return SegmentIntersection::Point(*a0);
        }
        if perp_b == limit {
            if exclude_adjacent && at_b_end {
                return SegmentIntersection::None;
            }
            return SegmentIntersection::Point(*a1);
        }
        if perp_a == 0.0 {
            return SegmentIntersection::Point(*b0);
        }
        if perp_a == limit {
            return SegmentIntersection::Point(*b1);
        }
        let factor = perp_b / limit;
        return SegmentIntersection::Point(a0 + da * factor);
    }

    // Parallel: only collinear segments can touch.
    if perp_a != 0.0 || db.y * dab.x != db.x * dab.y {
        return SegmentIntersection::None;
    }

    let a_is_point = da.x == 0.0 && da.y == 0.0;
    let b_is_point = db.x == 0.0 && db.y == 0.0;

    if a_is_point && b_is_point {
        if a0 != b0 {
            return SegmentIntersection::None;
        }
        return SegmentIntersection::Point(*a0);
    }
    if a_is_point {
        if !point_in_segment_collinear(b0, b1, a0) {
            return SegmentIntersection::None;
        }
        return SegmentIntersection::Point(*a0);
    }
    if b_is_point {
        if !point_in_segment_collinear(a0, a1, b0) {
            return SegmentIntersection::None;
        }
        return SegmentIntersection::Point(*b0);
    }

    // Collinear segments: order each one along its dominant axis and compare ranges.
    let key = |p: &Vector2| if da.x == 0.0 { p.y } else { p.x };
    let (a_min, a_max) = if key(a0) < key(a1) { (a0, a1) } else { (a1, a0) };
    let (b_min, b_max) = if key(b0) < key(b1) { (b0, b1) } else { (b1, b0) };
    let (a_lo, a_hi) = (key(a_min), key(a_max));
    let (b_lo, b_hi) = (key(b_min), key(b_max));

    if a_lo <= b_lo {
        if a_hi < b_lo {
            return SegmentIntersection::None;
        }
        if a_hi == b_lo {
            if exclude_adjacent {
                return SegmentIntersection::None;
            }
            return SegmentIntersection::Point(*b_min);
        }
        if a_hi <= b_hi {
            return SegmentIntersection::Overlap(*b_min, *a_max);
        }
        SegmentIntersection::Overlap(*b_min, *b_max)
    } else {
        if a_lo > b_hi {
            return SegmentIntersection::None;
        }
        if a_lo == b_hi {
            if exclude_adjacent {
                return SegmentIntersection::None;
            }
            return SegmentIntersection::Point(*a_min);
        }
        if a_hi <= b_hi {
            return SegmentIntersection::Overlap(*a_min, *a_max);
        }
        SegmentIntersection::Overlap(*a_min, *b_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn crossing_segments() {
        let hit = segment_segment_intersect_2d(&v(0.0, 0.0), &v(2.0, 2.0), &v(0.0, 2.0), &v(2.0, 0.0), false);
        let SegmentIntersection::Point(p) = hit else {
            panic!("expected a point, got {hit:?}");
        };
        assert_relative_eq!(p, v(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn disjoint_segments() {
        let hit = segment_segment_intersect_2d(&v(0.0, 0.0), &v(1.0, 0.0), &v(0.0, 1.0), &v(1.0, 1.0), false);
        assert_eq!(hit, SegmentIntersection::None);
        let hit = segment_segment_intersect_2d(&v(0.0, 0.0), &v(1.0, 1.0), &v(3.0, 0.0), &v(2.0, 1.0), false);
        assert_eq!(hit, SegmentIntersection::None);
    }

    #[test]
    fn shared_endpoint_reported_unless_excluded() {
        let a0 = v(0.0, 0.0);
        let a1 = v(1.0, 1.0);
        let b1 = v(2.0, 0.0);
        assert_eq!(
            segment_segment_intersect_2d(&a0, &a1, &a1, &b1, false),
            SegmentIntersection::Point(a1)
        );
        assert_eq!(
            segment_segment_intersect_2d(&a0, &a1, &a1, &b1, true),
            SegmentIntersection::None
        );
    }

    #[test]
    fn t_junction_is_reported_even_when_excluding_adjacent() {
        // The end of segment b touches the middle of segment a.
        let hit = segment_segment_intersect_2d(&v(0.0, 0.0), &v(2.0, 0.0), &v(1.0, 1.0), &v(1.0, 0.0), true);
        assert_eq!(hit, SegmentIntersection::Point(v(1.0, 0.0)));
    }

    #[test]
    fn parallel_segments_do_not_touch() {
        let hit = segment_segment_intersect_2d(&v(0.0, 0.0), &v(2.0, 0.0), &v(0.0, 1.0), &v(2.0, 1.0), false);
        assert_eq!(hit, SegmentIntersection::None);
    }

    #[test]
    fn collinear_overlap() {
        let hit = segment_segment_intersect_2d(&v(0.0, 0.0), &v(2.0, 0.0), &v(1.0, 0.0), &v(3.0, 0.0), false);
        assert_eq!(hit, SegmentIntersection::Overlap(v(1.0, 0.0), v(2.0, 0.0)));
        assert!(hit.is_some());
    }

    #[test]
    fn collinear_vertical_containment() {
        let hit = segment_segment_intersect_2d(&v(0.0, 3.0), &v(0.0, 0.0), &v(0.0, 1.0), &v(0.0, 2.0), false);
        assert_eq!(hit, SegmentIntersection::Overlap(v(0.0, 1.0), v(0.0, 2.0)));
    }

    #[test]
    fn collinear_touching_ends() {
        let a0 = v(0.0, 0.0);
        let a1 = v(1.0, 0.0);
        let b1 = v(2.0, 0.0);
        assert_eq!(
            segment_segment_intersect_2d(&a0, &a1, &a1, &b1, false),
            SegmentIntersection::Point(a1)
        );
        assert_eq!(
            segment_segment_intersect_2d(&a0, &a1, &a1, &b1, true),
            SegmentIntersection::None
        );
    }

    #[test]
    fn point_segments() {
        let p = v(1.0, 1.0);
        assert_eq!(
            segment_segment_intersect_2d(&p, &p, &p, &p, false),
            SegmentIntersection::Point(p)
        );
        assert_eq!(
            segment_segment_intersect_2d(&p, &p, &v(0.0, 0.0), &v(2.0, 2.0), false),
            SegmentIntersection::Point(p)
        );
        assert_eq!(
            segment_segment_intersect_2d(&v(0.0, 0.0), &v(2.0, 2.0), &p, &p, false),
            SegmentIntersection::Point(p)
        );
        assert_eq!(
            segment_segment_intersect_2d(&p, &p, &v(2.0, 2.0), &v(3.0, 3.0), false),
            SegmentIntersection::None
        );
    }
}
