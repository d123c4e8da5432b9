use super::{Vector2, EPSILON};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn area(contour: &[Vector2]) -> f64 {
    let n = contour.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut p = n - 1;
    for q in 0..n {
        sum += contour[p].x * contour[q].y - contour[q].x * contour[p].y;
        p = q;
    }
    sum * 0.5
}

/// Returns `true` when the polygon winds clockwise (negative signed area).
#[must_use]
pub fn is_clockwise(points: &[Vector2]) -> bool {
    area(points) < 0.0
}

/// Drops the last point of a loop when it repeats the first one.
pub fn remove_duplicate_end_point(points: &mut Vec<Vector2>) {
    let n = points.len();
    if n > 2 && points[n - 1] == points[0] {
        points.pop();
    }
}

/// Ray-crossing point-in-polygon test. Points on the boundary count as inside.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn point_in_polygon(point: &Vector2, polygon: &[Vector2]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut p = n - 1;
    for q in 0..n {
        let mut low = polygon[p];
        let mut high = polygon[q];
        p = q;
        let mut dx = high.x - low.x;
        let mut dy = high.y - low.y;

        if dy.abs() > EPSILON {
            if dy < 0.0 {
                std::mem::swap(&mut low, &mut high);
                dx = -dx;
                dy = -dy;
            }
            if point.y < low.y || point.y > high.y {
                continue;
            }
            if point.y == low.y {
                if point.x == low.x {
                    return true;
                }
                // Crossings through the low vertex are counted by the adjacent edge.
            } else {
                let perp = dy * (point.x - low.x) - dx * (point.y - low.y);
                if perp == 0.0 {
                    return true;
                }
                if perp < 0.0 {
                    continue;
                }
                inside = !inside;
            }
        } else {
            // Horizontal edge: only a hit when the point lies on it.
            if point.y != low.y {
                continue;
            }
            if (high.x <= point.x && point.x <= low.x) || (low.x <= point.x && point.x <= high.x) {
                return true;
            }
        }
    }
    inside
}

/// Tests whether `other` lies inside the angle at `vertex` swept
/// counter-clockwise from the `leg_from` leg to the `leg_to` leg.
///
/// The order of the legs matters: swapping them selects the reflex side.
#[must_use]
pub fn is_point_inside_angle(
    vertex: &Vector2,
    leg_from: &Vector2,
    leg_to: &Vector2,
    other: &Vector2,
) -> bool {
    let from = leg_from - vertex;
    let to = leg_to - vertex;
    let other = other - vertex;

    // > 0: angle below 180 degrees, 0: straight, < 0: reflex.
    let from_to = from.perp(&to);
    let from_other = from.perp(&other);

    if from_to.abs() > EPSILON {
        let other_to = other.perp(&to);
        if from_to > 0.0 {
            from_other >= 0.0 && other_to >= 0.0
        } else {
            from_other >= 0.0 || other_to >= 0.0
        }
    } else {
        from_other > 0.0
    }
}
