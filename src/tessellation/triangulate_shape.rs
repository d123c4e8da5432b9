use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::{is_clockwise, is_point_inside_angle, remove_duplicate_end_point};
use crate::math::Vector2;

use super::triangulate::triangulate;

/// Exact coordinate key; `-0.0` and `0.0` map to the same key.
type PointKey = (u64, u64);

fn point_key(p: &Vector2) -> PointKey {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Triangulates a polygon with holes.
///
/// Closing points that repeat a loop's first point are dropped first. The
/// returned index triples refer to the concatenation of the (stripped)
/// contour followed by every (stripped) hole, in the order given.
///
/// Windings are normalized internally, so the contour and holes may be
/// passed in either orientation. Each hole is bridged into the contour with
/// a zero-width cut before ear clipping. Holes that cannot be reached within
/// `2 * holes` bridging rounds are left out.
///
/// Points are matched back to their input index by exact coordinates. When
/// two input points coincide, the later one wins.
#[must_use]
pub fn triangulate_shape(contour: &[Vector2], holes: &[Vec<Vector2>]) -> Vec<[usize; 3]> {
    let mut contour = contour.to_vec();
    remove_duplicate_end_point(&mut contour);
    let holes: Vec<Vec<Vector2>> = holes
        .iter()
        .map(|hole| {
            let mut hole = hole.clone();
            remove_duplicate_end_point(&mut hole);
            hole
        })
        .collect();

    let mut lookup: HashMap<PointKey, usize> = HashMap::new();
    for (index, p) in contour.iter().chain(holes.iter().flatten()).enumerate() {
        if lookup.insert(point_key(p), index).is_some() {
            warn!(x = p.x, y = p.y, index, "Duplicate point in shape");
        }
    }

    // Bridging expects a clockwise contour and counter-clockwise holes.
    if !is_clockwise(&contour) {
        contour.reverse();
    }
    let holes: Vec<Vec<Vector2>> = holes
        .into_iter()
        .map(|mut hole| {
            if is_clockwise(&hole) {
                hole.reverse();
            }
            hole
        })
        .collect();

    let merged = remove_holes(contour, &holes);

    triangulate(&merged)
        .into_iter()
        .filter_map(|[a, b, c]| {
            let index = |i: usize| lookup.get(&point_key(&merged[i])).copied();
            Some([index(a)?, index(b)?, index(c)?])
        })
        .collect()
}

/// Splices every reachable hole into the contour, returning one simple polygon.
fn remove_holes(contour: Vec<Vector2>, holes: &[Vec<Vector2>]) -> Vec<Vector2> {
    let mut shape = contour;
    let mut pending: Vec<usize> = (0..holes.len()).collect();
    let mut failed_cuts: HashSet<(PointKey, usize)> = HashSet::new();
    let mut min_shape_index = 0;
    let mut budget = 2 * pending.len();

    while !pending.is_empty() {
        if budget == 0 {
            warn!(
                holes_left = pending.len(),
                "Unable to bridge every hole, probably a hole outside the shape"
            );
            break;
        }
        budget -= 1;

        'search: for shape_index in min_shape_index..shape.len() {
            let shape_pt = shape[shape_index];

            for h in 0..pending.len() {
                let hole_idx = pending[h];
                let cut_key = (point_key(&shape_pt), hole_idx);
                if failed_cuts.contains(&cut_key) {
                    continue;
                }

                let hole = &holes[hole_idx];
                for hole_index in 0..hole.len() {
                    let hole_pt = hole[hole_index];
                    if !is_cut_line_inside_angles(&shape, shape_index, hole, hole_index) {
                        continue;
                    }
                    if crosses_loop(&shape_pt, &hole_pt, &shape) {
                        continue;
                    }
                    if pending
                        .iter()
                        .any(|&other| crosses_loop(&shape_pt, &hole_pt, &holes[other]))
                    {
                        continue;
                    }

                    pending.remove(h);

                    // shape[..=s] + hole[h..] + hole[..=h] + shape[s..]
                    let mut merged = Vec::with_capacity(shape.len() + hole.len() + 2);
                    merged.extend_from_slice(&shape[..=shape_index]);
                    merged.extend_from_slice(&hole[hole_index..]);
                    merged.extend_from_slice(&hole[..=hole_index]);
                    merged.extend_from_slice(&shape[shape_index..]);
                    shape = merged;

                    min_shape_index = shape_index;
                    break 'search;
                }

                failed_cuts.insert(cut_key);
            }
        }
    }

    shape
}

/// Checks that the cut from `shape[s]` to `hole[h]` leaves each endpoint
/// through the inside of the polygon corner there.
fn is_cut_line_inside_angles(shape: &[Vector2], s: usize, hole: &[Vector2], h: usize) -> bool {
    let (prev, next) = neighbors(shape.len(), s);
    if !is_point_inside_angle(&shape[s], &shape[prev], &shape[next], &hole[h]) {
        return false;
    }
    let (prev, next) = neighbors(hole.len(), h);
    is_point_inside_angle(&hole[h], &hole[prev], &hole[next], &shape[s])
}

fn neighbors(len: usize, i: usize) -> (usize, usize) {
    let prev = if i == 0 { len - 1 } else { i - 1 };
    let next = if i + 1 == len { 0 } else { i + 1 };
    (prev, next)
}

/// Tests the segment `a`-`b` against every edge of a closed loop, ignoring
/// contacts at shared endpoints.
fn crosses_loop(a: &Vector2, b: &Vector2, ring: &[Vector2]) -> bool {
    (0..ring.len()).any(|i| {
        let next = (i + 1) % ring.len();
        segment_segment_intersect_2d(a, b, &ring[i], &ring[next], true).is_some()
    })
}
