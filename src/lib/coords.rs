use geo_types::{Coordinate, LineString, Polygon};
use itertools::Itertools;

use super::error::{Error, Result};

/// Ordinates closer than this are considered equal.
///
/// The threshold swallows noise around the 15th decimal digit of a degree
/// value while keeping differences at the 13th digit distinguishable.
pub(crate) const EPSILON: f64 = 5e-14;

pub(crate) fn points_equal(a: Coordinate<f64>, b: Coordinate<f64>) -> bool {
    (a.x - b.x).abs() <= EPSILON && (a.y - b.y).abs() <= EPSILON
}

/// True if `p` lies on the closed segment from `a` to `b`, endpoints
/// included.
pub(crate) fn point_on_segment(
    p: Coordinate<f64>,
    a: Coordinate<f64>,
    b: Coordinate<f64>,
) -> bool {
    if orientation(a, b, p).abs() > EPSILON {
        return false;
    }
    within_range(p.x, a.x, b.x) && within_range(p.y, a.y, b.y)
}

fn within_range(v: f64, bound_a: f64, bound_b: f64) -> bool {
    let (lo, hi) = if bound_a <= bound_b {
        (bound_a, bound_b)
    } else {
        (bound_b, bound_a)
    };
    v >= lo - EPSILON && v <= hi + EPSILON
}

/// Twice the signed area of the triangle `a`, `b`, `c`. Positive when `c`
/// lies left of the directed line from `a` to `b`.
fn orientation(a: Coordinate<f64>, b: Coordinate<f64>, c: Coordinate<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True if the closed segments share at least one point. A transversal
/// crossing, a collinear overlap and a mere touch at an endpoint all count.
pub(crate) fn segments_intersect(
    p1: Coordinate<f64>,
    p2: Coordinate<f64>,
    q1: Coordinate<f64>,
    q2: Coordinate<f64>,
) -> bool {
    segments_cross(p1, p2, q1, q2)
        || point_on_segment(p1, q1, q2)
        || point_on_segment(p2, q1, q2)
        || point_on_segment(q1, p1, p2)
        || point_on_segment(q2, p1, p2)
}

/// True only for a proper crossing: the segments meet in a single point
/// interior to both. Shared endpoints and collinear overlaps do not count.
pub(crate) fn segments_cross(
    p1: Coordinate<f64>,
    p2: Coordinate<f64>,
    q1: Coordinate<f64>,
    q2: Coordinate<f64>,
) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Consecutive coordinate pairs of a path.
pub(crate) fn edges(
    line: &LineString<f64>,
) -> impl Iterator<Item = (Coordinate<f64>, Coordinate<f64>)> + Clone + '_ {
    line.0.iter().copied().tuple_windows()
}

/// Signed number of times the ring winds around `p`: upward edges crossing
/// the horizontal through `p` to its right add one, downward edges subtract
/// one. Positive for a counter-clockwise ring enclosing the point, negative
/// for a clockwise one, zero outside.
pub(crate) fn ring_winding(p: Coordinate<f64>, ring: &LineString<f64>) -> i32 {
    let mut winding = 0;
    for (a, b) in edges(ring) {
        if a.y <= p.y && b.y > p.y {
            if crossing_x(p.y, a, b) > p.x {
                winding += 1;
            }
        } else if a.y > p.y && b.y <= p.y && crossing_x(p.y, a, b) > p.x {
            winding -= 1;
        }
    }
    winding
}

/// Interpolated x at which the edge from `a` to `b` crosses the horizontal
/// line at `y`. Only called for edges that do cross it.
fn crossing_x(y: f64, a: Coordinate<f64>, b: Coordinate<f64>) -> f64 {
    a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y)
}

pub(crate) fn ring_boundary_contains(p: Coordinate<f64>, ring: &LineString<f64>) -> bool {
    edges(ring).any(|(a, b)| point_on_segment(p, a, b))
}

/// Membership in the closed region bounded by the ring. The boundary always
/// counts; the interior only does when the ring winds counter-clockwise
/// around the point, so the answer depends on the traversal direction of
/// the ring. Exterior rings are expected counter-clockwise.
pub(crate) fn ring_contains(p: Coordinate<f64>, ring: &LineString<f64>) -> bool {
    ring_boundary_contains(p, ring) || ring_winding(p, ring) > 0
}

/// Membership in a polygon with holes. Points on any boundary, including a
/// hole boundary, belong to the polygon; points strictly inside a hole do
/// not, whichever way the hole is wound.
pub(crate) fn polygon_contains(p: Coordinate<f64>, polygon: &Polygon<f64>) -> bool {
    if !ring_contains(p, polygon.exterior()) {
        return false;
    }
    for hole in polygon.interiors() {
        if ring_boundary_contains(p, hole) {
            continue;
        }
        if ring_winding(p, hole) != 0 {
            return false;
        }
    }
    true
}

/// A usable ring carries at least four coordinates and closes on itself.
pub(crate) fn validate_ring(ring: &LineString<f64>) -> Result<()> {
    if ring.0.len() < 4 {
        return Err(Error::Geometry(format!(
            "ring needs at least 4 coordinates, got {}",
            ring.0.len()
        )));
    }
    if !points_equal(ring.0[0], ring.0[ring.0.len() - 1]) {
        return Err(Error::Geometry("ring is not closed".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_polygon(polygon: &Polygon<f64>) -> Result<()> {
    validate_ring(polygon.exterior())?;
    polygon.interiors().iter().try_for_each(validate_ring)
}

/// A usable path carries at least two coordinates and spans a non-zero
/// distance.
pub(crate) fn validate_line(line: &LineString<f64>) -> Result<()> {
    if line.0.len() < 2 {
        return Err(Error::Geometry(format!(
            "line needs at least 2 coordinates, got {}",
            line.0.len()
        )));
    }
    if line.0.len() == 2 && points_equal(line.0[0], line.0[1]) {
        return Err(Error::Geometry(
            "line segment endpoints coincide".to_string(),
        ));
    }
    Ok(())
}

/// Point of the closed segment `a`-`b` closest to `p` under planar
/// distance.
pub(crate) fn nearest_on_segment(
    p: Coordinate<f64>,
    a: Coordinate<f64>,
    b: Coordinate<f64>,
) -> Coordinate<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length2 = dx * dx + dy * dy;
    if length2 == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / length2).max(0.0).min(1.0);
    Coordinate {
        x: a.x + t * dx,
        y: a.y + t * dy,
    }
}
