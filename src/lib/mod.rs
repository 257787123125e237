//! Geometric *intersects* / *contains* predicates for GeoJSON-like shapes.
//!
//! A [`Shape`] is one of eight kinds — point, multi-point, line string,
//! multi-line-string, polygon, multi-polygon, circle and envelope — carrying
//! (longitude, latitude) coordinates in degrees. Two predicates relate a
//! query shape to a candidate shape:
//!
//! * [`Shape::intersects`] — the two point sets share at least one point.
//!   Boundaries count, and the relation is symmetric.
//! * [`Shape::contains`] — every point of the other shape lies within the
//!   query's closed point set.
//!
//! Polygon exterior rings are expected counter-clockwise and holes
//! clockwise, following the right-hand rule. The ring membership test is
//! directional: a clockwise exterior ring yields a deterministic but
//! geometrically inverted answer (only its boundary is considered inside).
//! Supplying conformant winding is a caller obligation, not something this
//! crate repairs.
//!
//! Circle tests against lines and polygons sample each edge at its
//! planar-nearest point to the center instead of computing exact geodesic
//! arc distances, and area-contains-circle works on the circle's bounding
//! box. Long edges that bow geodesically away from the sample and polygons
//! that thread between samples can be misjudged; this is a documented
//! accuracy/performance trade-off.
//!
//! All operations are synchronous, pure and allocation-light. Shapes are
//! immutable, so predicates may be called from any number of threads
//! without synchronization.

use geo_types::{Coordinate, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use itertools::Itertools;

pub mod circle;
mod coords;
pub mod envelope;
mod error;
pub mod geojson;
mod multi;

pub use circle::{parse_distance, Circle};
pub use envelope::Envelope;
pub use error::{Error, Result};

/// A geographic shape, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point<f64>),
    MultiPoint(MultiPoint<f64>),
    LineString(LineString<f64>),
    MultiLineString(MultiLineString<f64>),
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
    Circle(Circle),
    Envelope(Envelope),
}

impl Shape {
    pub fn point(lon: f64, lat: f64) -> Shape {
        Shape::Point(Point::new(lon, lat))
    }

    pub fn multi_point(points: Vec<(f64, f64)>) -> Shape {
        Shape::MultiPoint(points.into())
    }

    pub fn line_string(points: Vec<(f64, f64)>) -> Shape {
        Shape::LineString(points.into())
    }

    pub fn multi_line_string(lines: Vec<Vec<(f64, f64)>>) -> Shape {
        Shape::MultiLineString(MultiLineString(
            lines.into_iter().map(LineString::from).collect(),
        ))
    }

    /// The first ring is the exterior, the rest are holes.
    pub fn polygon(rings: Vec<Vec<(f64, f64)>>) -> Shape {
        Shape::Polygon(rings_to_polygon(rings))
    }

    pub fn multi_polygon(polygons: Vec<Vec<Vec<(f64, f64)>>>) -> Shape {
        Shape::MultiPolygon(MultiPolygon(
            polygons.into_iter().map(rings_to_polygon).collect(),
        ))
    }

    pub fn circle(center: (f64, f64), radius: &str) -> Shape {
        Shape::Circle(Circle::new(center.into(), radius))
    }

    pub fn envelope(a: (f64, f64), b: (f64, f64)) -> Shape {
        Shape::Envelope(Envelope::new(a.into(), b.into()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::MultiPoint(_) => "multipoint",
            Shape::LineString(_) => "linestring",
            Shape::MultiLineString(_) => "multilinestring",
            Shape::Polygon(_) => "polygon",
            Shape::MultiPolygon(_) => "multipolygon",
            Shape::Circle(_) => "circle",
            Shape::Envelope(_) => "envelope",
        }
    }

    /// True when the two shapes share at least one point. Symmetric:
    /// `a.intersects(b)` equals `b.intersects(a)`.
    pub fn intersects(&self, other: &Shape) -> Result<bool> {
        match self {
            Shape::Point(p) => point_intersects(*p, other),
            Shape::MultiPoint(points) => {
                multi::any_member(&points.0, |p| point_intersects(*p, other))
            }
            Shape::LineString(line) => line_intersects(line, other),
            Shape::MultiLineString(lines) => {
                multi::any_member(&lines.0, |line| line_intersects(line, other))
            }
            Shape::Polygon(polygon) => polygon_intersects(polygon, other),
            Shape::MultiPolygon(polygons) => {
                multi::any_member(&polygons.0, |polygon| polygon_intersects(polygon, other))
            }
            Shape::Circle(circle) => circle_intersects(circle, other),
            Shape::Envelope(envelope) => envelope_intersects(*envelope, other),
        }
    }

    /// True when every point of `other` lies within this shape's closed
    /// point set. Asymmetric.
    pub fn contains(&self, other: &Shape) -> Result<bool> {
        match self {
            Shape::Point(p) => point_contains(*p, other),
            Shape::MultiPoint(points) => multi_point_contains(points, other),
            Shape::LineString(line) => {
                lines_contain("linestring", std::slice::from_ref(line), other)
            }
            Shape::MultiLineString(lines) => lines_contain("multilinestring", &lines.0, other),
            Shape::Polygon(polygon) => polygon_contains_shape(polygon, other),
            Shape::MultiPolygon(polygons) => multi_polygon_contains(polygons, other),
            Shape::Circle(circle) => circle_contains(circle, other),
            Shape::Envelope(envelope) => envelope_contains(*envelope, other),
        }
    }
}

fn rings_to_polygon(rings: Vec<Vec<(f64, f64)>>) -> Polygon<f64> {
    let mut rings = rings.into_iter().map(LineString::from);
    let exterior = rings.next().unwrap_or_else(|| LineString(vec![]));
    Polygon::new(exterior, rings.collect())
}

fn polygon_rings(polygon: &Polygon<f64>) -> impl Iterator<Item = &LineString<f64>> + Clone {
    std::iter::once(polygon.exterior()).chain(polygon.interiors().iter())
}

fn polygon_vertices(polygon: &Polygon<f64>) -> impl Iterator<Item = Coordinate<f64>> + '_ {
    polygon_rings(polygon).flat_map(|ring| ring.0.iter().copied())
}

fn point_on_line(c: Coordinate<f64>, line: &LineString<f64>) -> Result<bool> {
    coords::validate_line(line)?;
    Ok(coords::edges(line).any(|(a, b)| coords::point_on_segment(c, a, b)))
}

fn point_in_polygon(c: Coordinate<f64>, polygon: &Polygon<f64>) -> Result<bool> {
    coords::validate_polygon(polygon)?;
    Ok(coords::polygon_contains(c, polygon))
}

fn point_intersects(p: Point<f64>, other: &Shape) -> Result<bool> {
    match other {
        Shape::Point(o) => Ok(coords::points_equal(p.0, o.0)),
        Shape::MultiPoint(points) => Ok(points.0.iter().any(|o| coords::points_equal(p.0, o.0))),
        Shape::LineString(line) => point_on_line(p.0, line),
        Shape::MultiLineString(lines) => {
            multi::any_member(&lines.0, |line| point_on_line(p.0, line))
        }
        Shape::Polygon(polygon) => point_in_polygon(p.0, polygon),
        Shape::MultiPolygon(polygons) => {
            multi::any_member(&polygons.0, |polygon| point_in_polygon(p.0, polygon))
        }
        Shape::Circle(circle) => circle.contains_coordinate(p.0),
        Shape::Envelope(envelope) => Ok(envelope.contains_coordinate(p.0)),
    }
}

/// Any pair of segments taken from the two paths shares a point.
fn lines_share_point(a: &LineString<f64>, b: &LineString<f64>) -> bool {
    coords::edges(a)
        .cartesian_product(coords::edges(b))
        .any(|((a1, a2), (b1, b2))| coords::segments_intersect(a1, a2, b1, b2))
}

/// A line meets a polygon when a segment touches a ring or when any of its
/// vertices sits inside; the vertex check catches a line wholly interior to
/// the polygon with no ring contact at all.
fn line_meets_polygon(line: &LineString<f64>, polygon: &Polygon<f64>) -> Result<bool> {
    coords::validate_line(line)?;
    coords::validate_polygon(polygon)?;
    if polygon_rings(polygon).any(|ring| lines_share_point(line, ring)) {
        return Ok(true);
    }
    Ok(line.0.iter().any(|&c| coords::polygon_contains(c, polygon)))
}

fn line_meets_envelope(line: &LineString<f64>, envelope: Envelope) -> Result<bool> {
    coords::validate_line(line)?;
    if line.0.iter().any(|&c| envelope.contains_coordinate(c)) {
        return Ok(true);
    }
    Ok(lines_share_point(line, &envelope.to_ring()))
}

fn line_intersects(line: &LineString<f64>, other: &Shape) -> Result<bool> {
    coords::validate_line(line)?;
    match other {
        Shape::Point(p) => point_on_line(p.0, line),
        Shape::MultiPoint(points) => multi::any_member(&points.0, |p| point_on_line(p.0, line)),
        Shape::LineString(o) => {
            coords::validate_line(o)?;
            Ok(lines_share_point(line, o))
        }
        Shape::MultiLineString(lines) => multi::any_member(&lines.0, |o| {
            coords::validate_line(o)?;
            Ok(lines_share_point(line, o))
        }),
        Shape::Polygon(polygon) => line_meets_polygon(line, polygon),
        Shape::MultiPolygon(polygons) => {
            multi::any_member(&polygons.0, |polygon| line_meets_polygon(line, polygon))
        }
        Shape::Circle(circle) => circle_meets_line(circle, line),
        Shape::Envelope(envelope) => line_meets_envelope(line, *envelope),
    }
}

/// Polygons meet when any pair of ring segments shares a point or when
/// either polygon has a vertex inside the other; the vertex checks catch
/// pure containment with no crossing edges.
fn polygons_meet(a: &Polygon<f64>, b: &Polygon<f64>) -> Result<bool> {
    coords::validate_polygon(a)?;
    coords::validate_polygon(b)?;
    for ring_a in polygon_rings(a) {
        for ring_b in polygon_rings(b) {
            if lines_share_point(ring_a, ring_b) {
                return Ok(true);
            }
        }
    }
    Ok(polygon_vertices(b).any(|c| coords::polygon_contains(c, a))
        || polygon_vertices(a).any(|c| coords::polygon_contains(c, b)))
}

fn polygon_intersects(polygon: &Polygon<f64>, other: &Shape) -> Result<bool> {
    coords::validate_polygon(polygon)?;
    match other {
        Shape::Point(p) => Ok(coords::polygon_contains(p.0, polygon)),
        Shape::MultiPoint(points) => Ok(points
            .0
            .iter()
            .any(|p| coords::polygon_contains(p.0, polygon))),
        Shape::LineString(line) => line_meets_polygon(line, polygon),
        Shape::MultiLineString(lines) => {
            multi::any_member(&lines.0, |line| line_meets_polygon(line, polygon))
        }
        Shape::Polygon(o) => polygons_meet(polygon, o),
        Shape::MultiPolygon(polygons) => {
            multi::any_member(&polygons.0, |o| polygons_meet(polygon, o))
        }
        Shape::Circle(circle) => circle_meets_polygon(circle, polygon),
        Shape::Envelope(envelope) => polygons_meet(polygon, &envelope.to_polygon()),
    }
}

fn circle_meets_line(circle: &Circle, line: &LineString<f64>) -> Result<bool> {
    coords::validate_line(line)?;
    let radius = circle.radius_meters()?;
    Ok(coords::edges(line).any(|(a, b)| circle.distance_to_segment(a, b) <= radius))
}

fn circle_meets_polygon(circle: &Circle, polygon: &Polygon<f64>) -> Result<bool> {
    coords::validate_polygon(polygon)?;
    let radius = circle.radius_meters()?;
    let rim_hit = polygon_rings(polygon)
        .any(|ring| coords::edges(ring).any(|(a, b)| circle.distance_to_segment(a, b) <= radius));
    Ok(rim_hit || coords::polygon_contains(circle.center().0, polygon))
}

fn circle_intersects(circle: &Circle, other: &Shape) -> Result<bool> {
    match other {
        Shape::Point(p) => circle.contains_coordinate(p.0),
        Shape::MultiPoint(points) => {
            multi::any_member(&points.0, |p| circle.contains_coordinate(p.0))
        }
        Shape::LineString(line) => circle_meets_line(circle, line),
        Shape::MultiLineString(lines) => {
            multi::any_member(&lines.0, |line| circle_meets_line(circle, line))
        }
        Shape::Polygon(polygon) => circle_meets_polygon(circle, polygon),
        Shape::MultiPolygon(polygons) => {
            multi::any_member(&polygons.0, |polygon| circle_meets_polygon(circle, polygon))
        }
        Shape::Circle(o) => {
            let gap = circle.distance_to(o.center().0);
            Ok(gap <= circle.radius_meters()? + o.radius_meters()?)
        }
        Shape::Envelope(envelope) => Ok(circle.bounding_box()?.overlaps(envelope)),
    }
}

fn envelope_intersects(envelope: Envelope, other: &Shape) -> Result<bool> {
    match other {
        Shape::Point(p) => Ok(envelope.contains_coordinate(p.0)),
        Shape::MultiPoint(points) => Ok(points
            .0
            .iter()
            .any(|p| envelope.contains_coordinate(p.0))),
        Shape::LineString(line) => line_meets_envelope(line, envelope),
        Shape::MultiLineString(lines) => {
            multi::any_member(&lines.0, |line| line_meets_envelope(line, envelope))
        }
        Shape::Polygon(polygon) => polygons_meet(&envelope.to_polygon(), polygon),
        Shape::MultiPolygon(polygons) => multi::any_member(&polygons.0, |polygon| {
            polygons_meet(&envelope.to_polygon(), polygon)
        }),
        Shape::Circle(circle) => Ok(circle.bounding_box()?.overlaps(&envelope)),
        Shape::Envelope(o) => Ok(envelope.overlaps(o)),
    }
}

fn point_contains(p: Point<f64>, other: &Shape) -> Result<bool> {
    match other {
        Shape::Point(o) => Ok(coords::points_equal(p.0, o.0)),
        Shape::MultiPoint(points) => Ok(points.0.iter().all(|o| coords::points_equal(p.0, o.0))),
        _ => Ok(false),
    }
}

fn multi_point_contains(points: &MultiPoint<f64>, other: &Shape) -> Result<bool> {
    let covered = |c: Coordinate<f64>| points.0.iter().any(|p| coords::points_equal(p.0, c));
    match other {
        Shape::Point(o) => Ok(covered(o.0)),
        Shape::MultiPoint(others) => Ok(others.0.iter().all(|o| covered(o.0))),
        _ => Ok(false),
    }
}

/// Containment by one or more lines: every probed point has to sit on a
/// segment of some member line. Anything with an interior cannot lie on a
/// line, and no algorithm is defined for those pairings.
fn lines_contain(kind: &'static str, lines: &[LineString<f64>], other: &Shape) -> Result<bool> {
    lines.iter().try_for_each(coords::validate_line)?;
    let on_some_line = |c: Coordinate<f64>| {
        lines
            .iter()
            .any(|line| coords::edges(line).any(|(a, b)| coords::point_on_segment(c, a, b)))
    };
    match other {
        Shape::Point(p) => Ok(on_some_line(p.0)),
        Shape::MultiPoint(points) => Ok(points.0.iter().all(|p| on_some_line(p.0))),
        Shape::LineString(o) => {
            coords::validate_line(o)?;
            Ok(o.0.iter().all(|&c| on_some_line(c)))
        }
        Shape::MultiLineString(others) => multi::all_members(&others.0, |o| {
            coords::validate_line(o)?;
            Ok(o.0.iter().all(|&c| on_some_line(c)))
        }),
        _ => Err(Error::UnsupportedPredicate {
            predicate: "contains",
            query: kind,
            other: other.kind(),
        }),
    }
}

/// Vertices-inside plus no proper edge crossing pins the whole path inside
/// the polygon; the crossing check is what keeps a path from slipping out
/// through a hole between two interior vertices.
fn covers_path(
    polygon: &Polygon<f64>,
    vertices: &[Coordinate<f64>],
    segments: &[(Coordinate<f64>, Coordinate<f64>)],
) -> bool {
    vertices.iter().all(|&c| coords::polygon_contains(c, polygon))
        && !polygon_rings(polygon).any(|ring| {
            coords::edges(ring).any(|(a1, a2)| {
                segments
                    .iter()
                    .any(|&(b1, b2)| coords::segments_cross(a1, a2, b1, b2))
            })
        })
}

fn covers_ring(polygon: &Polygon<f64>, ring: &LineString<f64>) -> bool {
    let segments: Vec<_> = coords::edges(ring).collect();
    covers_path(polygon, &ring.0, &segments)
}

fn covers_polygon(a: &Polygon<f64>, b: &Polygon<f64>) -> bool {
    let vertices: Vec<_> = polygon_vertices(b).collect();
    let segments: Vec<_> = polygon_rings(b).flat_map(|ring| coords::edges(ring)).collect();
    covers_path(a, &vertices, &segments)
}

fn polygon_contains_shape(polygon: &Polygon<f64>, other: &Shape) -> Result<bool> {
    coords::validate_polygon(polygon)?;
    match other {
        Shape::Point(p) => Ok(coords::polygon_contains(p.0, polygon)),
        Shape::MultiPoint(points) => Ok(points
            .0
            .iter()
            .all(|p| coords::polygon_contains(p.0, polygon))),
        Shape::LineString(line) => {
            coords::validate_line(line)?;
            let segments: Vec<_> = coords::edges(line).collect();
            Ok(covers_path(polygon, &line.0, &segments))
        }
        Shape::MultiLineString(lines) => multi::all_members(&lines.0, |line| {
            coords::validate_line(line)?;
            let segments: Vec<_> = coords::edges(line).collect();
            Ok(covers_path(polygon, &line.0, &segments))
        }),
        Shape::Polygon(o) => {
            coords::validate_polygon(o)?;
            Ok(covers_polygon(polygon, o))
        }
        Shape::MultiPolygon(polygons) => multi::all_members(&polygons.0, |o| {
            coords::validate_polygon(o)?;
            Ok(covers_polygon(polygon, o))
        }),
        Shape::Circle(circle) => Ok(covers_ring(polygon, &circle.bounding_box()?.to_ring())),
        Shape::Envelope(envelope) => Ok(covers_ring(polygon, &envelope.to_ring())),
    }
}

/// Containment by the union of the members: the other shape is sampled and
/// every sample must fall in some member, so a shape spanning the seam
/// between two adjacent members is still contained.
fn multi_polygon_contains(polygons: &MultiPolygon<f64>, other: &Shape) -> Result<bool> {
    polygons.0.iter().try_for_each(coords::validate_polygon)?;
    match other {
        Shape::MultiLineString(lines) => multi::all_members(&lines.0, |line| {
            coords::validate_line(line)?;
            Ok(multi::union_covers(&polygons.0, &multi::line_samples(line)))
        }),
        Shape::MultiPolygon(others) => multi::all_members(&others.0, |polygon| {
            coords::validate_polygon(polygon)?;
            Ok(multi::union_covers(
                &polygons.0,
                &multi::polygon_samples(polygon),
            ))
        }),
        _ => {
            let samples = multi::coverage_samples(other)?;
            Ok(multi::union_covers(&polygons.0, &samples))
        }
    }
}

/// Circle containment is vertex-sampled: every probed point of the other
/// shape must lie within the radius.
fn circle_contains(circle: &Circle, other: &Shape) -> Result<bool> {
    let radius = circle.radius_meters()?;
    let within = |c: Coordinate<f64>| circle.distance_to(c) <= radius;
    match other {
        Shape::Point(p) => Ok(within(p.0)),
        Shape::MultiPoint(points) => Ok(points.0.iter().all(|p| within(p.0))),
        Shape::LineString(line) => {
            coords::validate_line(line)?;
            Ok(line.0.iter().all(|&c| within(c)))
        }
        Shape::MultiLineString(lines) => multi::all_members(&lines.0, |line| {
            coords::validate_line(line)?;
            Ok(line.0.iter().all(|&c| within(c)))
        }),
        Shape::Polygon(polygon) => {
            coords::validate_polygon(polygon)?;
            Ok(polygon_vertices(polygon).all(within))
        }
        Shape::MultiPolygon(polygons) => multi::all_members(&polygons.0, |polygon| {
            coords::validate_polygon(polygon)?;
            Ok(polygon_vertices(polygon).all(within))
        }),
        Shape::Circle(o) => Ok(circle.distance_to(o.center().0) + o.radius_meters()? <= radius),
        Shape::Envelope(envelope) => Ok(envelope.to_ring().0.iter().all(|&c| within(c))),
    }
}

fn envelope_contains(envelope: Envelope, other: &Shape) -> Result<bool> {
    match other {
        Shape::Point(p) => Ok(envelope.contains_coordinate(p.0)),
        Shape::MultiPoint(points) => Ok(points
            .0
            .iter()
            .all(|p| envelope.contains_coordinate(p.0))),
        Shape::LineString(line) => {
            coords::validate_line(line)?;
            Ok(line.0.iter().all(|&c| envelope.contains_coordinate(c)))
        }
        Shape::MultiLineString(lines) => multi::all_members(&lines.0, |line| {
            coords::validate_line(line)?;
            Ok(line.0.iter().all(|&c| envelope.contains_coordinate(c)))
        }),
        Shape::Polygon(polygon) => {
            coords::validate_polygon(polygon)?;
            Ok(polygon_vertices(polygon).all(|c| envelope.contains_coordinate(c)))
        }
        Shape::MultiPolygon(polygons) => multi::all_members(&polygons.0, |polygon| {
            coords::validate_polygon(polygon)?;
            Ok(polygon_vertices(polygon).all(|c| envelope.contains_coordinate(c)))
        }),
        Shape::Circle(circle) => Ok(envelope.contains_envelope(&circle.bounding_box()?)),
        Shape::Envelope(o) => Ok(envelope.contains_envelope(o)),
    }
}

#[cfg(test)]
mod predicate_properties {
    use super::*;

    fn samples() -> Vec<Shape> {
        vec![
            Shape::point(0.5, 0.5),
            Shape::multi_point(vec![(0.5, 0.5), (4., 4.)]),
            Shape::line_string(vec![(-1., 0.), (1., 0.), (2., 3.)]),
            Shape::multi_line_string(vec![
                vec![(-1., 0.), (1., 0.)],
                vec![(100., 101.), (102., 103.)],
            ]),
            Shape::polygon(vec![
                vec![(-2., -2.), (2., -2.), (2., 2.), (-2., 2.), (-2., -2.)],
                vec![(-1., -1.), (-1., 1.), (1., 1.), (1., -1.), (-1., -1.)],
            ]),
            Shape::multi_polygon(vec![
                vec![vec![(-1., 0.), (1., 0.), (2., 3.), (0., 3.), (-1., 0.)]],
                vec![vec![(4., 4.), (5., 4.), (5., 5.), (4., 5.), (4., 4.)]],
            ]),
            Shape::circle((0.5, 0.5), "250km"),
            Shape::envelope((-2., 2.), (2., -2.)),
        ]
    }

    #[test]
    fn intersects_is_symmetric() {
        let shapes = samples();
        for a in &shapes {
            for b in &shapes {
                assert_eq!(
                    a.intersects(b).unwrap(),
                    b.intersects(a).unwrap(),
                    "{} vs {}",
                    a.kind(),
                    b.kind()
                );
            }
        }
    }

    #[test]
    fn contains_is_reflexive() {
        for shape in samples() {
            assert_eq!(
                shape.contains(&shape).unwrap(),
                true,
                "{} should contain itself",
                shape.kind()
            );
        }
    }

    #[test]
    fn winding_direction_changes_the_answer() {
        let origin = Shape::point(0., 0.);
        let ccw = Shape::polygon(vec![vec![
            (-1., -1.),
            (1., -1.),
            (1., 1.),
            (-1., 1.),
            (-1., -1.),
        ]]);
        let cw = Shape::polygon(vec![vec![
            (-1., -1.),
            (-1., 1.),
            (1., 1.),
            (1., -1.),
            (-1., -1.),
        ]]);
        assert_eq!(ccw.intersects(&origin).unwrap(), true);
        assert_eq!(cw.intersects(&origin).unwrap(), false);
    }

    #[test]
    fn union_of_members_contains_a_spanning_shape() {
        let pair = Shape::multi_polygon(vec![
            vec![vec![(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)]],
            vec![vec![(1., 0.), (2., 0.), (2., 1.), (1., 1.), (1., 0.)]],
        ]);
        let spanning = Shape::envelope((0.25, 0.25), (1.75, 0.75));
        assert_eq!(pair.contains(&spanning).unwrap(), true);
        let single = Shape::multi_polygon(vec![vec![vec![
            (0., 0.),
            (1., 0.),
            (1., 1.),
            (0., 1.),
            (0., 0.),
        ]]]);
        assert_eq!(single.contains(&spanning).unwrap(), false);
    }

    #[test]
    fn malformed_ring_is_a_geometry_error() {
        let degenerate = Shape::polygon(vec![vec![(0., 0.), (1., 1.)]]);
        assert!(matches!(
            degenerate.intersects(&Shape::point(0., 0.)),
            Err(Error::Geometry(_))
        ));
    }

    #[test]
    fn degenerate_line_is_a_geometry_error() {
        let stump = Shape::line_string(vec![(1., 1.), (1., 1.)]);
        assert!(matches!(
            stump.intersects(&Shape::point(1., 1.)),
            Err(Error::Geometry(_))
        ));
    }

    #[test]
    fn unparsable_radius_is_an_invalid_distance_error() {
        let vague = Shape::circle((0., 0.), "about-a-mile");
        assert!(matches!(
            vague.intersects(&Shape::point(0., 0.)),
            Err(Error::InvalidDistance(_))
        ));
        let triangle = Shape::polygon(vec![vec![(0., 0.), (1., 0.), (1., 1.), (0., 0.)]]);
        assert!(matches!(
            triangle.contains(&vague),
            Err(Error::InvalidDistance(_))
        ));
    }

    #[test]
    fn line_cannot_contain_an_area() {
        let line = Shape::line_string(vec![(0., 0.), (1., 0.)]);
        let triangle = Shape::polygon(vec![vec![(0., 0.), (1., 0.), (1., 1.), (0., 0.)]]);
        assert!(matches!(
            line.contains(&triangle),
            Err(Error::UnsupportedPredicate { .. })
        ));
    }

    #[test]
    fn point_cannot_contain_an_area() {
        let point = Shape::point(0., 0.);
        let triangle = Shape::polygon(vec![vec![(0., 0.), (1., 0.), (1., 1.), (0., 0.)]]);
        assert_eq!(point.contains(&triangle).unwrap(), false);
    }
}
