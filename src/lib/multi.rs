use geo_types::{Coordinate, LineString, Polygon};

use super::coords;
use super::error::Result;
use super::Shape;

/// Logical OR over members, stopping at the first hit. Errors bubble up.
pub(crate) fn any_member<T>(
    members: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(T) -> Result<bool>,
) -> Result<bool> {
    for member in members {
        if predicate(member)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Logical AND over members, stopping at the first miss. Errors bubble up.
pub(crate) fn all_members<T>(
    members: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(T) -> Result<bool>,
) -> Result<bool> {
    for member in members {
        if !predicate(member)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Sample coordinates standing in for `shape` in union-coverage tests:
/// vertices plus edge midpoints for paths and rings, the corner ring for an
/// envelope, the bounding-box ring for a circle.
pub(crate) fn coverage_samples(shape: &Shape) -> Result<Vec<Coordinate<f64>>> {
    match shape {
        Shape::Point(p) => Ok(vec![p.0]),
        Shape::MultiPoint(mp) => Ok(mp.0.iter().map(|p| p.0).collect()),
        Shape::LineString(line) => {
            coords::validate_line(line)?;
            Ok(line_samples(line))
        }
        Shape::MultiLineString(lines) => {
            let mut samples = Vec::new();
            for line in &lines.0 {
                coords::validate_line(line)?;
                samples.extend(line_samples(line));
            }
            Ok(samples)
        }
        Shape::Polygon(polygon) => {
            coords::validate_polygon(polygon)?;
            Ok(polygon_samples(polygon))
        }
        Shape::MultiPolygon(polygons) => {
            let mut samples = Vec::new();
            for polygon in &polygons.0 {
                coords::validate_polygon(polygon)?;
                samples.extend(polygon_samples(polygon));
            }
            Ok(samples)
        }
        Shape::Circle(circle) => Ok(line_samples(&circle.bounding_box()?.to_ring())),
        Shape::Envelope(envelope) => Ok(line_samples(&envelope.to_ring())),
    }
}

/// Vertices of the path plus the midpoint of every segment.
pub(crate) fn line_samples(line: &LineString<f64>) -> Vec<Coordinate<f64>> {
    let mut samples = line.0.clone();
    samples.extend(coords::edges(line).map(|(a, b)| Coordinate {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }));
    samples
}

pub(crate) fn polygon_samples(polygon: &Polygon<f64>) -> Vec<Coordinate<f64>> {
    let mut samples = line_samples(polygon.exterior());
    for hole in polygon.interiors() {
        samples.extend(line_samples(hole));
    }
    samples
}

/// Every sample must fall inside some member; different samples may be
/// covered by different members, which is what lets a shape span the seam
/// between two adjacent members of a multi-polygon.
pub(crate) fn union_covers(members: &[Polygon<f64>], samples: &[Coordinate<f64>]) -> bool {
    samples
        .iter()
        .all(|&c| members.iter().any(|member| coords::polygon_contains(c, member)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn square(min: (f64, f64), max: (f64, f64)) -> Polygon<f64> {
        Polygon::new(
            vec![
                (min.0, min.1),
                (max.0, min.1),
                (max.0, max.1),
                (min.0, max.1),
                (min.0, min.1),
            ]
            .into(),
            vec![],
        )
    }

    #[test]
    fn any_and_all_short_circuit() {
        assert_eq!(any_member(vec![1, 2, 3], |n| Ok(n == 2)).unwrap(), true);
        assert_eq!(any_member(vec![1, 2, 3], |n| Ok(n == 9)).unwrap(), false);
        assert_eq!(all_members(vec![1, 2, 3], |n| Ok(n < 4)).unwrap(), true);
        assert_eq!(all_members(vec![1, 2, 3], |n| Ok(n < 3)).unwrap(), false);
        assert_eq!(any_member(Vec::<i32>::new(), |_| Ok(true)).unwrap(), false);
        assert_eq!(all_members(Vec::<i32>::new(), |_| Ok(false)).unwrap(), true);
    }

    #[test]
    fn combinators_propagate_errors() {
        let failing = |_: i32| -> Result<bool> { Err(Error::Geometry("boom".to_string())) };
        assert!(any_member(vec![1], failing).is_err());
        assert!(all_members(vec![1], failing).is_err());
    }

    #[test]
    fn union_spanning_two_members() {
        let members = vec![square((0., 0.), (1., 1.)), square((1., 0.), (2., 1.))];
        let spanning = coverage_samples(&Shape::envelope((0.25, 0.25), (1.75, 0.75))).unwrap();
        assert_eq!(union_covers(&members, &spanning), true);
        // neither member covers the box on its own
        assert_eq!(union_covers(&members[..1], &spanning), false);
        assert_eq!(union_covers(&members[1..], &spanning), false);
        let poking_out = coverage_samples(&Shape::envelope((0.25, 0.25), (2.75, 0.75))).unwrap();
        assert_eq!(union_covers(&members, &poking_out), false);
    }

    #[test]
    fn line_samples_include_midpoints() {
        let line: LineString<f64> = vec![(0., 0.), (2., 0.)].into();
        let samples = line_samples(&line);
        assert!(samples.contains(&Coordinate { x: 1., y: 0. }));
        assert_eq!(samples.len(), 3);
    }
}
