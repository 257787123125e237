use geo::algorithm::haversine_destination::HaversineDestination;
use geo::algorithm::haversine_distance::HaversineDistance;
use geo_types::{Coordinate, Point};

use super::coords::nearest_on_segment;
use super::envelope::Envelope;
use super::error::{Error, Result};

/// Conversion factors from the supported unit suffixes to meters. Longer
/// suffixes come first so that `"mm"` is not read as a meter literal.
const UNITS: [(&str, f64); 9] = [
    ("mm", 0.001),
    ("cm", 0.01),
    ("km", 1000.0),
    ("mi", 1609.344),
    ("yd", 0.9144),
    ("ft", 0.3048),
    ("in", 0.0254),
    ("nm", 1852.0),
    ("m", 1.0),
];

/// Parse a distance literal such as `"100km"` or `"3.5mi"` into meters.
///
/// The literal is a decimal magnitude directly followed by a unit suffix,
/// without whitespace. A bare number is taken to be meters already.
pub fn parse_distance(token: &str) -> Result<f64> {
    let (magnitude, factor) = UNITS
        .iter()
        .find_map(|(suffix, factor)| token.strip_suffix(suffix).map(|rest| (rest, *factor)))
        .unwrap_or((token, 1.0));
    let value: f64 = magnitude
        .parse()
        .map_err(|_| Error::InvalidDistance(token.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidDistance(token.to_string()));
    }
    Ok(value * factor)
}

/// Haversine distance between two coordinates in meters.
pub(crate) fn great_circle_distance(a: Coordinate<f64>, b: Coordinate<f64>) -> f64 {
    Point(a).haversine_distance(&Point(b))
}

/// A geodesic circle: a center and a great-circle radius such as `"25km"`.
///
/// The radius literal is kept verbatim and parsed whenever a predicate
/// needs it, so an unparsable radius surfaces as an evaluation-time error
/// rather than a construction failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point<f64>,
    radius: String,
}

impl Circle {
    pub fn new(center: Point<f64>, radius: impl Into<String>) -> Self {
        Circle {
            center,
            radius: radius.into(),
        }
    }

    pub fn center(&self) -> Point<f64> {
        self.center
    }

    pub fn radius(&self) -> &str {
        &self.radius
    }

    /// The radius in meters.
    pub fn radius_meters(&self) -> Result<f64> {
        parse_distance(&self.radius)
    }

    /// Great-circle distance from the center to `c`, in meters.
    pub(crate) fn distance_to(&self, c: Coordinate<f64>) -> f64 {
        great_circle_distance(self.center.0, c)
    }

    /// Whether `c` lies within the radius; the rim counts as inside.
    pub(crate) fn contains_coordinate(&self, c: Coordinate<f64>) -> Result<bool> {
        Ok(self.distance_to(c) <= self.radius_meters()?)
    }

    /// Great-circle distance from the center to the segment, measured at
    /// the planar-nearest point of the segment. Edges that bow geodesically
    /// away from their planar-nearest point can be missed; that trade-off
    /// is part of the contract.
    pub(crate) fn distance_to_segment(&self, a: Coordinate<f64>, b: Coordinate<f64>) -> f64 {
        self.distance_to(nearest_on_segment(self.center.0, a, b))
    }

    /// Smallest axis-aligned box around the circle, found by walking the
    /// radius due north, east, south and west from the center. Radii longer
    /// than the antipodal distance wrap the sphere and give degenerate boxes.
    pub(crate) fn bounding_box(&self) -> Result<Envelope> {
        let radius = self.radius_meters()?;
        let north = self.center.haversine_destination(0.0, radius);
        let east = self.center.haversine_destination(90.0, radius);
        let south = self.center.haversine_destination(180.0, radius);
        let west = self.center.haversine_destination(270.0, radius);
        Ok(Envelope::new(
            Coordinate {
                x: west.lng(),
                y: south.lat(),
            },
            Coordinate {
                x: east.lng(),
                y: north.lat(),
            },
        ))
    }
}
