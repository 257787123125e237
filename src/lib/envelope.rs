use geo_types::{Coordinate, LineString, Polygon};

/// An axis-aligned box between two opposite corners, normalized on
/// construction to its south-west and north-east corner.
///
/// Envelope tests are plain planar interval logic even though the
/// coordinates are geographic degrees; they are the cheapest predicate
/// category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    min: Coordinate<f64>,
    max: Coordinate<f64>,
}

impl Envelope {
    /// Build an envelope from any two opposite corners, in any order.
    pub fn new(a: Coordinate<f64>, b: Coordinate<f64>) -> Self {
        Envelope {
            min: Coordinate {
                x: a.x.min(b.x),
                y: a.y.min(b.y),
            },
            max: Coordinate {
                x: a.x.max(b.x),
                y: a.y.max(b.y),
            },
        }
    }

    pub fn min(&self) -> Coordinate<f64> {
        self.min
    }

    pub fn max(&self) -> Coordinate<f64> {
        self.max
    }

    /// Both edges count as inside.
    pub fn contains_coordinate(&self, c: Coordinate<f64>) -> bool {
        self.min.x <= c.x && c.x <= self.max.x && self.min.y <= c.y && c.y <= self.max.y
    }

    /// Interval overlap on both axes; touching boxes overlap.
    pub fn overlaps(&self, other: &Envelope) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    pub fn contains_envelope(&self, other: &Envelope) -> bool {
        self.min.x <= other.min.x
            && other.max.x <= self.max.x
            && self.min.y <= other.min.y
            && other.max.y <= self.max.y
    }

    /// The envelope boundary as a closed counter-clockwise ring.
    pub(crate) fn to_ring(&self) -> LineString<f64> {
        vec![
            (self.min.x, self.min.y),
            (self.max.x, self.min.y),
            (self.max.x, self.max.y),
            (self.min.x, self.max.y),
            (self.min.x, self.min.y),
        ]
        .into()
    }

    /// The envelope as a hole-free polygon, for the edge-based predicates.
    pub(crate) fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.to_ring(), vec![])
    }
}
