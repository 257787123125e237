//! Reading and writing shapes as GeoJSON-like documents.
//!
//! The six standard GeoJSON geometries are supported alongside the
//! `circle` and `envelope` extensions used by search queries. Type tags are
//! matched case-tolerantly (`"Point"` or `"point"`). Decoding is purely
//! structural: coordinate counts that only matter geometrically (ring
//! length, closedness) are reported by the first predicate that touches the
//! shape, not here.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::Shape;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    #[serde(rename = "Point", alias = "point")]
    Point { coordinates: (f64, f64) },
    #[serde(rename = "MultiPoint", alias = "multipoint")]
    MultiPoint { coordinates: Vec<(f64, f64)> },
    #[serde(rename = "LineString", alias = "linestring")]
    LineString { coordinates: Vec<(f64, f64)> },
    #[serde(rename = "MultiLineString", alias = "multilinestring")]
    MultiLineString { coordinates: Vec<Vec<(f64, f64)>> },
    #[serde(rename = "Polygon", alias = "polygon")]
    Polygon { coordinates: Vec<Vec<(f64, f64)>> },
    #[serde(rename = "MultiPolygon", alias = "multipolygon")]
    MultiPolygon {
        coordinates: Vec<Vec<Vec<(f64, f64)>>>,
    },
    #[serde(rename = "Circle", alias = "circle")]
    Circle {
        coordinates: (f64, f64),
        radius: String,
    },
    #[serde(rename = "Envelope", alias = "envelope")]
    Envelope { coordinates: Vec<(f64, f64)> },
}

impl Geometry {
    fn into_shape(self) -> Result<Shape> {
        match self {
            Geometry::Point { coordinates } => Ok(Shape::point(coordinates.0, coordinates.1)),
            Geometry::MultiPoint { coordinates } => Ok(Shape::multi_point(coordinates)),
            Geometry::LineString { coordinates } => Ok(Shape::line_string(coordinates)),
            Geometry::MultiLineString { coordinates } => {
                Ok(Shape::multi_line_string(coordinates))
            }
            Geometry::Polygon { coordinates } => Ok(Shape::polygon(coordinates)),
            Geometry::MultiPolygon { coordinates } => Ok(Shape::multi_polygon(coordinates)),
            Geometry::Circle {
                coordinates,
                radius,
            } => Ok(Shape::circle(coordinates, &radius)),
            Geometry::Envelope { coordinates } => {
                if coordinates.len() != 2 {
                    return Err(Error::Geometry(format!(
                        "envelope wants exactly 2 corner coordinates, got {}",
                        coordinates.len()
                    )));
                }
                Ok(Shape::envelope(coordinates[0], coordinates[1]))
            }
        }
    }
}

impl From<&Shape> for Geometry {
    fn from(shape: &Shape) -> Geometry {
        match shape {
            Shape::Point(p) => Geometry::Point {
                coordinates: (p.x(), p.y()),
            },
            Shape::MultiPoint(points) => Geometry::MultiPoint {
                coordinates: points.0.iter().map(|p| (p.x(), p.y())).collect(),
            },
            Shape::LineString(line) => Geometry::LineString {
                coordinates: line_coordinates(line),
            },
            Shape::MultiLineString(lines) => Geometry::MultiLineString {
                coordinates: lines.0.iter().map(line_coordinates).collect(),
            },
            Shape::Polygon(polygon) => Geometry::Polygon {
                coordinates: polygon_coordinates(polygon),
            },
            Shape::MultiPolygon(polygons) => Geometry::MultiPolygon {
                coordinates: polygons.0.iter().map(polygon_coordinates).collect(),
            },
            Shape::Circle(circle) => Geometry::Circle {
                coordinates: (circle.center().x(), circle.center().y()),
                radius: circle.radius().to_string(),
            },
            Shape::Envelope(envelope) => Geometry::Envelope {
                coordinates: vec![
                    (envelope.min().x, envelope.min().y),
                    (envelope.max().x, envelope.max().y),
                ],
            },
        }
    }
}

fn line_coordinates(line: &geo_types::LineString<f64>) -> Vec<(f64, f64)> {
    line.0.iter().map(|c| (c.x, c.y)).collect()
}

fn polygon_coordinates(polygon: &geo_types::Polygon<f64>) -> Vec<Vec<(f64, f64)>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors().iter())
        .map(line_coordinates)
        .collect()
}

impl Shape {
    /// Decode a shape from a GeoJSON-like document.
    pub fn from_geojson(document: &str) -> Result<Shape> {
        let geometry: Geometry = serde_json::from_str(document)?;
        geometry.into_shape()
    }

    /// Encode the shape as a GeoJSON-like document.
    pub fn to_geojson(&self) -> Result<String> {
        Ok(serde_json::to_string(&Geometry::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standard_geometries() {
        let point = Shape::from_geojson(r#"{"type":"Point","coordinates":[1.5,2.5]}"#).unwrap();
        assert_eq!(point, Shape::point(1.5, 2.5));

        let line = Shape::from_geojson(
            r#"{"type":"LineString","coordinates":[[-1,0],[1,0],[2,3]]}"#,
        )
        .unwrap();
        assert_eq!(line, Shape::line_string(vec![(-1., 0.), (1., 0.), (2., 3.)]));

        let polygon = Shape::from_geojson(
            r#"{"type":"Polygon","coordinates":[[[-1,-1],[1,-1],[1,1],[-1,1],[-1,-1]]]}"#,
        )
        .unwrap();
        assert_eq!(
            polygon,
            Shape::polygon(vec![vec![(-1., -1.), (1., -1.), (1., 1.), (-1., 1.), (-1., -1.)]])
        );
    }

    #[test]
    fn type_tags_are_case_tolerant() {
        let upper = Shape::from_geojson(r#"{"type":"MultiPoint","coordinates":[[1,2]]}"#).unwrap();
        let lower = Shape::from_geojson(r#"{"type":"multipoint","coordinates":[[1,2]]}"#).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn decodes_query_extensions() {
        let circle =
            Shape::from_geojson(r#"{"type":"circle","coordinates":[0,0],"radius":"100km"}"#)
                .unwrap();
        assert_eq!(circle, Shape::circle((0., 0.), "100km"));

        let envelope =
            Shape::from_geojson(r#"{"type":"envelope","coordinates":[[-2,2],[2,-2]]}"#).unwrap();
        assert_eq!(envelope, Shape::envelope((-2., 2.), (2., -2.)));
    }

    #[test]
    fn envelope_needs_two_corners() {
        let lopsided = Shape::from_geojson(r#"{"type":"envelope","coordinates":[[-2,2]]}"#);
        assert!(matches!(lopsided, Err(Error::Geometry(_))));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            Shape::from_geojson("not even json"),
            Err(Error::Decode(_))
        ));
        assert!(matches!(
            Shape::from_geojson(r#"{"type":"Moebius","coordinates":[]}"#),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn shapes_survive_a_round_trip() {
        let shapes = vec![
            Shape::point(1., 2.),
            Shape::multi_point(vec![(1., 2.), (3., 4.)]),
            Shape::line_string(vec![(-1., 0.), (1., 0.)]),
            Shape::multi_line_string(vec![vec![(-1., 0.), (1., 0.)], vec![(0., 1.), (1., 1.)]]),
            Shape::polygon(vec![
                vec![(-2., -2.), (2., -2.), (2., 2.), (-2., 2.), (-2., -2.)],
                vec![(-1., -1.), (-1., 1.), (1., 1.), (1., -1.), (-1., -1.)],
            ]),
            Shape::circle((0.5, 0.5), "25km"),
            Shape::envelope((-2., 2.), (2., -2.)),
        ];
        for shape in shapes {
            let encoded = shape.to_geojson().unwrap();
            assert_eq!(Shape::from_geojson(&encoded).unwrap(), shape);
        }
    }
}
