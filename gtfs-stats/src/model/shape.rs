use geo::Point;
use serde::{Deserialize, Serialize};

/// one vertex of a shape polyline. `dist_traveled` is the optional GTFS
/// cumulative distance hint along the shape, in meters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShapePoint {
    pub lon: f64,
    pub lat: f64,
    pub sequence: u32,
    pub dist_traveled: Option<f64>,
}

impl ShapePoint {
    pub fn new(lon: f64, lat: f64, sequence: u32) -> ShapePoint {
        ShapePoint {
            lon,
            lat,
            sequence,
            dist_traveled: None,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// the physical path a trip travels, independent of which stops it serves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Shape {
    pub shape_id: String,
    /// must be ordered by strictly increasing sequence
    pub points: Vec<ShapePoint>,
}

impl Shape {
    pub fn new(shape_id: &str, points: Vec<ShapePoint>) -> Shape {
        Shape {
            shape_id: shape_id.to_string(),
            points,
        }
    }
}
