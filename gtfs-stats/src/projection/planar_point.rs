use geo::Coord;
use serde::{Deserialize, Serialize};

/// a position in the feed-local planar coordinate system, in meters east (x)
/// and north (y) of the projection origin.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> PlanarPoint {
        PlanarPoint { x, y }
    }

    /// straight-line distance to another planar point, in meters.
    pub fn distance(&self, other: &PlanarPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<PlanarPoint> for Coord<f64> {
    fn from(point: PlanarPoint) -> Coord<f64> {
        Coord {
            x: point.x,
            y: point.y,
        }
    }
}
