use geo::Point;
use serde::{Deserialize, Serialize};

/// a transit stop with its geographic location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    pub stop_id: String,
    pub name: Option<String>,
    /// longitude in degrees, expected within [-180, 180]
    pub lon: f64,
    /// latitude in degrees, expected within [-90, 90]
    pub lat: f64,
}

impl Stop {
    pub fn new(stop_id: &str, name: Option<&str>, lon: f64, lat: f64) -> Stop {
        Stop {
            stop_id: stop_id.to_string(),
            name: name.map(String::from),
            lon,
            lat,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
