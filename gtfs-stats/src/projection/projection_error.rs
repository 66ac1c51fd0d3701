#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Invalid coordinate (lon {lon}, lat {lat}): longitude must be in [-180, 180] and latitude in [-90, 90]")]
    InvalidCoordinate { lon: f64, lat: f64 },
    #[error("Invalid planar point (x {x}, y {y}): coordinates must be finite and within the projection domain")]
    InvalidPlanarPoint { x: f64, y: f64 },
    #[error("Cannot derive projection parameters: the feed has no stops with usable coordinates")]
    EmptyExtent,
}
