mod planar_point;
mod projection_error;
pub mod projection_ops;
mod projector;

pub use planar_point::PlanarPoint;
pub use projection_error::ProjectionError;
pub use projector::FeedProjector;
