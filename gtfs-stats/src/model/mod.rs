pub mod date_codec;
mod feed;
mod feed_error;
#[cfg(feature = "gtfs")]
pub mod gtfs_load;
mod route;
mod service;
mod shape;
mod stop;
mod trip;

pub use feed::Feed;
pub use feed_error::FeedError;
pub use route::{Route, RouteMode};
pub use service::{CalendarException, CalendarPattern, ExceptionType};
pub use shape::{Shape, ShapePoint};
pub use stop::Stop;
pub use trip::{StopTime, Trip};
