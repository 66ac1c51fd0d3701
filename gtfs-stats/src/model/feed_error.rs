#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Feed is empty: it contains no {0}")]
    EmptyFeed(String),
    #[error("Stop times of trip '{trip_id}' are not in strictly increasing stop_sequence order")]
    UnorderedStopTimes { trip_id: String },
    #[error("Points of shape '{shape_id}' are not in strictly increasing sequence order")]
    UnorderedShapePoints { shape_id: String },
}
