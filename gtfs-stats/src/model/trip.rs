use serde::{Deserialize, Serialize};

/// one timed visit of a trip at a stop. arrival and departure are kept as
/// raw GTFS time strings (HH:MM:SS, hours may exceed 23); parsing happens
/// during statistics computation so that malformed values can be reported
/// with their original text. either time may be absent, which is legal for
/// intermediate stops in GTFS.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    pub stop_id: String,
    pub stop_sequence: u32,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}

impl StopTime {
    pub fn new(
        stop_id: &str,
        stop_sequence: u32,
        arrival_time: Option<&str>,
        departure_time: Option<&str>,
    ) -> StopTime {
        StopTime {
            stop_id: stop_id.to_string(),
            stop_sequence,
            arrival_time: arrival_time.map(String::from),
            departure_time: departure_time.map(String::from),
        }
    }
}

/// a scheduled vehicle run over an ordered sequence of stop visits. the
/// service identifier links the trip to calendar rows that decide which
/// dates it operates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub trip_id: String,
    pub route_id: String,
    pub service_id: String,
    pub shape_id: Option<String>,
    /// must be ordered by strictly increasing stop_sequence
    pub stop_times: Vec<StopTime>,
}

impl Trip {
    pub fn new(
        trip_id: &str,
        route_id: &str,
        service_id: &str,
        shape_id: Option<&str>,
        stop_times: Vec<StopTime>,
    ) -> Trip {
        Trip {
            trip_id: trip_id.to_string(),
            route_id: route_id.to_string(),
            service_id: service_id.to_string(),
            shape_id: shape_id.map(String::from),
            stop_times,
        }
    }
}
