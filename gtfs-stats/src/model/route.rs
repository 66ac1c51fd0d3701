use serde::{Deserialize, Serialize};

/// transit mode of a route, following the GTFS route_type vocabulary.
/// extended route type codes are carried through as `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    Tramway,
    Subway,
    Rail,
    Bus,
    Ferry,
    CableCar,
    Gondola,
    Funicular,
    Coach,
    Air,
    Taxi,
    Other(i32),
}

/// a transit route. trips reference their owning route by identifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    pub route_id: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub mode: RouteMode,
}

impl Route {
    pub fn new(route_id: &str, short_name: Option<&str>, mode: RouteMode) -> Route {
        Route {
            route_id: route_id.to_string(),
            short_name: short_name.map(String::from),
            long_name: None,
            mode,
        }
    }
}
