//! adapter from a `gtfs_structures::Gtfs` archive into the statistics
//! tables. only enabled with the `gtfs` feature; the core never performs
//! file input itself.

use gtfs_structures::Gtfs;

use crate::model::{
    CalendarException, CalendarPattern, ExceptionType, Feed, Route, RouteMode, Shape, ShapePoint,
    Stop, StopTime, Trip,
};
use crate::time::ServiceTime;

/// converts a parsed GTFS archive into the in-memory statistics tables.
/// rows are sorted by identifier so the resulting feed is deterministic
/// regardless of hash-map iteration order. stops without coordinates are
/// dropped here with a log warning; trips referencing them surface as
/// data-quality warnings during computation.
pub fn feed_from_gtfs(gtfs: &Gtfs) -> Feed {
    let mut stops: Vec<Stop> = gtfs
        .stops
        .iter()
        .filter_map(|(stop_id, stop)| match (stop.longitude, stop.latitude) {
            (Some(lon), Some(lat)) => Some(Stop {
                stop_id: stop_id.clone(),
                name: stop.name.clone(),
                lon,
                lat,
            }),
            _ => {
                log::warn!("stop '{}' has no coordinates and was dropped", stop_id);
                None
            }
        })
        .collect();
    stops.sort_by(|a, b| a.stop_id.cmp(&b.stop_id));

    let mut routes: Vec<Route> = gtfs
        .routes
        .iter()
        .map(|(route_id, route)| Route {
            route_id: route_id.clone(),
            short_name: route.short_name.clone(),
            long_name: route.long_name.clone(),
            mode: route_mode(&route.route_type),
        })
        .collect();
    routes.sort_by(|a, b| a.route_id.cmp(&b.route_id));

    let mut trips: Vec<Trip> = gtfs
        .trips
        .iter()
        .map(|(trip_id, trip)| {
            let mut stop_times: Vec<StopTime> = trip
                .stop_times
                .iter()
                .map(|st| StopTime {
                    stop_id: st.stop.id.clone(),
                    stop_sequence: st.stop_sequence,
                    arrival_time: st.arrival_time.map(time_text),
                    departure_time: st.departure_time.map(time_text),
                })
                .collect();
            stop_times.sort_by_key(|st| st.stop_sequence);
            Trip {
                trip_id: trip_id.clone(),
                route_id: trip.route_id.clone(),
                service_id: trip.service_id.clone(),
                shape_id: trip.shape_id.clone(),
                stop_times,
            }
        })
        .collect();
    trips.sort_by(|a, b| a.trip_id.cmp(&b.trip_id));

    let mut shapes: Vec<Shape> = gtfs
        .shapes
        .iter()
        .map(|(shape_id, points)| {
            let mut points: Vec<ShapePoint> = points
                .iter()
                .map(|p| ShapePoint {
                    lon: p.longitude,
                    lat: p.latitude,
                    sequence: p.sequence as u32,
                    dist_traveled: p.dist_traveled.map(f64::from),
                })
                .collect();
            points.sort_by_key(|p| p.sequence);
            Shape {
                shape_id: shape_id.clone(),
                points,
            }
        })
        .collect();
    shapes.sort_by(|a, b| a.shape_id.cmp(&b.shape_id));

    let mut calendar: Vec<CalendarPattern> = gtfs
        .calendar
        .iter()
        .map(|(service_id, c)| CalendarPattern {
            service_id: service_id.clone(),
            monday: c.monday,
            tuesday: c.tuesday,
            wednesday: c.wednesday,
            thursday: c.thursday,
            friday: c.friday,
            saturday: c.saturday,
            sunday: c.sunday,
            start_date: c.start_date,
            end_date: c.end_date,
        })
        .collect();
    calendar.sort_by(|a, b| a.service_id.cmp(&b.service_id));

    let mut calendar_dates: Vec<CalendarException> = gtfs
        .calendar_dates
        .iter()
        .flat_map(|(service_id, dates)| {
            dates.iter().map(|cd| CalendarException {
                service_id: service_id.clone(),
                date: cd.date,
                exception_type: match cd.exception_type {
                    gtfs_structures::Exception::Added => ExceptionType::Added,
                    gtfs_structures::Exception::Deleted => ExceptionType::Removed,
                },
            })
        })
        .collect();
    calendar_dates.sort_by(|a, b| (&a.service_id, a.date).cmp(&(&b.service_id, b.date)));

    Feed {
        stops,
        routes,
        trips,
        shapes,
        calendar,
        calendar_dates,
    }
}

fn time_text(seconds: u32) -> String {
    ServiceTime::from_seconds(seconds).to_string()
}

fn route_mode(route_type: &gtfs_structures::RouteType) -> RouteMode {
    use gtfs_structures::RouteType;
    match route_type {
        RouteType::Tramway => RouteMode::Tramway,
        RouteType::Subway => RouteMode::Subway,
        RouteType::Rail => RouteMode::Rail,
        RouteType::Bus => RouteMode::Bus,
        RouteType::Ferry => RouteMode::Ferry,
        RouteType::CableCar => RouteMode::CableCar,
        RouteType::Gondola => RouteMode::Gondola,
        RouteType::Funicular => RouteMode::Funicular,
        RouteType::Coach => RouteMode::Coach,
        RouteType::Air => RouteMode::Air,
        RouteType::Taxi => RouteMode::Taxi,
        RouteType::Other(code) => RouteMode::Other(i32::from(*code)),
    }
}
