//! derivation of per-trip geometry: traveled distance via the projected
//! shape polyline with a stop-to-stop fallback, and the loop test.

use std::collections::HashMap;

use crate::model::{Shape, Stop, Trip};
use crate::projection::{projection_ops, FeedProjector, PlanarPoint};
use crate::report::{StatsReport, Warning};
use crate::trip::distance_policy::TripDistancePolicy;

/// first and last stop closer than this are considered the same place,
/// making the trip a loop.
const LOOP_THRESHOLD_METERS: f64 = 400.0;

/// projected length of a shape polyline in meters, or None when fewer than
/// two of its points are usable. under `HintsPreferred`, cumulative
/// dist_traveled hints covering both endpoints short-circuit projection.
/// unusable points are skipped and reported, not fatal.
pub fn shape_length(
    shape: &Shape,
    projector: &FeedProjector,
    policy: &TripDistancePolicy,
    report: &mut StatsReport,
) -> Option<uom::si::f64::Length> {
    if matches!(policy, TripDistancePolicy::HintsPreferred) {
        if let Some(length) = length_from_hints(shape) {
            return Some(length);
        }
    }
    let mut points: Vec<PlanarPoint> = Vec::with_capacity(shape.points.len());
    for shape_point in shape.points.iter() {
        match projector.project(&shape_point.point()) {
            Ok(planar) => points.push(planar),
            Err(_) => report.push(Warning::InvalidCoordinate {
                location: format!("shape '{}' point {}", shape.shape_id, shape_point.sequence),
                lon: shape_point.lon,
                lat: shape_point.lat,
            }),
        }
    }
    if points.len() < 2 {
        return None;
    }
    Some(projection_ops::planar_length(&points))
}

fn length_from_hints(shape: &Shape) -> Option<uom::si::f64::Length> {
    let first = shape.points.first()?.dist_traveled?;
    let last = shape.points.last()?.dist_traveled?;
    let meters = last - first;
    if !meters.is_finite() || meters < 0.0 {
        return None;
    }
    Some(uom::si::f64::Length::new::<uom::si::length::meter>(meters))
}

/// cumulative straight-line distance between the trip's stops in visit
/// order, or None when fewer than two stop locations are usable. stops
/// absent from the stops table are reported; stops whose coordinates were
/// rejected during projection have been reported already and are skipped.
pub fn stop_path_length(
    trip: &Trip,
    stops: &HashMap<&str, &Stop>,
    planar_stops: &HashMap<String, PlanarPoint>,
    report: &mut StatsReport,
) -> Option<uom::si::f64::Length> {
    for stop_time in trip.stop_times.iter() {
        let known = planar_stops.contains_key(&stop_time.stop_id)
            || stops.contains_key(stop_time.stop_id.as_str());
        if !known {
            report.push(Warning::UnknownStop {
                trip_id: trip.trip_id.clone(),
                stop_id: stop_time.stop_id.clone(),
            });
        }
    }
    let points = usable_stop_points(trip, planar_stops);
    if points.len() < 2 {
        return None;
    }
    Some(projection_ops::planar_length(&points))
}

/// a trip's traveled distance in meters. the shape polyline wins when it is
/// usable; otherwise stop-to-stop distance approximates the path; a trip
/// with fewer than two usable points in either source contributes zero
/// distance and a `DegenerateTripGeometry` warning.
pub fn trip_distance(
    trip: &Trip,
    shape_lengths: &HashMap<String, Option<uom::si::f64::Length>>,
    stops: &HashMap<&str, &Stop>,
    planar_stops: &HashMap<String, PlanarPoint>,
    report: &mut StatsReport,
) -> uom::si::f64::Length {
    if let Some(shape_id) = &trip.shape_id {
        match shape_lengths.get(shape_id) {
            Some(Some(length)) => return *length,
            // known shape without usable geometry: already reported once,
            // fall through to the stop path
            Some(None) => {}
            None => report.push(Warning::UnknownShape {
                trip_id: trip.trip_id.clone(),
                shape_id: shape_id.clone(),
            }),
        }
    }
    match stop_path_length(trip, stops, planar_stops, report) {
        Some(length) => length,
        None => {
            report.push(Warning::DegenerateTripGeometry {
                trip_id: trip.trip_id.clone(),
            });
            uom::si::f64::Length::new::<uom::si::length::meter>(0.0)
        }
    }
}

/// whether the trip returns to (the vicinity of) its first stop.
pub fn is_loop(trip: &Trip, planar_stops: &HashMap<String, PlanarPoint>) -> bool {
    let points = usable_stop_points(trip, planar_stops);
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => {
            first.distance(last) < LOOP_THRESHOLD_METERS
        }
        _ => false,
    }
}

/// planar locations of the trip's stops in visit order, skipping stops
/// without a usable projected coordinate.
fn usable_stop_points(
    trip: &Trip,
    planar_stops: &HashMap<String, PlanarPoint>,
) -> Vec<PlanarPoint> {
    trip.stop_times
        .iter()
        .filter_map(|stop_time| planar_stops.get(&stop_time.stop_id).copied())
        .collect()
}
