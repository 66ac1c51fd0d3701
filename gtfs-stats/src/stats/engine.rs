use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use geo::Point;
use itertools::Itertools;
use rayon::prelude::*;

use crate::calendar::CalendarResolver;
use crate::model::{Feed, Trip};
use crate::projection::{projection_ops, FeedProjector, PlanarPoint, ProjectionError};
use crate::report::{StatsReport, Warning};
use crate::stats::stats_ops;
use crate::stats::{
    FeedStats, RouteStats, RouteStatsSummary, StatsConfig, StatsError, StatsRequest, StopStats,
    StopStatsSummary,
};
use crate::time::{ServiceTime, TimeField, TimeWindow};
use crate::trip::{trip_ops, TripSpan, TripSummary};

/// arrival and departure of one stop visit, parsed onto the service-day
/// axis. either side is None when the raw field was absent or unparsable.
type VisitTimes = (Option<ServiceTime>, Option<ServiceTime>);

/// the statistics engine: validates a feed once, derives the projection,
/// calendar index, and per-trip geometry/duration cache, then answers
/// route, stop, trip, and feed queries against that state. the feed is
/// never mutated; every query returns a fresh result table together with
/// the report of data-quality findings it produced.
///
/// per-trip distances and durations are computed at construction (in
/// parallel across trips and shapes), so multi-date queries only pay for
/// calendar resolution and aggregation.
pub struct StatsEngine {
    feed: Feed,
    config: StatsConfig,
    projector: FeedProjector,
    resolver: CalendarResolver,
    /// one summary per feed trip, in feed order
    summaries: Vec<TripSummary>,
    /// parsed visit times per trip, parallel to `feed.trips[i].stop_times`
    visit_times: Vec<Vec<VisitTimes>>,
    trips_by_service: HashMap<String, Vec<usize>>,
    /// stop id -> (trip index, stop-time index) of every visit
    visits_by_stop: HashMap<String, Vec<(usize, usize)>>,
    build_report: StatsReport,
}

impl StatsEngine {
    /// validates the feed and builds the engine's derived state. hard
    /// failures here are an invalid feed structure, ambiguous calendar
    /// exceptions, or a feed whose stops give no usable projection origin.
    /// in strict mode, any data-quality finding recorded while building
    /// the per-trip cache aborts construction as well.
    pub fn new(feed: Feed, config: StatsConfig) -> Result<StatsEngine, StatsError> {
        feed.validate()?;
        let mut report = StatsReport::new();

        let usable_points: Vec<Point<f64>> = feed
            .stops
            .iter()
            .filter(|s| {
                s.lon.is_finite()
                    && s.lat.is_finite()
                    && (-180.0..=180.0).contains(&s.lon)
                    && (-90.0..=90.0).contains(&s.lat)
            })
            .map(|s| s.point())
            .collect();
        let origin =
            projection_ops::centroid_of(&usable_points).ok_or(ProjectionError::EmptyExtent)?;
        let projector = FeedProjector::new(origin)?;
        log::debug!(
            "feed projection centered on ({:.5}, {:.5}) from {} stops",
            origin.x(),
            origin.y(),
            usable_points.len()
        );

        let resolver = CalendarResolver::new(&feed.calendar, &feed.calendar_dates)?;

        let mut planar_stops: HashMap<String, PlanarPoint> = HashMap::new();
        for stop in feed.stops.iter() {
            match projector.project(&stop.point()) {
                Ok(planar) => {
                    planar_stops.insert(stop.stop_id.clone(), planar);
                }
                Err(_) => report.push(Warning::InvalidCoordinate {
                    location: format!("stop '{}'", stop.stop_id),
                    lon: stop.lon,
                    lat: stop.lat,
                }),
            }
        }

        let shape_results: Vec<(String, Option<uom::si::f64::Length>, StatsReport)> = feed
            .shapes
            .par_iter()
            .map(|shape| {
                let mut shape_report = StatsReport::new();
                let length = trip_ops::shape_length(
                    shape,
                    &projector,
                    &config.distance_policy,
                    &mut shape_report,
                );
                (shape.shape_id.clone(), length, shape_report)
            })
            .collect();
        let mut shape_lengths: HashMap<String, Option<uom::si::f64::Length>> = HashMap::new();
        for (shape_id, length, shape_report) in shape_results {
            report.merge(shape_report);
            shape_lengths.insert(shape_id, length);
        }

        let stops_by_id = feed.stops_by_id();
        let trip_results: Vec<(TripSummary, Vec<VisitTimes>, StatsReport)> = feed
            .trips
            .par_iter()
            .map(|trip| {
                let mut trip_report = StatsReport::new();
                let times = parse_visit_times(trip, &mut trip_report);
                let span = span_from(&times);
                let distance = trip_ops::trip_distance(
                    trip,
                    &shape_lengths,
                    &stops_by_id,
                    &planar_stops,
                    &mut trip_report,
                );
                let is_loop = trip_ops::is_loop(trip, &planar_stops);
                let summary = TripSummary::build(
                    &trip.trip_id,
                    &trip.route_id,
                    &trip.service_id,
                    trip.stop_times.len(),
                    &span,
                    distance,
                    is_loop,
                    &mut trip_report,
                );
                (summary, times, trip_report)
            })
            .collect();

        let mut summaries: Vec<TripSummary> = Vec::with_capacity(trip_results.len());
        let mut visit_times: Vec<Vec<VisitTimes>> = Vec::with_capacity(trip_results.len());
        for (summary, times, trip_report) in trip_results {
            report.merge(trip_report);
            summaries.push(summary);
            visit_times.push(times);
        }

        let routes_by_id = feed.routes_by_id();
        let mut trips_by_service: HashMap<String, Vec<usize>> = HashMap::new();
        let mut visits_by_stop: HashMap<String, Vec<(usize, usize)>> = HashMap::new();
        for (trip_idx, trip) in feed.trips.iter().enumerate() {
            if !routes_by_id.contains_key(trip.route_id.as_str()) {
                report.push(Warning::UnknownRoute {
                    trip_id: trip.trip_id.clone(),
                    route_id: trip.route_id.clone(),
                });
            }
            trips_by_service
                .entry(trip.service_id.clone())
                .or_default()
                .push(trip_idx);
            for (visit_idx, stop_time) in trip.stop_times.iter().enumerate() {
                visits_by_stop
                    .entry(stop_time.stop_id.clone())
                    .or_default()
                    .push((trip_idx, visit_idx));
            }
        }

        if config.strict {
            if let Some(warning) = report.first_data_error() {
                return Err(StatsError::StrictModeViolation(warning.clone()));
            }
        }

        Ok(StatsEngine {
            feed,
            config,
            projector,
            resolver,
            summaries,
            visit_times,
            trips_by_service,
            visits_by_stop,
            build_report: report,
        })
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// the feed-wide projector derived at construction.
    pub fn projector(&self) -> &FeedProjector {
        &self.projector
    }

    pub fn resolver(&self) -> &CalendarResolver {
        &self.resolver
    }

    /// findings collected while building the per-trip cache. query reports
    /// contain only what the query itself produced.
    pub fn build_report(&self) -> &StatsReport {
        &self.build_report
    }

    /// per-route rows for every requested date, sorted by route then date.
    /// routes in scope but without active trips keep a row with undefined
    /// cells. a request window restricts trips to those starting inside it
    /// and replaces the configured headway window.
    pub fn route_stats(
        &self,
        request: &StatsRequest,
    ) -> Result<(Vec<RouteStats>, StatsReport), StatsError> {
        let dates = request_dates(request)?;
        let routes = self.routes_in_scope(request);
        let per_date: Vec<(NaiveDate, HashSet<String>)> = self
            .resolver
            .active_services_for_dates(&dates)
            .into_iter()
            .collect();

        let mut rows: Vec<RouteStats> = per_date
            .par_iter()
            .flat_map(|(date, services)| {
                let grouped = self.trips_by_route(services);
                routes
                    .iter()
                    .map(|route_id| {
                        let idxs = grouped
                            .get(route_id.as_str())
                            .map_or(&[] as &[usize], Vec::as_slice);
                        self.route_row(route_id, *date, idxs, request.window)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        rows.sort_by(|a, b| a.route_id.cmp(&b.route_id).then(a.date.cmp(&b.date)));
        Ok((rows, StatsReport::new()))
    }

    /// per-route statistics averaged over the requested dates, each served
    /// date weighted equally (mean of daily means).
    pub fn route_stats_summary(
        &self,
        request: &StatsRequest,
    ) -> Result<(Vec<RouteStatsSummary>, StatsReport), StatsError> {
        let (rows, report) = self.route_stats(request)?;
        let num_days = request_dates(request)?.len();

        let mut summaries: Vec<RouteStatsSummary> = Vec::new();
        let by_route = rows.iter().chunk_by(|r| &r.route_id);
        for (route_id, route_rows) in &by_route {
            let served: Vec<&RouteStats> = route_rows.filter(|r| r.has_service()).collect();
            let trips: Vec<f64> = served.iter().map(|r| r.num_trips as f64).collect();
            let distances: Vec<f64> = served
                .iter()
                .filter_map(|r| r.total_distance)
                .map(|d| d.get::<uom::si::length::meter>())
                .collect();
            let durations: Vec<f64> = served
                .iter()
                .filter_map(|r| r.total_duration)
                .map(|d| d.get::<uom::si::time::second>())
                .collect();
            let speeds: Vec<f64> = served
                .iter()
                .filter_map(|r| r.mean_speed)
                .map(|s| s.get::<uom::si::velocity::meter_per_second>())
                .collect();
            summaries.push(RouteStatsSummary {
                route_id: route_id.clone(),
                num_days,
                num_days_with_service: served.len(),
                mean_num_trips: stats_ops::mean(&trips),
                mean_total_distance: stats_ops::mean(&distances).map(stats_ops::meters),
                mean_total_duration: stats_ops::mean(&durations).map(stats_ops::seconds),
                mean_speed: stats_ops::mean(&speeds).map(|mps| {
                    uom::si::f64::Velocity::new::<uom::si::velocity::meter_per_second>(mps)
                }),
            });
        }
        Ok((summaries, report))
    }

    /// per-stop rows for every requested date, sorted by stop then date.
    /// visits are positioned by the request's time field (falling back to
    /// the engine default), window-filtered, then sorted by time with
    /// trip-id tie-breaks before gaps are measured.
    pub fn stop_stats(
        &self,
        request: &StatsRequest,
    ) -> Result<(Vec<StopStats>, StatsReport), StatsError> {
        let dates = request_dates(request)?;
        let stops = self.stops_in_scope(request);
        let time_field = request.time_field.unwrap_or(self.config.time_field);
        let per_date: Vec<(NaiveDate, HashSet<String>)> = self
            .resolver
            .active_services_for_dates(&dates)
            .into_iter()
            .collect();

        let date_results: Vec<(Vec<StopStats>, StatsReport)> = per_date
            .par_iter()
            .map(|(date, services)| {
                let mut date_report = StatsReport::new();
                let active = self.active_trip_set(services);
                let rows = stops
                    .iter()
                    .map(|stop_id| {
                        self.stop_row(
                            stop_id,
                            *date,
                            &active,
                            time_field,
                            request.window,
                            &mut date_report,
                        )
                    })
                    .collect::<Vec<_>>();
                (rows, date_report)
            })
            .collect();

        let mut rows: Vec<StopStats> = Vec::new();
        let mut report = StatsReport::new();
        for (date_rows, date_report) in date_results {
            rows.extend(date_rows);
            report.merge(date_report);
        }
        rows.sort_by(|a, b| a.stop_id.cmp(&b.stop_id).then(a.date.cmp(&b.date)));
        self.check_strict(&report)?;
        Ok((rows, report))
    }

    /// per-stop statistics averaged over the requested dates (mean of
    /// daily means).
    pub fn stop_stats_summary(
        &self,
        request: &StatsRequest,
    ) -> Result<(Vec<StopStatsSummary>, StatsReport), StatsError> {
        let (rows, report) = self.stop_stats(request)?;
        let num_days = request_dates(request)?.len();

        let mut summaries: Vec<StopStatsSummary> = Vec::new();
        let by_stop = rows.iter().chunk_by(|r| &r.stop_id);
        for (stop_id, stop_rows) in &by_stop {
            let served: Vec<&StopStats> = stop_rows.filter(|r| r.has_service()).collect();
            let vehicles: Vec<f64> = served.iter().map(|r| r.num_vehicles as f64).collect();
            let headways: Vec<f64> = served
                .iter()
                .filter_map(|r| r.mean_headway)
                .map(|h| h.get::<uom::si::time::second>())
                .collect();
            summaries.push(StopStatsSummary {
                stop_id: stop_id.clone(),
                num_days,
                num_days_with_service: served.len(),
                mean_num_vehicles: stats_ops::mean(&vehicles),
                mean_headway: stats_ops::mean(&headways).map(stats_ops::seconds),
            });
        }
        Ok((summaries, report))
    }

    /// summaries of the trips active on at least one requested date, in
    /// trip-identifier order. the route filter and window apply; dates do
    /// not multiply rows, since per-trip statistics are date-independent.
    pub fn trip_stats(
        &self,
        request: &StatsRequest,
    ) -> Result<(Vec<TripSummary>, StatsReport), StatsError> {
        let dates = request_dates(request)?;
        let route_filter: Option<HashSet<&str>> = request
            .route_filter
            .as_ref()
            .map(|ids| ids.iter().map(String::as_str).collect());

        let mut active: HashSet<usize> = HashSet::new();
        for services in self.resolver.active_services_for_dates(&dates).values() {
            active.extend(self.active_trip_set(services));
        }
        let mut rows: Vec<TripSummary> = active
            .into_iter()
            .map(|idx| &self.summaries[idx])
            .filter(|s| match &route_filter {
                Some(routes) => routes.contains(s.route_id.as_str()),
                None => true,
            })
            .filter(|s| starts_in_window(s, request.window))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.trip_id.cmp(&b.trip_id));
        Ok((rows, StatsReport::new()))
    }

    /// feed-wide rows for every requested date, sorted by date.
    pub fn feed_stats(
        &self,
        request: &StatsRequest,
    ) -> Result<(Vec<FeedStats>, StatsReport), StatsError> {
        let dates = request_dates(request)?;
        let mut rows: Vec<FeedStats> = Vec::with_capacity(dates.len());
        for (date, services) in self.resolver.active_services_for_dates(&dates) {
            let selected: Vec<usize> = self
                .active_trip_set(&services)
                .into_iter()
                .filter(|idx| starts_in_window(&self.summaries[*idx], request.window))
                .collect();
            if selected.is_empty() {
                rows.push(FeedStats::no_service(date));
                continue;
            }

            let summaries: Vec<&TripSummary> = selected.iter().map(|i| &self.summaries[*i]).collect();
            let routes: HashSet<&str> = summaries.iter().map(|s| s.route_id.as_str()).collect();
            let visited: HashSet<&str> = selected
                .iter()
                .flat_map(|i| self.feed.trips[*i].stop_times.iter())
                .map(|st| st.stop_id.as_str())
                .collect();
            let (total_duration, _) = measured_durations(&summaries);
            rows.push(FeedStats {
                date,
                num_trips: summaries.len(),
                num_routes: routes.len(),
                num_stops: visited.len(),
                total_distance: Some(total_distance(&summaries)),
                total_duration,
                peak_num_trips: peak_of(&summaries),
            });
        }
        Ok((rows, StatsReport::new()))
    }

    /// the requested date with the most active trips, ties resolved toward
    /// the earlier date. None for an empty date list.
    pub fn busiest_date(&self, dates: &[NaiveDate]) -> Option<NaiveDate> {
        let mut best: Option<(NaiveDate, usize)> = None;
        for (date, services) in self.resolver.active_services_for_dates(dates) {
            let count: usize = services
                .iter()
                .filter_map(|s| self.trips_by_service.get(s))
                .map(Vec::len)
                .sum();
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((date, count));
            }
        }
        best.map(|(date, _)| date)
    }

    fn check_strict(&self, report: &StatsReport) -> Result<(), StatsError> {
        if self.config.strict {
            if let Some(warning) = report.first_data_error() {
                return Err(StatsError::StrictModeViolation(warning.clone()));
            }
        }
        Ok(())
    }

    /// route identifiers in query scope, sorted and deduplicated.
    fn routes_in_scope(&self, request: &StatsRequest) -> Vec<String> {
        let mut routes: Vec<String> = match &request.route_filter {
            Some(ids) => ids.clone(),
            None => self.feed.routes.iter().map(|r| r.route_id.clone()).collect(),
        };
        routes.sort();
        routes.dedup();
        routes
    }

    fn stops_in_scope(&self, request: &StatsRequest) -> Vec<String> {
        let mut stops: Vec<String> = match &request.stop_filter {
            Some(ids) => ids.clone(),
            None => self.feed.stops.iter().map(|s| s.stop_id.clone()).collect(),
        };
        stops.sort();
        stops.dedup();
        stops
    }

    fn active_trip_set(&self, services: &HashSet<String>) -> HashSet<usize> {
        services
            .iter()
            .filter_map(|s| self.trips_by_service.get(s))
            .flatten()
            .copied()
            .collect()
    }

    /// active trip indices grouped by route, each group in feed order.
    fn trips_by_route(&self, services: &HashSet<String>) -> HashMap<&str, Vec<usize>> {
        let mut grouped: HashMap<&str, Vec<usize>> = HashMap::new();
        for idxs in services.iter().filter_map(|s| self.trips_by_service.get(s)) {
            for idx in idxs {
                grouped
                    .entry(self.summaries[*idx].route_id.as_str())
                    .or_default()
                    .push(*idx);
            }
        }
        for idxs in grouped.values_mut() {
            idxs.sort();
        }
        grouped
    }

    fn route_row(
        &self,
        route_id: &str,
        date: NaiveDate,
        idxs: &[usize],
        window: Option<TimeWindow>,
    ) -> RouteStats {
        let selected: Vec<&TripSummary> = idxs
            .iter()
            .map(|i| &self.summaries[*i])
            .filter(|s| starts_in_window(s, window))
            .collect();
        if selected.is_empty() {
            return RouteStats::no_service(route_id, date);
        }

        let distance = total_distance(&selected);
        let (total_duration, num_measured) = measured_durations(&selected);
        let matched_distance: uom::si::f64::Length = selected
            .iter()
            .filter(|s| s.duration.is_some())
            .fold(stats_ops::meters(0.0), |acc, s| acc + s.distance);
        let mean_speed = total_duration.and_then(|duration| {
            let seconds = duration.get::<uom::si::time::second>();
            if seconds > 0.0 {
                Some(matched_distance / duration)
            } else {
                None
            }
        });

        let headway_window = window.unwrap_or(self.config.headway_window);
        let mut starts: Vec<ServiceTime> = selected
            .iter()
            .filter_map(|s| s.start_time)
            .filter(|t| headway_window.contains(t))
            .collect();
        starts.sort();
        let gaps = stats_ops::consecutive_gaps(&starts);

        RouteStats {
            route_id: route_id.to_string(),
            date,
            num_trips: selected.len(),
            total_distance: Some(distance),
            total_duration,
            mean_speed,
            mean_trip_distance: Some(distance / selected.len() as f64),
            mean_trip_duration: total_duration.map(|d| d / num_measured as f64),
            start_time: selected.iter().filter_map(|s| s.start_time).min(),
            end_time: selected.iter().filter_map(|s| s.end_time).max(),
            peak_num_trips: peak_of(&selected),
            min_headway: gaps.iter().min().map(|g| stats_ops::seconds(*g as f64)),
            mean_headway: stats_ops::mean_gap(&gaps),
            max_headway: gaps.iter().max().map(|g| stats_ops::seconds(*g as f64)),
        }
    }

    fn stop_row(
        &self,
        stop_id: &str,
        date: NaiveDate,
        active: &HashSet<usize>,
        time_field: TimeField,
        window: Option<TimeWindow>,
        report: &mut StatsReport,
    ) -> StopStats {
        let Some(visits) = self.visits_by_stop.get(stop_id) else {
            return StopStats::no_service(stop_id, date);
        };

        let mut timed: Vec<(ServiceTime, &str, &str)> = Vec::new();
        for (trip_idx, visit_idx) in visits.iter() {
            if !active.contains(trip_idx) {
                continue;
            }
            let trip = &self.feed.trips[*trip_idx];
            let (arrival, departure) = self.visit_times[*trip_idx][*visit_idx];
            let time = match time_field {
                TimeField::Arrival => arrival.or(departure),
                TimeField::Departure => departure.or(arrival),
            };
            let Some(time) = time else {
                let stop_time = &trip.stop_times[*visit_idx];
                if stop_time.arrival_time.is_none() && stop_time.departure_time.is_none() {
                    report.exclude_visit(Warning::MissingTime {
                        trip_id: trip.trip_id.clone(),
                        stop_sequence: stop_time.stop_sequence,
                    });
                } else {
                    // raw text present but unparsable, reported as
                    // MalformedTime when the cache was built
                    report.excluded_visits += 1;
                }
                continue;
            };
            if window.is_some_and(|w| !w.contains(&time)) {
                continue;
            }
            timed.push((time, trip.trip_id.as_str(), trip.route_id.as_str()));
        }
        timed.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(b.1)));

        if timed.is_empty() {
            return StopStats::no_service(stop_id, date);
        }
        let times: Vec<ServiceTime> = timed.iter().map(|(t, _, _)| *t).collect();
        let routes: HashSet<&str> = timed.iter().map(|(_, _, r)| *r).collect();
        let gaps = stats_ops::consecutive_gaps(&times);
        StopStats {
            stop_id: stop_id.to_string(),
            date,
            num_vehicles: timed.len(),
            num_routes: routes.len(),
            start_time: times.first().copied(),
            end_time: times.last().copied(),
            min_headway: gaps.iter().min().map(|g| stats_ops::seconds(*g as f64)),
            mean_headway: stats_ops::mean_gap(&gaps),
            max_headway: gaps.iter().max().map(|g| stats_ops::seconds(*g as f64)),
        }
    }
}

/// requested dates, sorted and deduplicated. a request without dates has
/// nothing to resolve and is rejected.
fn request_dates(request: &StatsRequest) -> Result<Vec<NaiveDate>, StatsError> {
    if request.dates.is_empty() {
        return Err(StatsError::EmptyDateRange);
    }
    let mut dates = request.dates.clone();
    dates.sort();
    dates.dedup();
    Ok(dates)
}

fn starts_in_window(summary: &TripSummary, window: Option<TimeWindow>) -> bool {
    match window {
        None => true,
        Some(w) => summary.start_time.is_some_and(|t| w.contains(&t)),
    }
}

fn total_distance(summaries: &[&TripSummary]) -> uom::si::f64::Length {
    summaries
        .iter()
        .fold(stats_ops::meters(0.0), |acc, s| acc + s.distance)
}

/// sum of durations over trips whose endpoint times are usable, with the
/// count of those trips. None when no trip is measurable.
fn measured_durations(summaries: &[&TripSummary]) -> (Option<uom::si::f64::Time>, usize) {
    let measured: Vec<uom::si::f64::Time> =
        summaries.iter().filter_map(|s| s.duration).collect();
    if measured.is_empty() {
        return (None, 0);
    }
    let total = measured
        .iter()
        .fold(stats_ops::seconds(0.0), |acc, d| acc + *d);
    (Some(total), measured.len())
}

/// peak simultaneously running trips among summaries with both endpoint
/// times in order. None when nothing is measurable.
fn peak_of(summaries: &[&TripSummary]) -> Option<usize> {
    let spans: Vec<(ServiceTime, ServiceTime)> = summaries
        .iter()
        .filter_map(|s| match (s.start_time, s.end_time) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            _ => None,
        })
        .collect();
    if spans.is_empty() {
        return None;
    }
    Some(stats_ops::peak_concurrency(&spans))
}

/// parses both time fields of every visit, warning on unparsable text.
fn parse_visit_times(trip: &Trip, report: &mut StatsReport) -> Vec<VisitTimes> {
    trip.stop_times
        .iter()
        .map(|stop_time| {
            let mut parse = |raw: &Option<String>, field: TimeField| {
                let text = raw.as_ref()?;
                match ServiceTime::parse(text) {
                    Ok(time) => Some(time),
                    Err(_) => {
                        report.push(Warning::MalformedTime {
                            trip_id: trip.trip_id.clone(),
                            stop_sequence: stop_time.stop_sequence,
                            field,
                            value: text.clone(),
                        });
                        None
                    }
                }
            };
            let arrival = parse(&stop_time.arrival_time, TimeField::Arrival);
            let departure = parse(&stop_time.departure_time, TimeField::Departure);
            (arrival, departure)
        })
        .collect()
}

/// the endpoint times of a trip, from its first and last parsed visits.
fn span_from(times: &[VisitTimes]) -> TripSpan {
    match (times.first(), times.last()) {
        (Some(first), Some(last)) => TripSpan {
            first_arrival: first.0,
            first_departure: first.1,
            last_arrival: last.0,
            last_departure: last.1,
        },
        _ => TripSpan::default(),
    }
}
