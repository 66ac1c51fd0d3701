//! shared aggregation arithmetic: consecutive-gap headways, the concurrent
//! trip sweep, and mean helpers that keep "no data" distinct from zero.

use itertools::Itertools;

use crate::time::ServiceTime;

/// consecutive gaps in seconds between ascending service times. the input
/// must already be sorted; fewer than two times yield no gaps.
pub fn consecutive_gaps(times: &[ServiceTime]) -> Vec<i64> {
    times
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.seconds_until(b))
        .collect()
}

/// maximum number of simultaneously running spans, from a +1/-1 sweep over
/// span endpoints. spans are half-open: a span ending exactly when another
/// starts does not overlap it.
pub fn peak_concurrency(spans: &[(ServiceTime, ServiceTime)]) -> usize {
    let mut events: Vec<(ServiceTime, i32)> = Vec::with_capacity(spans.len() * 2);
    for (start, end) in spans.iter() {
        events.push((*start, 1));
        events.push((*end, -1));
    }
    // ends sort before starts at equal times
    events.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
    let mut running: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in events {
        running += delta;
        peak = peak.max(running);
    }
    peak.max(0) as usize
}

/// arithmetic mean, or None for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// mean of gap seconds as a typed duration, or None without gaps.
pub fn mean_gap(gaps: &[i64]) -> Option<uom::si::f64::Time> {
    let values: Vec<f64> = gaps.iter().map(|g| *g as f64).collect();
    mean(&values).map(seconds)
}

pub fn seconds(value: f64) -> uom::si::f64::Time {
    uom::si::f64::Time::new::<uom::si::time::second>(value)
}

pub fn meters(value: f64) -> uom::si::f64::Length {
    uom::si::f64::Length::new::<uom::si::length::meter>(value)
}
