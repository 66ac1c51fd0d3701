use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::calendar::calendar_error::CalendarError;
use crate::model::{CalendarException, CalendarPattern, ExceptionType};

/// resolves which service identifiers are active on queried dates from the
/// weekly calendar patterns and their single-date exceptions.
///
/// exceptions always override patterns: an `Added` exception activates a
/// service on its date even when no pattern mentions it, and a `Removed`
/// exception deactivates it even when the pattern flags the weekday.
/// duplicate exceptions for one (service, date) pair are rejected at
/// construction, before any query can observe them.
pub struct CalendarResolver {
    patterns: Vec<CalendarPattern>,
    exceptions: HashMap<NaiveDate, Vec<(String, ExceptionType)>>,
}

impl CalendarResolver {
    pub fn new(
        patterns: &[CalendarPattern],
        exceptions: &[CalendarException],
    ) -> Result<CalendarResolver, CalendarError> {
        let mut seen: HashSet<(&str, NaiveDate)> = HashSet::new();
        let mut by_date: HashMap<NaiveDate, Vec<(String, ExceptionType)>> = HashMap::new();
        for exception in exceptions.iter() {
            if !seen.insert((exception.service_id.as_str(), exception.date)) {
                return Err(CalendarError::AmbiguousCalendarException {
                    service_id: exception.service_id.clone(),
                    date: exception.date,
                });
            }
            by_date
                .entry(exception.date)
                .or_default()
                .push((exception.service_id.clone(), exception.exception_type));
        }
        Ok(CalendarResolver {
            patterns: patterns.to_vec(),
            exceptions: by_date,
        })
    }

    /// the set of service identifiers active on a single date.
    pub fn active_services(&self, date: &NaiveDate) -> HashSet<String> {
        let mut active: HashSet<String> = self
            .patterns
            .iter()
            .filter(|p| p.contains(date) && p.runs_on_weekday(date.weekday()))
            .map(|p| p.service_id.clone())
            .collect();
        self.apply_exceptions(date, &mut active);
        active
    }

    /// active service sets for a batch of dates, one entry per distinct
    /// requested date. each pattern's date range is intersected with the
    /// batch once, so patterns outside the queried span are skipped without
    /// being revisited for every date.
    pub fn active_services_for_dates(
        &self,
        dates: &[NaiveDate],
    ) -> BTreeMap<NaiveDate, HashSet<String>> {
        let requested: BTreeSet<NaiveDate> = dates.iter().copied().collect();
        let mut active: BTreeMap<NaiveDate, HashSet<String>> = requested
            .iter()
            .map(|date| (*date, HashSet::new()))
            .collect();
        let (batch_start, batch_end) = match (requested.first(), requested.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return active,
        };

        for pattern in self.patterns.iter() {
            let overlap_start = std::cmp::max(batch_start, pattern.start_date);
            let overlap_end = std::cmp::min(batch_end, pattern.end_date);
            if overlap_end < overlap_start {
                continue;
            }
            for date in requested.range(overlap_start..=overlap_end) {
                if pattern.runs_on_weekday(date.weekday()) {
                    if let Some(services) = active.get_mut(date) {
                        services.insert(pattern.service_id.clone());
                    }
                }
            }
        }

        for (date, services) in active.iter_mut() {
            self.apply_exceptions(date, services);
        }
        active
    }

    fn apply_exceptions(&self, date: &NaiveDate, active: &mut HashSet<String>) {
        if let Some(overrides) = self.exceptions.get(date) {
            for (service_id, exception_type) in overrides.iter() {
                match exception_type {
                    ExceptionType::Added => {
                        active.insert(service_id.clone());
                    }
                    ExceptionType::Removed => {
                        active.remove(service_id);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::CalendarResolver;
    use crate::calendar::{CalendarError, DateSpan};
    use crate::model::{CalendarException, CalendarPattern, ExceptionType};
    use chrono::{Datelike, NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test date")
    }

    fn weekday_pattern(service_id: &str) -> CalendarPattern {
        let mut pattern =
            CalendarPattern::daily(service_id, date(2024, 7, 1), date(2024, 7, 31));
        pattern.saturday = false;
        pattern.sunday = false;
        pattern
    }

    #[test]
    fn test_pattern_activates_matching_weekdays_in_range() {
        let resolver =
            CalendarResolver::new(&[weekday_pattern("wk")], &[]).expect("should build");
        let wednesday = date(2024, 7, 3);
        assert_eq!(wednesday.weekday(), Weekday::Wed);
        assert!(resolver.active_services(&wednesday).contains("wk"));
        // saturday within range, flag unset
        assert!(resolver.active_services(&date(2024, 7, 6)).is_empty());
        // monday outside the date range
        assert!(resolver.active_services(&date(2024, 8, 5)).is_empty());
    }

    #[test]
    fn test_removed_exception_overrides_active_pattern() {
        let exceptions = vec![CalendarException::new(
            "wk",
            date(2024, 7, 3),
            ExceptionType::Removed,
        )];
        let resolver =
            CalendarResolver::new(&[weekday_pattern("wk")], &exceptions).expect("should build");
        assert!(resolver.active_services(&date(2024, 7, 3)).is_empty());
        // the surrounding weekdays are untouched
        assert!(resolver.active_services(&date(2024, 7, 2)).contains("wk"));
        assert!(resolver.active_services(&date(2024, 7, 4)).contains("wk"));
    }

    #[test]
    fn test_added_exception_works_without_any_pattern() {
        let exceptions = vec![CalendarException::new(
            "sun-special",
            date(2024, 7, 4),
            ExceptionType::Added,
        )];
        let resolver = CalendarResolver::new(&[], &exceptions).expect("should build");
        assert!(resolver
            .active_services(&date(2024, 7, 4))
            .contains("sun-special"));
        // inactive on every other date, including the neighbors
        for other in DateSpan::new(date(2024, 7, 1), date(2024, 7, 14)) {
            if other != date(2024, 7, 4) {
                assert!(
                    resolver.active_services(&other).is_empty(),
                    "should be inactive on {}",
                    other
                );
            }
        }
    }

    #[test]
    fn test_duplicate_exceptions_are_ambiguous() {
        let exceptions = vec![
            CalendarException::new("wk", date(2024, 7, 3), ExceptionType::Removed),
            CalendarException::new("wk", date(2024, 7, 3), ExceptionType::Added),
        ];
        let result = CalendarResolver::new(&[weekday_pattern("wk")], &exceptions);
        assert!(matches!(
            result,
            Err(CalendarError::AmbiguousCalendarException { .. })
        ));
    }

    #[test]
    fn test_identical_duplicate_exceptions_are_still_ambiguous() {
        let exceptions = vec![
            CalendarException::new("wk", date(2024, 7, 3), ExceptionType::Removed),
            CalendarException::new("wk", date(2024, 7, 3), ExceptionType::Removed),
        ];
        let result = CalendarResolver::new(&[weekday_pattern("wk")], &exceptions);
        assert!(matches!(
            result,
            Err(CalendarError::AmbiguousCalendarException { .. })
        ));
    }

    #[test]
    fn test_batched_resolution_matches_per_date_resolution() {
        let mut saturdays = CalendarPattern::daily("sat", date(2024, 7, 1), date(2024, 7, 31));
        saturdays.monday = false;
        saturdays.tuesday = false;
        saturdays.wednesday = false;
        saturdays.thursday = false;
        saturdays.friday = false;
        saturdays.sunday = false;
        let patterns = vec![weekday_pattern("wk"), saturdays];
        let exceptions = vec![
            CalendarException::new("wk", date(2024, 7, 3), ExceptionType::Removed),
            CalendarException::new("extra", date(2024, 7, 6), ExceptionType::Added),
        ];
        let resolver = CalendarResolver::new(&patterns, &exceptions).expect("should build");

        let dates: Vec<NaiveDate> = DateSpan::new(date(2024, 7, 1), date(2024, 7, 7)).collect();
        let batched = resolver.active_services_for_dates(&dates);
        assert_eq!(batched.len(), dates.len());
        for d in dates.iter() {
            assert_eq!(
                batched.get(d).expect("date should be present"),
                &resolver.active_services(d),
                "batched and single-date results should agree on {}",
                d
            );
        }
    }

    #[test]
    fn test_batched_resolution_applies_exceptions_outside_patterns() {
        // pattern entirely outside the queried span, exception inside it
        let pattern = weekday_pattern("wk");
        let exceptions = vec![CalendarException::new(
            "holiday",
            date(2024, 9, 2),
            ExceptionType::Added,
        )];
        let resolver = CalendarResolver::new(&[pattern], &exceptions).expect("should build");
        let dates = vec![date(2024, 9, 1), date(2024, 9, 2)];
        let batched = resolver.active_services_for_dates(&dates);
        assert!(batched
            .get(&date(2024, 9, 2))
            .expect("date should be present")
            .contains("holiday"));
        assert!(batched
            .get(&date(2024, 9, 1))
            .expect("date should be present")
            .is_empty());
    }
}
