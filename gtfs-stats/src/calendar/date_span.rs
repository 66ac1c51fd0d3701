use chrono::NaiveDate;

/// iterates calendar dates from `start` through `end_inclusive`. an empty
/// span (start after end) yields nothing, and iteration stops at the end of
/// chrono's date range rather than wrapping.
pub struct DateSpan {
    current: Option<NaiveDate>,
    end_inclusive: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end_inclusive: NaiveDate) -> DateSpan {
        DateSpan {
            current: Some(start),
            end_inclusive,
        }
    }
}

impl Iterator for DateSpan {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if current > self.end_inclusive {
            return None;
        }
        self.current = current.succ_opt();
        Some(current)
    }
}
