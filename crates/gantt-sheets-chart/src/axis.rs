//! Time axis

use chrono::{Datelike, Months, NaiveDate};

/// Date span of a chart, from the earliest start to the latest end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeAxis {
    /// Create an axis over `[start, end]`; bounds are swapped if reversed
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// First date on the axis
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date on the axis
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days between start and end
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Position of `date` across the axis, 0.0 at start and 1.0 at end.
    ///
    /// Dates outside the span map outside `[0, 1]`. A zero-length axis maps
    /// every date to 0.0.
    pub fn fraction(&self, date: NaiveDate) -> f64 {
        let span = self.span_days();
        if span == 0 {
            return 0.0;
        }
        (date - self.start).num_days() as f64 / span as f64
    }

    /// Month slot of `date`, counting the start month as 1
    pub fn month_index(&self, date: NaiveDate) -> i32 {
        (date.year() - self.start.year()) * 12 + (date.month() as i32 - self.start.month() as i32)
            + 1
    }

    /// First day of every month that falls within the axis
    pub fn month_ticks(&self) -> Vec<NaiveDate> {
        let mut ticks = Vec::new();
        let Some(mut tick) = self.start.with_day(1) else {
            return ticks;
        };
        if tick < self.start {
            tick = match tick.checked_add_months(Months::new(1)) {
                Some(next) => next,
                None => return ticks,
            };
        }
        while tick <= self.end {
            ticks.push(tick);
            tick = match tick.checked_add_months(Months::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        ticks
    }
}
