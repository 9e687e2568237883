//! Month-aligned trailing windows for subscriber statistics queries.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;

/// Width of the dashboard's subscriber chart window, in calendar months.
///
/// The chart has always queried two months back from the current month
/// start; consumers depend on that width.
pub const DASHBOARD_WINDOW_MONTHS: u32 = 2;

/// A `[start, end)` range whose bounds are both UTC month starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TrailingWindow {
    /// Window ending at the first instant of `now`'s UTC month and starting
    /// `months` calendar months earlier.
    pub fn ending_at_month_start(now: DateTime<Utc>, months: u32) -> Result<Self, DomainError> {
        if months == 0 {
            return Err(DomainError::Validation(
                "trailing window must span at least one month".to_string(),
            ));
        }

        let end = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
            .ok_or_else(|| DomainError::Internal(format!("no month start for {now}")))?;
        let start = end.checked_sub_months(Months::new(months)).ok_or_else(|| {
            DomainError::Validation(format!("{months} months before {end} is out of range"))
        })?;

        Ok(Self {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: end.and_time(NaiveTime::MIN).and_utc(),
        })
    }

    /// The window used by the dashboard's subscriber chart.
    pub fn dashboard(now: DateTime<Utc>) -> Result<Self, DomainError> {
        Self::ending_at_month_start(now, DASHBOARD_WINDOW_MONTHS)
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}
