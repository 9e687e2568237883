//! Coarse human-readable distances between two instants.

use std::fmt;

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Distance from `now` to some other instant, e.g. `3 days` or
/// `about 2 hours`.
///
/// `Display` renders the bare distance; [`RelativeTime::ago`] adds the past
/// suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    seconds: i64,
    past: bool,
}

impl RelativeTime {
    pub fn between(now: DateTime<Utc>, at: DateTime<Utc>) -> Self {
        Self {
            seconds: now.signed_duration_since(at).num_seconds().saturating_abs(),
            past: at <= now,
        }
    }

    /// Whether the instant lies at or before `now`.
    pub fn is_past(&self) -> bool {
        self.past
    }

    /// The distance with a trailing ` ago`.
    pub fn ago(&self) -> String {
        format!("{self} ago")
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.seconds;
        if s < 45 {
            f.write_str("less than a minute")
        } else if s < 45 * MINUTE {
            write_units(f, "", rounded(s, MINUTE), "minute")
        } else if s < DAY {
            write_units(f, "about ", rounded(s, HOUR), "hour")
        } else if s < MONTH {
            write_units(f, "", rounded(s, DAY), "day")
        } else if s < YEAR {
            write_units(f, "", rounded(s, MONTH), "month")
        } else {
            write_units(f, "about ", rounded(s, YEAR), "year")
        }
    }
}

fn rounded(seconds: i64, unit: i64) -> i64 {
    ((seconds + unit / 2) / unit).max(1)
}

fn write_units(f: &mut fmt::Formatter<'_>, prefix: &str, n: i64, unit: &str) -> fmt::Result {
    let plural = if n == 1 { "" } else { "s" };
    write!(f, "{prefix}{n} {unit}{plural}")
}
