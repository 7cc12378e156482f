use chrono::TimeZone;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Converts a span expressed in this unit to seconds.
    pub fn to_seconds(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value,
            TimeUnit::Milliseconds => value / 1_000.0,
            TimeUnit::Microseconds => value / 1_000_000.0,
            TimeUnit::Nanoseconds => value / 1_000_000_000.0,
        }
    }
}

/// Label layout of a time axis, from the coarsest to the finest.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SmartDateFormat {
    /// `%Y`
    Year,
    /// `%b %Y`
    MonthYear,
    /// `%d %b`
    DayMonth,
    /// `%H:%M`
    HourMin,
    /// `%H:%M:%S`
    #[default]
    HourMinSec,
}

impl SmartDateFormat {
    fn pattern(self) -> &'static str {
        match self {
            SmartDateFormat::Year => "%Y",
            SmartDateFormat::MonthYear => "%b %Y",
            SmartDateFormat::DayMonth => "%d %b",
            SmartDateFormat::HourMin => "%H:%M",
            SmartDateFormat::HourMinSec => "%H:%M:%S",
        }
    }
}

const SECS_PER_DAY: f64 = 86_400.0;

/// Smallest span, in seconds, that switches to each coarser format.
const SPAN_THRESHOLDS: [(f64, SmartDateFormat); 4] = [
    (2.0 * 365.0 * SECS_PER_DAY, SmartDateFormat::Year),
    (2.0 * 30.0 * SECS_PER_DAY, SmartDateFormat::MonthYear),
    (1.5 * SECS_PER_DAY, SmartDateFormat::DayMonth),
    (5.0 * 60.0, SmartDateFormat::HourMin),
];

/// Coarsest format whose threshold the visible span (in seconds) exceeds.
pub fn determine_date_format(span_secs: f64) -> SmartDateFormat {
    SPAN_THRESHOLDS
        .iter()
        .find(|(threshold, _)| span_secs > *threshold)
        .map_or(SmartDateFormat::HourMinSec, |&(_, format)| format)
}

/// Timestamp axis labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatter {
    pub unit: TimeUnit,
    pub time_zone: Tz,
    pub format: SmartDateFormat,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            unit: TimeUnit::Seconds,
            time_zone: Tz::UTC,
            format: SmartDateFormat::default(),
        }
    }
}

impl DateFormatter {
    pub fn new(unit: TimeUnit) -> Self {
        Self {
            unit,
            ..Default::default()
        }
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Picks the format from the visible span, given in `self.unit`.
    pub fn with_visible_span(mut self, span: f64) -> Self {
        self.format = determine_date_format(self.unit.to_seconds(span.abs()));
        self
    }

    pub fn format(&self, value: f64) -> String {
        let seconds = self.unit.to_seconds(value);
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9) as u32;

        match self.time_zone.timestamp_opt(whole as i64, nanos.min(999_999_999)) {
            chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
                dt.format(self.format.pattern()).to_string()
            }
            chrono::LocalResult::None => format!("{:.2}", value),
        }
    }
}
