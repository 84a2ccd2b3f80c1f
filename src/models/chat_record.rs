use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// How the hour of a chat line should be read.
///
/// Exports carry no AM/PM token, so an hour in `1..=12` could be either
/// half of the day. Values outside that range can only be 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HourClock {
    TwentyFour,
    Ambiguous,
}

impl HourClock {
    pub fn from_hour(hour: u32) -> Self {
        if (1..=12).contains(&hour) {
            HourClock::Ambiguous
        } else {
            HourClock::TwentyFour
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, HourClock::Ambiguous)
    }
}

/// One message line from a chat export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRecord {
    pub timestamp: Option<NaiveDateTime>, // None when `raw_timestamp` is not `M/D/YY, H:MM`
    pub raw_timestamp: String,            // matched text, e.g. "3/5/24, 8:45"
    pub source_label: String,
    pub sender: String,
    pub message: String,
    pub hour_clock: HourClock,
}

impl ChatRecord {
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.timestamp.map(|ts| ts.time())
    }

    /// Timestamp for display: `YYYY-MM-DD HH:MM`, or `--` when unparsed.
    pub fn timestamp_str(&self) -> String {
        self.timestamp
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn hour_is_ambiguous(&self) -> bool {
        self.hour_clock.is_ambiguous()
    }
}
