//! Chat export parsing: one `ChatRecord` per `M/D/YY, H:MM - Sender: Message` line.

use crate::models::{ChatRecord, HourClock};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Format used to turn the matched timestamp text into a date-time.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y, %H:%M";

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<ts>\d{1,2}/\d{1,2}/\d{2,4}, (?P<hour>\d{1,2}):\d{2}) - (?P<sender>.*?): (?P<message>.*)$",
    )
    .expect("chat line pattern is valid")
});

/// Parse raw chat text into records, in line order.
///
/// Lines that don't match the chat pattern are skipped, including the
/// continuation lines of multi-line messages. A matched line whose timestamp
/// doesn't fit [`TIMESTAMP_FORMAT`] (e.g. a 4-digit year) is still returned,
/// with `timestamp: None`.
pub fn parse(raw_text: &str, source_label: &str) -> Vec<ChatRecord> {
    raw_text
        .split('\n')
        .filter_map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line), source_label))
        .collect()
}

/// Same as [`parse`], for undecoded file contents. Invalid UTF-8 is replaced,
/// never rejected.
pub fn parse_bytes(raw: &[u8], source_label: &str) -> Vec<ChatRecord> {
    parse(&String::from_utf8_lossy(raw), source_label)
}

/// Parse several `(label, text)` exports and concatenate the results.
pub fn parse_many<L, T>(inputs: &[(L, T)]) -> Vec<ChatRecord>
where
    L: AsRef<str>,
    T: AsRef<str>,
{
    inputs
        .iter()
        .flat_map(|(label, text)| parse(text.as_ref(), label.as_ref()))
        .collect()
}

fn parse_line(line: &str, source_label: &str) -> Option<ChatRecord> {
    let caps = LINE_RE.captures(line)?;

    let raw_timestamp = caps["ts"].to_string();
    // `\d` also matches non-ASCII digits; such an hour can't be read,
    // but the line still counts as a message
    let hour_clock = caps["hour"]
        .parse::<u32>()
        .map(HourClock::from_hour)
        .unwrap_or(HourClock::TwentyFour);

    Some(ChatRecord {
        timestamp: parse_timestamp(&raw_timestamp),
        raw_timestamp,
        source_label: source_label.to_string(),
        sender: caps["sender"].to_string(),
        message: caps["message"].to_string(),
        hour_clock,
    })
}

/// Strict 24-hour, 2-digit-year parse. Anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}
