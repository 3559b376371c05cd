//! Turns typed attribute values into attribute text, or decides the attribute
//! should not be written at all.
use chrono::{DateTime, Duration, Utc};

use crate::models::Importance;

/// Invariant month/day/year pattern with a 24-hour clock
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttributeValue<'a> {
    Absent,
    Text(&'a str),
    /// Positions and counts; zero and below mean "unknown"
    Count(i64),
    Timestamp(DateTime<Utc>),
    Duration(Duration),
    Flag(bool),
    Label(&'a str),
}

impl<'a> AttributeValue<'a> {
    pub fn format(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(text) => non_empty(text.to_string()),
            Self::Count(n) if *n > 0 => Some(n.to_string()),
            Self::Count(_) => None,
            Self::Timestamp(t) => Some(t.format(TIMESTAMP_FORMAT).to_string()),
            Self::Duration(d) => Some(format_duration(*d)),
            Self::Flag(b) => Some(b.to_string()),
            Self::Label(label) => non_empty(label.to_ascii_lowercase()),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Renders whole seconds as `[-][d.]hh:mm:ss`; fractional seconds are dropped.
/// This is also the text of `duration` elements.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{}{}.{:02}:{:02}:{:02}", sign, days, hours, minutes, seconds)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for AttributeValue<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Self::Absent, Self::Text)
    }
}

impl From<i32> for AttributeValue<'_> {
    fn from(n: i32) -> Self {
        Self::Count(n.into())
    }
}

impl From<DateTime<Utc>> for AttributeValue<'_> {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Timestamp(t)
    }
}

impl From<Duration> for AttributeValue<'_> {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

impl From<bool> for AttributeValue<'_> {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<Importance> for AttributeValue<'_> {
    fn from(importance: Importance) -> Self {
        Self::Label(importance.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_absent_and_empty_are_omitted() {
        assert_eq!(AttributeValue::Absent.format(), None);
        assert_eq!(AttributeValue::Text("").format(), None);
        assert_eq!(AttributeValue::from(None::<&str>).format(), None);
        assert_eq!(AttributeValue::Label("").format(), None);
    }

    #[test]
    fn test_counts_must_be_positive() {
        assert_eq!(AttributeValue::from(0).format(), None);
        assert_eq!(AttributeValue::from(-5).format(), None);
        assert_eq!(AttributeValue::from(3).format(), Some("3".to_string()));
    }

    #[test]
    fn test_timestamp_is_invariant() {
        let t = Utc.with_ymd_and_hms(2026, 3, 7, 14, 5, 9).unwrap();
        assert_eq!(AttributeValue::from(t).format(), Some("03/07/2026 14:05:09".to_string()));
    }

    #[test]
    fn test_duration_truncates() {
        let d = Duration::milliseconds(65_999);
        assert_eq!(AttributeValue::from(d).format(), Some("00:01:05".to_string()));
        assert_eq!(format_duration(Duration::zero()), "00:00:00");
        assert_eq!(format_duration(Duration::seconds(3 * 3600 + 25)), "03:00:25");
        assert_eq!(format_duration(Duration::seconds(90_061)), "1.01:01:01");
        assert_eq!(format_duration(Duration::milliseconds(-2_500)), "-00:00:02");
    }

    #[test]
    fn test_flags_and_labels_are_lowercase() {
        assert_eq!(AttributeValue::from(true).format(), Some("true".to_string()));
        assert_eq!(AttributeValue::from(false).format(), Some("false".to_string()));
        assert_eq!(AttributeValue::from(Importance::High).format(), Some("high".to_string()));
        assert_eq!(AttributeValue::from(Importance::Low).format(), Some("low".to_string()));
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(AttributeValue::from("Compile").format(), Some("Compile".to_string()));
    }
}
