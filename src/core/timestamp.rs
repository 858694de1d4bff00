//! Timestamp formatting utilities
//!
//! Formatters render the record's local timestamp through one of these
//! formats. The default is local date and time with millisecond precision.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Pattern behind [`TimestampFormat::Standard`].
pub const STANDARD_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use gog::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::Standard.format(&Local::now());
/// assert_eq!(stamp.len(), "2025-01-08 10:30:45.123".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45.123`
    #[default]
    Standard,

    /// `2025-01-08T10:30:45.123+08:00`
    Iso8601,

    /// RFC 3339 with full precision and offset
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use gog::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp in any timezone according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Standard => datetime.format(STANDARD_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_standard_format() {
        let result = TimestampFormat::Standard.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45.123");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+00:00");
    }

    #[test]
    fn test_unix_millis_format() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime());
        let parsed: i64 = result.parse().expect("valid unix millis timestamp");
        assert_eq!(parsed % 1000, 123);
    }

    #[test]
    fn test_custom_apache_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
        assert_eq!(format.format(&fixed_datetime()), "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Standard);
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str("\"Rfc3339\"").expect("deserialize Rfc3339");
        assert_eq!(format, TimestampFormat::Rfc3339);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
