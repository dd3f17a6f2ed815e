/// Utilities for date and time formatting
///
/// History timestamps arrive as RFC 3339 strings written by the client that
/// saved them; they are shown in the viewer's local time.
use chrono::{DateTime, Local};

/// Format an RFC 3339 timestamp as "Mar 15, 2024 14:02" in local time
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => format_in_zone(&dt.with_timezone(&Local)),
        Err(_) => raw.to_string(),
    }
}

fn format_in_zone<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_in_zone() {
        let dt = DateTime::parse_from_rfc3339("2024-03-15T14:02:26.123+00:00").unwrap();
        assert_eq!(format_in_zone(&dt), "Mar 15, 2024 14:02");
    }

    #[test]
    fn test_format_timestamp_parses_rfc3339() {
        // Local zone varies between machines, only the shape is stable.
        let formatted = format_timestamp("2024-12-31T12:00:00Z");
        assert!(formatted.contains("2024") || formatted.contains("2025"));
        assert!(!formatted.contains('T'));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_timestamp("invalid"), "invalid");
    }
}
