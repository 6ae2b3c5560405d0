//! Time-of-day normalisation to 24-hour `HH:mm`.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveTime};
use regex::Regex;

static LEADING_HOUR_MINUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})").unwrap());

/// Arbitrary day the time is anchored to when an offset forces a conversion.
const ANCHOR_DATE: &str = "1970-01-01";

const TIME_LAYOUTS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

const OFFSET_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

type TimeStrategy = fn(&str) -> Option<String>;

const STRATEGIES: &[TimeStrategy] = &[leading_hour_minute, parsed_time];

/// Formats a raw time string as `HH:mm`. Never fails: unrecognised input
/// comes back unchanged and empty input yields `""`.
pub fn format_time(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(input))
        .unwrap_or_else(|| input.to_string())
}

fn leading_hour_minute(input: &str) -> Option<String> {
    let caps = LEADING_HOUR_MINUTE.captures(input)?;
    Some(format!("{}:{}", &caps[1], &caps[2]))
}

fn parsed_time(input: &str) -> Option<String> {
    parse_time_of_day(input.trim()).map(|time| time.format("%H:%M").to_string())
}

fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    if input.is_empty() {
        return None;
    }

    if let Some(time) = TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(input, layout).ok())
    {
        return Some(time);
    }

    // A trailing offset means the value is not local; shift it.
    let anchored = match input.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{ANCHOR_DATE}T{rest}+00:00"),
        None => format!("{ANCHOR_DATE}T{input}"),
    };
    OFFSET_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(&anchored, layout).ok())
        .map(|dt| dt.with_timezone(&Local).time())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_empty() {
        assert_eq!(format_time(""), "");
    }

    #[test]
    fn test_hour_minute() {
        assert_eq!(format_time("09:30"), "09:30");
    }

    #[test]
    fn test_seconds_are_dropped() {
        assert_eq!(format_time("09:30:15"), "09:30");
    }

    #[test]
    fn test_leading_match_ignores_trailing_text() {
        assert_eq!(format_time("18:00 - 20:00"), "18:00");
        assert_eq!(format_time("18:00 Uhr"), "18:00");
    }

    #[test]
    fn test_leading_match_has_no_range_check() {
        assert_eq!(format_time("25:99"), "25:99");
    }

    #[test]
    fn test_single_digit_hour_is_padded() {
        assert_eq!(format_time("9:30"), "09:30");
        assert_eq!(format_time("9:05:59"), "09:05");
    }

    #[test]
    fn test_passthrough_for_unparseable() {
        assert_eq!(format_time("ganztägig"), "ganztägig");
        assert_eq!(format_time("abends"), "abends");
    }

    #[test]
    fn test_out_of_range_generic_time_passes_through() {
        assert_eq!(format_time("9:75"), "9:75");
    }

    fn local_hour_minute(rfc3339: &str) -> String {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }

    #[test]
    fn test_trailing_z_converts_from_utc() {
        assert_eq!(
            format_time("9:30Z"),
            local_hour_minute("1970-01-01T09:30:00+00:00")
        );
    }

    #[test]
    fn test_trailing_offset_converts_to_local() {
        assert_eq!(
            format_time("9:30+02:00"),
            local_hour_minute("1970-01-01T09:30:00+02:00")
        );
        assert_eq!(
            format_time("9:30:15+02:00"),
            local_hour_minute("1970-01-01T09:30:15+02:00")
        );
    }

    #[test]
    fn test_offset_with_invalid_time_passes_through() {
        assert_eq!(format_time("9:75Z"), "9:75Z");
    }
}
