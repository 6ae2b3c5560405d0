//! Date normalisation to the German `DD.MM.YYYY` display form.
//!
//! Strategies run in order and the first `Some` wins:
//! 1. leading `YYYY-MM-DD` — groups re-emitted verbatim, no calendar check
//! 2. generic parse of common spreadsheet and locale formats
//! 3. passthrough of the original text

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use regex::Regex;

static LEADING_ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})").unwrap());

static YEAR_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// Trailing zone name as printed by browsers, e.g. ` (Central European Standard Time)`.
static ZONE_NAME_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^()]*\)$").unwrap());

/// `%Y` also accepts one- and two-digit years; anything below this is a
/// short year misread and is rejected.
const MIN_FOUR_DIGIT_YEAR: i32 = 1000;

/// Date-only layouts, tried in order. Naive values are already local.
/// Two-digit-year layouts come first so `3/5/24` is not read as year 3.
const DATE_LAYOUTS: &[&str] = &[
    "%d.%m.%y",
    "%m/%d/%y",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%B %d, %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// Layouts carrying an offset, converted to local time.
const OFFSET_LAYOUTS: &[&str] = &["%a %b %d %Y %H:%M:%S GMT%z"];

/// Date-time layouts without an offset, interpreted as local time.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%d.%m.%y %H:%M",
    "%m/%d/%y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

type DateStrategy = fn(&str) -> Option<String>;

const STRATEGIES: &[DateStrategy] = &[leading_iso_date, parsed_date];

/// Formats a raw date string as `DD.MM.YYYY`. Never fails: unrecognised input
/// comes back unchanged and empty input yields `""`.
pub fn format_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(input))
        .unwrap_or_else(|| input.to_string())
}

fn leading_iso_date(input: &str) -> Option<String> {
    let caps = LEADING_ISO_DATE.captures(input)?;
    Some(format!("{}.{}.{}", &caps[3], &caps[2], &caps[1]))
}

fn parsed_date(input: &str) -> Option<String> {
    parse_generic(input.trim()).map(|date| date.format("%d.%m.%Y").to_string())
}

fn parse_generic(input: &str) -> Option<NaiveDate> {
    if input.is_empty() {
        return None;
    }

    if YEAR_ONLY.is_match(input) {
        return input
            .parse()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    let without_zone_name = ZONE_NAME_SUFFIX.replace(input, "");
    if let Some(dt) = OFFSET_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(&without_zone_name, layout).ok())
    {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| {
            NaiveDateTime::parse_from_str(input, layout)
                .ok()
                .map(|dt| dt.date())
                .filter(has_full_year)
        })
        .or_else(|| {
            DATE_LAYOUTS.iter().find_map(|layout| {
                NaiveDate::parse_from_str(input, layout)
                    .ok()
                    .filter(has_full_year)
            })
        })
}

fn has_full_year(date: &NaiveDate) -> bool {
    date.year() >= MIN_FOUR_DIGIT_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_empty() {
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(format_date("2024-03-05"), "05.03.2024");
    }

    #[test]
    fn test_leading_iso_wins_over_timestamp() {
        assert_eq!(format_date("2024-03-05T10:00:00Z"), "05.03.2024");
        assert_eq!(format_date("2024-03-05T23:59:59-10:00"), "05.03.2024");
    }

    #[test]
    fn test_leading_iso_has_no_calendar_check() {
        assert_eq!(format_date("2024-13-40"), "40.13.2024");
    }

    #[test]
    fn test_passthrough_for_unparseable() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date("demnächst"), "demnächst");
    }

    #[test]
    fn test_slashed_year_first() {
        assert_eq!(format_date("2024/03/05"), "05.03.2024");
    }

    #[test]
    fn test_us_style_month_first() {
        assert_eq!(format_date("03/05/2024"), "05.03.2024");
    }

    #[test]
    fn test_german_dotted_is_normalised() {
        assert_eq!(format_date("5.3.2024"), "05.03.2024");
        assert_eq!(format_date("05.03.2024"), "05.03.2024");
    }

    #[test]
    fn test_english_month_name() {
        assert_eq!(format_date("March 5, 2024"), "05.03.2024");
        assert_eq!(format_date("5 March 2024"), "05.03.2024");
    }

    #[test]
    fn test_date_time_without_offset() {
        assert_eq!(format_date("2024/03/05 18:30"), "05.03.2024");
    }

    #[test]
    fn test_unpadded_dash_date_is_not_leading_iso() {
        // Falls through to the generic parse, which pads the output.
        assert_eq!(format_date("2024-3-5"), "05.03.2024");
    }

    #[test]
    fn test_invalid_calendar_date_in_generic_layout_passes_through() {
        assert_eq!(format_date("2024/02/30"), "2024/02/30");
    }

    #[test]
    fn test_two_digit_year_dotted() {
        assert_eq!(format_date("5.3.24"), "05.03.2024");
        assert_eq!(format_date("05.03.99"), "05.03.1999");
    }

    #[test]
    fn test_two_digit_year_month_first() {
        assert_eq!(format_date("3/5/24"), "05.03.2024");
        assert_eq!(format_date("3/5/24 18:30"), "05.03.2024");
    }

    #[test]
    fn test_short_year_never_yields_ancient_date() {
        // %Y reads "0024" as year 24; that is rejected, not shown.
        assert_eq!(format_date("3/5/0024"), "3/5/0024");
        assert_eq!(format_date("5.3.0024"), "5.3.0024");
    }

    #[test]
    fn test_rfc2822_converts_to_local_date() {
        let input = "Tue, 5 Mar 2024 10:00:00 +0000";
        let expected = DateTime::parse_from_rfc2822(input)
            .unwrap()
            .with_timezone(&Local)
            .format("%d.%m.%Y")
            .to_string();
        assert_eq!(format_date(input), expected);
    }

    #[test]
    fn test_weekday_month_day_year() {
        assert_eq!(format_date("Tue Mar 05 2024"), "05.03.2024");
    }

    #[test]
    fn test_browser_date_string() {
        let expected = DateTime::parse_from_rfc3339("2024-03-05T10:00:00+01:00")
            .unwrap()
            .with_timezone(&Local)
            .format("%d.%m.%Y")
            .to_string();
        assert_eq!(format_date("Tue Mar 05 2024 10:00:00 GMT+0100"), expected);
        assert_eq!(
            format_date("Tue Mar 05 2024 10:00:00 GMT+0100 (Central European Standard Time)"),
            expected
        );
    }

    #[test]
    fn test_year_only() {
        assert_eq!(format_date("2024"), "01.01.2024");
    }
}
