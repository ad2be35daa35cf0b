//! Date formatting module
//!
//! Turns optional date strings into short `en-US` display dates such as
//! `"Jan 5, 2024"`. Parsing is permissive (ISO-8601, RFC 3339, RFC 2822,
//! SQLite timestamps, US numeric dates, English month names) and the time
//! zone used to pick the calendar day is always explicit.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use log::debug;
use crate::error::{Error, Result};

/// Placeholder rendered for unparsable input under [`InvalidDatePolicy::Placeholder`]
pub const INVALID_DATE_PLACEHOLDER: &str = "Invalid Date";

/// Output pattern: abbreviated month, unpadded day, four-digit year
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Date-times with an explicit offset that RFC 3339 parsing does not cover
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Wall-clock date-times without an offset
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Other calendar dates; `%B` accepts both "Jan" and "January"
const CALENDAR_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parsed date input
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// No date (empty/null)
    None,
    /// A calendar date without a time of day
    Date(NaiveDate),
    /// A wall-clock date-time without an offset
    Naive(NaiveDateTime),
    /// A date-time with an explicit UTC offset
    Instant(DateTime<FixedOffset>),
}

/// What to do with input that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidDatePolicy {
    /// Render a placeholder string instead of failing
    #[default]
    Placeholder,
    /// Fail with [`Error::InvalidDate`]
    Reject,
}

/// Parse a date string into a DateInput
///
/// Supported formats:
/// - `""` (empty or whitespace) → None
/// - `"2024-01-05"` → Date (ISO format)
/// - `"2024-01"` → Date (first day of the month)
/// - `"2024"` → Date (January 1st)
/// - `"2024/01/05"` → Date
/// - `"2024-01-05T10:00:00Z"` → Instant (RFC 3339)
/// - `"2024-01-05 10:00:00"` → Naive (ISO without offset, SQLite timestamps)
/// - `"Fri, 05 Jan 2024 10:00:00 +0000"` → Instant (RFC 2822)
/// - `"01/05/2024"` → Date (US format)
/// - `"Jan 5, 2024"`, `"January 5, 2024"` or `"January 5 2024"` → Date
/// - `"5 Jan 2024"` or `"05 January 2024"` → Date (day first)
pub fn parse_date_input(input: &str) -> Result<DateInput> {
    // Whitespace-only counts as empty, unlike a plain falsy check
    let input = input.trim();

    // Empty string → None
    if input.is_empty() {
        return Ok(DateInput::None);
    }

    // ISO format: 2024-01-05
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(DateInput::Date(date));
    }

    // ISO year-month: 2024-01
    if input.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d") {
            return Ok(DateInput::Date(date));
        }
    }

    // ISO year: 2024
    if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{input}-01-01"), "%Y-%m-%d") {
            return Ok(DateInput::Date(date));
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(DateInput::Instant(datetime));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(input, format) {
            return Ok(DateInput::Instant(datetime));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(DateInput::Naive(datetime));
        }
    }

    // Email headers: Fri, 05 Jan 2024 10:00:00 +0000
    if let Ok(datetime) = DateTime::parse_from_rfc2822(input) {
        return Ok(DateInput::Instant(datetime));
    }

    // US format: 01/05/2024
    if let Ok(date) = NaiveDate::parse_from_str(input, "%m/%d/%Y") {
        return Ok(DateInput::Date(date));
    }

    for format in CALENDAR_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(DateInput::Date(date));
        }
    }

    Err(Error::InvalidDate(format!("Unable to parse date: {}", input)))
}

/// Resolve a DateInput to the calendar date it shows in `time_zone`
///
/// Dates and naive date-times keep the day they were written with; only
/// instants are shifted into `time_zone` before the day is taken.
pub fn resolve_date(input: &DateInput, time_zone: FixedOffset) -> Option<NaiveDate> {
    match input {
        DateInput::None => None,
        DateInput::Date(date) => Some(*date),
        DateInput::Naive(datetime) => Some(datetime.date()),
        DateInput::Instant(datetime) => Some(datetime.with_timezone(&time_zone).date_naive()),
    }
}

/// Render a date in the short en-US format: "Mon day, year"
/// Example: "Jan 5, 2024"
pub fn render_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse a UTC offset such as `UTC`, `Z`, `+05:30`, `-0800` or `+09`
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    let invalid = || Error::InvalidTimeZone(s.to_string());

    if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("gmt") || s.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }

    let (sign, body) = if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };

    if !body.is_ascii() {
        return Err(invalid());
    }

    let (hours, minutes) = match (body.len(), body.split_once(':')) {
        (_, Some((h, m))) => (h, m),
        (4, None) => body.split_at(2),
        (2, None) => (body, "00"),
        _ => return Err(invalid()),
    };

    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Configurable formatter with a pinned time zone and malformed-input policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    time_zone: FixedOffset,
    policy: InvalidDatePolicy,
    placeholder: String,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DateFormatter {
    /// UTC, placeholder policy, `"Invalid Date"` placeholder
    pub fn new() -> Self {
        Self {
            time_zone: Utc.fix(),
            policy: InvalidDatePolicy::Placeholder,
            placeholder: INVALID_DATE_PLACEHOLDER.to_string(),
        }
    }

    /// Zone used to pick the calendar day of offset timestamps
    pub fn with_time_zone(mut self, time_zone: FixedOffset) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// How unparsable input is handled
    pub fn with_policy(mut self, policy: InvalidDatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Text rendered for unparsable input under the placeholder policy
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Configured target zone
    pub fn time_zone(&self) -> FixedOffset {
        self.time_zone
    }

    /// Configured malformed-input policy
    pub fn policy(&self) -> InvalidDatePolicy {
        self.policy
    }

    /// Format an optional date string
    ///
    /// Empty input yields `""`. Unparsable input yields the placeholder, or
    /// [`Error::InvalidDate`] when the policy is [`InvalidDatePolicy::Reject`].
    pub fn format(&self, input: Option<&str>) -> Result<String> {
        let parsed = match input {
            Some(s) => parse_date_input(s),
            None => Ok(DateInput::None),
        };

        match parsed {
            Ok(expr) => Ok(resolve_date(&expr, self.time_zone)
                .map(|date| render_date(&date))
                .unwrap_or_default()),
            Err(e) => match self.policy {
                InvalidDatePolicy::Placeholder => {
                    debug!("{}; rendering placeholder", e);
                    Ok(self.placeholder.clone())
                }
                InvalidDatePolicy::Reject => Err(e),
            },
        }
    }
}

/// Format an optional date string with the default formatter
///
/// Never fails: missing input gives `""` and malformed input gives
/// [`INVALID_DATE_PLACEHOLDER`].
pub fn format_date(input: Option<&str>) -> String {
    DateFormatter::default()
        .format(input)
        .unwrap_or_else(|_| INVALID_DATE_PLACEHOLDER.to_string())
}

/// Format an optional date string, failing on malformed input
pub fn try_format_date(input: Option<&str>) -> Result<String> {
    DateFormatter::default()
        .with_policy(InvalidDatePolicy::Reject)
        .format(input)
}
