//! Short Date Library
//!
//! Renders optional date strings as short `en-US` display dates.
//! This library provides functionality to:
//! - Parse permissive date and date-time strings
//! - Pick the calendar day in an explicit, fixed time zone
//! - Render dates as "Jan 5, 2024"
//! - Degrade malformed input to a placeholder, or reject it
//! - Format whole files of dates, one per line
//!
//! # Example
//!
//! ```
//! use short_date::format_date;
//!
//! assert_eq!(format_date(Some("2024-01-05")), "Jan 5, 2024");
//! assert_eq!(format_date(None), "");
//! assert_eq!(format_date(Some("not-a-date")), "Invalid Date");
//! ```

pub mod error;
pub mod date;
pub mod batch;
pub mod startup;

// Re-export commonly used items
pub use error::{Error, Result};
pub use date::{
    format_date, try_format_date, parse_date_input, parse_utc_offset, render_date,
    resolve_date, DateFormatter, DateInput, InvalidDatePolicy, INVALID_DATE_PLACEHOLDER,
};
pub use batch::{expand_globs, format_file, format_lines};
