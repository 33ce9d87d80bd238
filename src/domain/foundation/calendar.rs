//! Calendar-date display boundary.
//!
//! Goal dates arrive as ISO calendar dates (`chrono::NaiveDate` with serde)
//! and are rendered in the short form the dashboard uses ("Jan 1, 2023").

use chrono::NaiveDate;

/// Formats a date as month-abbreviation day, year, e.g. "Jun 30, 2023".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
