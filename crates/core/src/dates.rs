//! Human-readable publication date formatting.

use time::Date;
use time::macros::format_description;

use crate::{ClaimbookError, Result};

/// Returns the ordinal suffix for a day of the month.
///
/// Days 10 through 20 always take "th"; otherwise the suffix follows the
/// last digit (1 → "st", 2 → "nd", 3 → "rd", everything else → "th").
pub fn ordinal_suffix(day: u8) -> &'static str {
    if (10..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats an ISO-8601 date string as e.g. "Sep 3rd, 2023".
///
/// The literal string `"None"` marks an absent date and formats as the
/// empty string. Otherwise only the date portion (before any `T` or space)
/// is considered; an unparseable value is a fatal
/// [`MalformedDate`](ClaimbookError::MalformedDate).
pub fn format_iso_date(value: &str) -> Result<String> {
    if value == "None" {
        return Ok(String::new());
    }

    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(date_part, &format)
        .map_err(|source| ClaimbookError::MalformedDate { value: value.to_string(), source })?;

    let month = date.month().to_string();
    let day = date.day();
    Ok(format!("{} {}{}, {}", &month[..3], day, ordinal_suffix(day), date.year()))
}
