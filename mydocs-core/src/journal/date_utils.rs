use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Layout of entry folder names and of dates typed by the user.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono accepts single digit months/days and signed years for `%Y-%m-%d`,
/// so the exact shape is checked before parsing.
static ENTRY_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid entry date regex"));

/// Parses a `YYYY-MM-DD` string into a date.
///
/// Returns `None` for anything that is not exactly that layout or is not a real
/// calendar day (e.g. `2025-13-45`, `2025-02-30`). There is no lenient overflow.
pub fn parse_entry_date(input: &str) -> Option<NaiveDate> {
    if !ENTRY_DATE_SHAPE.is_match(input) {
        return None;
    }
    NaiveDate::parse_from_str(input, ENTRY_DATE_FORMAT).ok()
}

/// English weekday name, e.g. `Monday`.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
