//! Strict stamp decoding.
//!
//! Stamps are day-first with a 2- or 4-digit year and a 24-hour clock.
//! No fallback formats are tried.

use chrono::NaiveDateTime;

use super::delimiter::Stamp;

const TWO_DIGIT_YEAR: &str = "%d/%m/%y, %H:%M";
const FOUR_DIGIT_YEAR: &str = "%d/%m/%Y, %H:%M";

/// Decodes a stamp into a naive wall-clock timestamp.
///
/// Two-digit years follow chrono's `%y` pivot (00-69 → 20xx, 70-99 → 19xx).
///
/// # Errors
///
/// Returns a human-readable reason when the year has 3 digits, the date does
/// not exist, or the time is out of range.
pub fn decode_timestamp(stamp: &Stamp<'_>) -> Result<NaiveDateTime, String> {
    let format = match stamp.year.len() {
        2 => TWO_DIGIT_YEAR,
        4 => FOUR_DIGIT_YEAR,
        n => return Err(format!("year must have 2 or 4 digits, found {n}")),
    };

    let canonical = format!(
        "{}/{}/{}, {}:{}",
        stamp.day, stamp.month, stamp.year, stamp.hour, stamp.minute
    );

    NaiveDateTime::parse_from_str(&canonical, format).map_err(|e| e.to_string())
}
