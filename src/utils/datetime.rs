/// Pure date handling for stored birthday values
use chrono::NaiveDate;

/// Characters of a stored birthday value that encode the date
const BIRTHDAY_PREFIX_LEN: usize = 8;

/// Parse the date prefix of a stored birthday value
///
/// Only the first 8 characters ("YYYYMMDD") are significant; the
/// generalized-time tail ("000000Z") is ignored.
pub fn parse_birthday_string(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let prefix: String = raw.chars().take(BIRTHDAY_PREFIX_LEN).collect();
    NaiveDate::parse_from_str(&prefix, "%Y%m%d")
}

/// Calculate age from birth year
pub fn calculate_age(birth_year: i32, current_year: i32) -> i32 {
    current_year - birth_year
}

/// Check if a date matches month and day (ignoring year)
pub fn matches_birthday(month: u32, day: u32, target_month: u32, target_day: u32) -> bool {
    month == target_month && day == target_day
}
