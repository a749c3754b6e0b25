//! Calendar date validation functions

use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Earliest accepted date of birth
pub static EARLIEST_BIRTH_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1990, 1, 1).expect("1990-01-01 is a calendar date"));

/// Parses a fixed-width ISO `YYYY-MM-DD` date.
///
/// Unpadded forms such as `1990-1-1` are rejected, so the accepted strings
/// order the same way lexicographically as the dates they denote.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Inclusive window check: `earliest <= date <= latest`
pub fn date_within(date: NaiveDate, earliest: NaiveDate, latest: NaiveDate) -> bool {
    date >= earliest && date <= latest
}

/// Date of birth window: from 1990-01-01 up to and including `today`
pub fn is_eligible_birth_date(date: NaiveDate, today: NaiveDate) -> bool {
    date_within(date, *EARLIEST_BIRTH_DATE, today)
}
