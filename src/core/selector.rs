//! Challenge selection from the calendar.
//!
//! Pure functions: the date and catalog size are always passed in, never
//! read from the process environment.

use chrono::{Datelike, NaiveDate};
use std::num::NonZeroU32;

/// Format of the daily marker, e.g. `Mon Oct 19 2026`.
pub const MARKER_DATE_FORMAT: &str = "%a %b %d %Y";

/// Ordinal day of the year, 1 on January 1st.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Challenge identifier for the given local calendar date.
///
/// Always within `1..=catalog_size`; days past the catalog size wrap around.
///
/// ```rust
/// use chrono::NaiveDate;
/// use daily_swipe::core::todays_challenge_id;
/// use std::num::NonZeroU32;
///
/// let size = NonZeroU32::new(30).unwrap();
/// let jan_1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(todays_challenge_id(jan_1, size), 2);
/// ```
pub fn todays_challenge_id(date: NaiveDate, catalog_size: NonZeroU32) -> u32 {
    (day_of_year(date) % catalog_size.get()) + 1
}

/// Successor of `current_id` in the cyclic catalog.
///
/// `catalog_size` wraps to 1. Identifiers outside the catalog are reduced
/// modulo the size first, so the result is always in range.
pub fn next_challenge_id(current_id: u32, catalog_size: NonZeroU32) -> u32 {
    (current_id % catalog_size.get()) + 1
}

/// Marker value written when today's challenge is completed.
pub fn daily_marker(date: NaiveDate) -> String {
    date.format(MARKER_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_of_year_starts_at_one() {
        assert_eq!(day_of_year(date(2026, 1, 1)), 1);
        assert_eq!(day_of_year(date(2026, 12, 31)), 365);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
    }

    #[test]
    fn todays_id_wraps_past_catalog_size() {
        // Jan 30 is day 30 -> 30 % 30 + 1
        assert_eq!(todays_challenge_id(date(2026, 1, 30), size(30)), 1);
        assert_eq!(todays_challenge_id(date(2026, 1, 29), size(30)), 30);
        assert_eq!(todays_challenge_id(date(2026, 10, 19), size(30)), (292 % 30) + 1);
    }

    #[test]
    fn single_entry_catalog_always_picks_one() {
        assert_eq!(todays_challenge_id(date(2026, 7, 4), size(1)), 1);
        assert_eq!(next_challenge_id(1, size(1)), 1);
    }

    #[test]
    fn next_id_wraps_to_one() {
        assert_eq!(next_challenge_id(1, size(30)), 2);
        assert_eq!(next_challenge_id(29, size(30)), 30);
        assert_eq!(next_challenge_id(30, size(30)), 1);
    }

    #[test]
    fn marker_matches_date_string_shape() {
        assert_eq!(daily_marker(date(2026, 10, 19)), "Mon Oct 19 2026");
        assert_eq!(daily_marker(date(2026, 3, 5)), "Thu Mar 05 2026");
    }
}
