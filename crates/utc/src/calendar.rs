//! Leap-year and month-length queries for the proleptic Gregorian calendar.

use crate::error::UtcError;

/// Number of days in each month of a common year (index 0 unused, index 1 =
/// January, ..., index 12 = December). February's leap day is applied by
/// [`month_len`].
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a leap year.
///
/// Applies the Gregorian rule (divisible by 4 and either not divisible by
/// 100 or divisible by 400) proleptically, so it holds for every year
/// including year 0 and negative years.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Month length without validation. `month` must be in 1..=12.
pub(crate) fn month_len(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Returns the number of days in `month` of `year`.
///
/// February has 29 days when [`is_leap_year`] holds for `year`, 28
/// otherwise.
///
/// # Errors
///
/// Returns [`UtcError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, UtcError> {
    if !(1..=12).contains(&month) {
        return Err(UtcError::InvalidMonth { month });
    }
    Ok(month_len(year, month))
}

/// Returns the number of days in `year`: 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}
