//! Error types for the chronos-utc crate.

/// Error type for all fallible operations in the chronos-utc crate.
///
/// This enum covers validation failures for every calendar field of a
/// [`UtcInstant`](crate::UtcInstant) and malformed timestamp strings. Each
/// variant carries the offending value together with the range that would
/// have been accepted. A failed setter leaves the instant in its prior,
/// fully consistent state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum UtcError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the instant's year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a day-of-year value is outside the instant's year.
    #[error("invalid day of year: {doy} (must be 1..={max_doy})")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
        /// The length of the year the value was checked against.
        max_doy: u16,
    },

    /// Returned when an hour is outside the valid range 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: u8,
    },

    /// Returned when a minute is outside the valid range 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute that was provided.
        minute: u8,
    },

    /// Returned when a second is outside the valid range 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second that was provided.
        second: u8,
    },

    /// Returned when a microsecond is outside the valid range 0..=999999.
    #[error("invalid microsecond: {microsecond} (must be 0..=999999)")]
    InvalidMicrosecond {
        /// The invalid microsecond that was provided.
        microsecond: u32,
    },

    /// Returned when a timestamp string cannot be parsed.
    #[error("cannot parse timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The string that could not be parsed.
        input: String,
        /// Why the string was rejected.
        reason: &'static str,
    },
}
