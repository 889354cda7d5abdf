//! Conversion between calendar-field decompositions and epoch seconds.
//!
//! Every mutation path of [`UtcInstant`](crate::UtcInstant) funnels through
//! [`to_epoch`] or [`from_epoch`]; neither view of an instant is ever
//! updated without re-deriving the other through this pair.

use crate::civil::{civil_from_days, days_from_civil};

const SECS_PER_DAY: i64 = 86_400;

/// Calendar-field decomposition of an epoch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
}

/// Computes the epoch seconds denoted by `fields`.
///
/// The whole-second part is computed in integer arithmetic; only the
/// microsecond fraction contributes a non-integral part.
pub(crate) fn to_epoch(fields: Fields) -> f64 {
    let days = days_from_civil(fields.year, fields.month, fields.day);
    let secs = days * SECS_PER_DAY
        + i64::from(fields.hour) * 3_600
        + i64::from(fields.minute) * 60
        + i64::from(fields.second);
    secs as f64 + f64::from(fields.microsecond) / 1e6
}

/// Decomposes `epoch` into calendar fields.
///
/// The day boundary is found with floor division, so negative and
/// fractional epochs resolve to the calendar day they actually fall in.
/// The sub-second remainder is rounded to the nearest microsecond (ties
/// round half up); a remainder that rounds up to a full second carries
/// into the integral part before the day split.
pub(crate) fn from_epoch(epoch: f64) -> Fields {
    let floor = epoch.floor();
    let mut secs = floor as i64;
    let mut microsecond = ((epoch - floor) * 1e6).round() as u32;
    if microsecond == 1_000_000 {
        microsecond = 0;
        secs += 1;
    }
    let days = secs.div_euclid(SECS_PER_DAY);
    let rem = secs.rem_euclid(SECS_PER_DAY);
    let (year, month, day) = civil_from_days(days);
    Fields {
        year,
        month,
        day,
        hour: (rem / 3_600) as u8,
        minute: (rem % 3_600 / 60) as u8,
        second: (rem % 60) as u8,
        microsecond,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPOCH_FIELDS: Fields = Fields {
        year: 1970,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: 0,
    };

    #[test]
    fn epoch_zero() {
        assert_eq!(to_epoch(EPOCH_FIELDS), 0.0);
        assert_eq!(from_epoch(0.0), EPOCH_FIELDS);
    }

    #[test]
    fn known_instant() {
        let fields = Fields {
            year: 2020,
            month: 1,
            day: 9,
            hour: 0,
            minute: 12,
            second: 8,
            microsecond: 800_000,
        };
        assert_abs_diff_eq!(to_epoch(fields), 1_578_528_728.8, epsilon = 1e-6);
        assert_eq!(from_epoch(1_578_528_728.8), fields);
    }

    #[test]
    fn negative_epoch_lands_in_previous_day() {
        let fields = from_epoch(-0.5);
        assert_eq!(fields.year, 1969);
        assert_eq!(fields.month, 12);
        assert_eq!(fields.day, 31);
        assert_eq!(fields.hour, 23);
        assert_eq!(fields.minute, 59);
        assert_eq!(fields.second, 59);
        assert_eq!(fields.microsecond, 500_000);
    }

    #[test]
    fn negative_whole_day() {
        let fields = from_epoch(-86_400.0);
        assert_eq!((fields.year, fields.month, fields.day), (1969, 12, 31));
        assert_eq!((fields.hour, fields.minute, fields.second), (0, 0, 0));
    }

    #[test]
    fn microsecond_ties_round_half_up() {
        // 0.0078125 s = 7812.5 us exactly in binary.
        assert_eq!(from_epoch(0.007_812_5).microsecond, 7_813);
    }

    #[test]
    fn rounding_carries_into_seconds() {
        let fields = from_epoch(0.999_999_6);
        assert_eq!(fields.second, 1);
        assert_eq!(fields.microsecond, 0);
    }

    #[test]
    fn rounding_carries_across_epoch_zero() {
        // 0.4 us before the epoch rounds to the epoch itself.
        assert_eq!(from_epoch(-0.000_000_4), EPOCH_FIELDS);
    }

    #[test]
    fn roundtrip_within_microsecond() {
        let samples = [
            0.25,
            -0.25,
            1_578_528_728.8,
            -2_208_988_800.0, // 1900-01-01
            4_102_444_800.0,  // 2100-01-01
            951_782_400.0,    // 2000-02-29
            -719_162.0 * 86_400.0,
        ];
        for &epoch in &samples {
            assert_abs_diff_eq!(to_epoch(from_epoch(epoch)), epoch, epsilon = 1e-6);
        }
    }
}
