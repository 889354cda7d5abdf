//! Timestamp parsing for [`UtcInstant`].

use std::str::FromStr;

use tracing::trace;

use crate::error::UtcError;
use crate::instant::UtcInstant;

/// Length of `YYYY-MM-DDTHH:MM:SS`.
const SHORT_LEN: usize = 19;
/// Length of `YYYY-MM-DDTHH:MM:SS.ffffff`.
const LONG_LEN: usize = 26;

impl FromStr for UtcInstant {
    type Err = UtcError;

    /// Parses `YYYY-MM-DDTHH:MM:SS.ffffff` or `YYYY-MM-DDTHH:MM:SS`; in the
    /// second form the microsecond defaults to zero.
    ///
    /// Components are routed through the validating setters, so an
    /// out-of-range value surfaces as the corresponding field error
    /// (for example [`UtcError::InvalidMonth`] for month 13).
    ///
    /// # Errors
    ///
    /// Returns [`UtcError::InvalidTimestamp`] for any other shape of input,
    /// or the field error for an out-of-range component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!(input = s, "parsing UTC timestamp");
        if s.len() != SHORT_LEN && s.len() != LONG_LEN {
            return Err(UtcError::InvalidTimestamp {
                input: s.to_owned(),
                reason: "expected 19 or 26 characters",
            });
        }
        if !s.is_ascii() {
            return Err(UtcError::InvalidTimestamp {
                input: s.to_owned(),
                reason: "expected ASCII digits and separators",
            });
        }
        let bytes = s.as_bytes();
        let separators_ok = bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes[10] == b'T'
            && bytes[13] == b':'
            && bytes[16] == b':'
            && (s.len() == SHORT_LEN || bytes[19] == b'.');
        if !separators_ok {
            return Err(UtcError::InvalidTimestamp {
                input: s.to_owned(),
                reason: "malformed separators",
            });
        }

        let mut instant = UtcInstant::new();
        instant.set_year(component(s, 0, 4, "malformed year")?)?;
        instant.set_month_and_day(
            component(s, 5, 7, "malformed month")?,
            component(s, 8, 10, "malformed day")?,
        )?;
        instant.set_hour(component(s, 11, 13, "malformed hour")?)?;
        instant.set_minute(component(s, 14, 16, "malformed minute")?)?;
        instant.set_second(component(s, 17, 19, "malformed second")?)?;
        if s.len() == LONG_LEN {
            instant.set_microsecond(component(s, 20, 26, "malformed microsecond")?)?;
        }
        Ok(instant)
    }
}

fn component<T: FromStr>(
    s: &str,
    start: usize,
    end: usize,
    what: &'static str,
) -> Result<T, UtcError> {
    s[start..end].parse().map_err(|_| UtcError::InvalidTimestamp {
        input: s.to_owned(),
        reason: what,
    })
}
