//! # chronos-utc
//!
//! A precise, mutable UTC civil-time value type on the proleptic Gregorian
//! calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["calendar fields (y, m, d, h, min, s, us)"] -->|"to_epoch"| B["epoch (f64 seconds)"]
//!     B -->|"from_epoch"| A
//!     A -->|"validating setters"| C["UtcInstant"]
//!     B -->|"set_epoch()"| C
//!     C -->|"+ / - seconds"| C
//!     C -->|"Display / FromStr"| D["YYYY-MM-DDTHH:MM:SS.ffffff"]
//! ```
//!
//! Every mutation path funnels through the converter pair: a calendar-field
//! setter re-derives the epoch, and an epoch assignment re-derives the
//! calendar fields, so the two views of an instant never disagree.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chronos_utc::UtcInstant;
//!
//! let mut t = UtcInstant::new();
//! t.set_year(2020)?;
//! t.set_month_and_day(1, 9)?;
//! t.set_minute(12)?;
//! t.set_second(8)?;
//! t.set_microsecond(800_000)?;
//! assert_eq!(t.to_string(), "2020-01-09T00:12:08.800000");
//!
//! // Arithmetic re-derives the fields from the summed epoch, carrying
//! // microseconds across unit boundaries exactly.
//! let next_day = t + 86_400.1;
//! assert_eq!(next_day.day_of_month(), 10);
//! assert_eq!(next_day.microsecond(), 900_000);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Leap-year and month-length queries |
//! | `civil` | Civil date to epoch-day-count conversion |
//! | `convert` | Calendar-field to epoch conversion |
//! | `instant` | The `UtcInstant` value type, its setters and arithmetic |
//! | `parse` | Timestamp parsing |
//! | `error` | Error types |

mod calendar;
mod civil;
mod convert;
mod error;
mod instant;
mod parse;

pub use calendar::{days_in_month, days_in_year, is_leap_year};
pub use error::UtcError;
pub use instant::UtcInstant;
