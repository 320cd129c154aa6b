//! Hour-periodic time handling.
//!
//! The timetable repeats every hour, so a request time is reduced to its
//! minute past the hour. Date and hour are ignored.

use std::fmt;

use chrono::Timelike;

/// Minutes in one period of the timetable.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Error returned when a minute value is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid minute of hour: {value} (must be 0-59)")]
pub struct InvalidMinute {
    value: u32,
}

/// A minute past the hour, in `0..=59`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use transit_timetable::domain::MinuteOfHour;
///
/// let time = NaiveTime::from_hms_opt(17, 42, 30).unwrap();
/// assert_eq!(MinuteOfHour::of(&time).get(), 42);
///
/// assert!(MinuteOfHour::new(59).is_ok());
/// assert!(MinuteOfHour::new(60).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfHour(u32);

impl MinuteOfHour {
    /// Create from a raw minute value.
    pub fn new(value: u32) -> Result<Self, InvalidMinute> {
        if value >= MINUTES_PER_HOUR {
            return Err(InvalidMinute { value });
        }
        Ok(Self(value))
    }

    /// Take the minute component of any chrono time or datetime.
    pub fn of<T: Timelike>(time: &T) -> Self {
        // chrono guarantees minute() is in 0..=59
        Self(time.minute())
    }

    /// Returns the minute value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Minutes from this minute until a scheduled offset.
    ///
    /// An offset at or before the current minute has already departed and
    /// is pushed into the next hour, so the result is `60` when the offset
    /// equals the current minute.
    pub fn minutes_until(self, offset: u32) -> u32 {
        if offset <= self.0 {
            offset + MINUTES_PER_HOUR - self.0
        } else {
            offset - self.0
        }
    }
}

impl fmt::Debug for MinuteOfHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinuteOfHour({})", self.0)
    }
}

impl fmt::Display for MinuteOfHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{:02}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Minutes-until matches the piecewise definition
        #[test]
        fn piecewise_definition(m in 0u32..60, t in 0u32..200) {
            let expected = if t > m { t - m } else { t + 60 - m };
            prop_assert_eq!(MinuteOfHour::new(m).unwrap().minutes_until(t), expected);
        }

        /// A departure at the current minute is always a full hour away
        #[test]
        fn boundary_is_one_hour(m in 0u32..60) {
            prop_assert_eq!(MinuteOfHour::new(m).unwrap().minutes_until(m), 60);
        }

        /// Result is never zero
        #[test]
        fn always_positive(m in 0u32..60, t in 0u32..200) {
            prop_assert!(MinuteOfHour::new(m).unwrap().minutes_until(t) >= 1);
        }
    }
}
