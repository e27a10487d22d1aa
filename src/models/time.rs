//! Time-of-day representation.
//!
//! Activities are bounded by wall-clock times within a single day.
//! Minutes-since-midnight gives a total order and exact comparisons
//! with no timezone or date concerns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A time of day, stored as minutes since midnight.
///
/// Supports total ordering, so "strictly after" is plain `>`.
/// Valid values span `0..1440`; `new` clamps out-of-range input to the
/// end of day rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

/// Minutes in a day; `TimeOfDay` values are strictly below this.
const MINUTES_PER_DAY: u16 = 24 * 60;

impl TimeOfDay {
    /// Creates a time from hour (0-23) and minute (0-59).
    ///
    /// Out-of-range components clamp to 23:59.
    pub fn new(hour: u16, minute: u16) -> Self {
        if hour >= 24 || minute >= 60 {
            return Self(MINUTES_PER_DAY - 1);
        }
        Self(hour * 60 + minute)
    }

    /// Creates a time directly from minutes since midnight.
    ///
    /// Clamps to 23:59 if `minutes` exceeds the day.
    pub fn from_minutes(minutes: u16) -> Self {
        Self(minutes.min(MINUTES_PER_DAY - 1))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parses `"9:00 AM"` / `"12:30 pm"` 12-hour strings, or `"14:05"`
    /// 24-hour strings when no AM/PM suffix is present.
    ///
    /// Returns `None` for anything malformed or out of range. 12 AM maps
    /// to 00:xx and 12 PM to 12:xx.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (clock, meridiem) = match s.split_once(char::is_whitespace) {
            Some((clock, suffix)) => {
                let m = match suffix.trim() {
                    m if m.eq_ignore_ascii_case("am") => Meridiem::Am,
                    m if m.eq_ignore_ascii_case("pm") => Meridiem::Pm,
                    _ => return None,
                };
                (clock, Some(m))
            }
            None => (s, None),
        };

        let (h, m) = clock.split_once(':')?;
        let hour: u16 = h.parse().ok()?;
        let minute: u16 = m.parse().ok()?;
        if minute >= 60 {
            return None;
        }

        let hour = match meridiem {
            Some(mer) => {
                if hour < 1 || hour > 12 {
                    return None;
                }
                match (mer, hour) {
                    (Meridiem::Am, 12) => 0,
                    (Meridiem::Am, h) => h,
                    (Meridiem::Pm, 12) => 12,
                    (Meridiem::Pm, h) => h + 12,
                }
            }
            None => {
                if hour >= 24 {
                    return None;
                }
                hour
            }
        };

        Some(Self(hour * 60 + minute))
    }
}

#[derive(Clone, Copy)]
enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for TimeOfDay {
    /// Formats in 12-hour clock form, e.g. `9:00 AM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, suffix) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour, self.minute(), suffix)
    }
}
