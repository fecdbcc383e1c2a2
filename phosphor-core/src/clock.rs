//! Wall-clock time arithmetic
//!
//! The sign displays a 24-hour clock. Time acquisition is a collaborator
//! concern (RTC, NTP, operator); this module only does the arithmetic:
//! advancing a seed time by elapsed seconds, formatting, and the
//! display-enable window check.

use core::fmt::Write;

use heapless::String;

/// Seconds in a day
const DAY_SECS: u64 = 24 * 60 * 60;

/// A 24-hour wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

impl TimeOfDay {
    /// Create a time of day
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Seconds since midnight
    pub fn as_secs(&self) -> u64 {
        self.hour as u64 * 3600 + self.minute as u64 * 60 + self.second as u64
    }

    /// This time advanced by `secs`, wrapping at midnight
    pub fn advanced_by_secs(&self, secs: u64) -> Self {
        let total = (self.as_secs() + secs) % DAY_SECS;
        Self {
            hour: (total / 3600) as u8,
            minute: (total / 60 % 60) as u8,
            second: (total % 60) as u8,
        }
    }

    /// Format as "HH:MM:SS"
    pub fn hhmmss(&self) -> String<8> {
        let mut s = String::new();
        let _ = write!(s, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        s
    }

    /// Check whether this time falls in the display-enable window
    ///
    /// The window is `start_hour <= hour < end_hour`; outside it the sign
    /// goes dark overnight.
    pub fn in_window(&self, start_hour: u8, end_hour: u8) -> bool {
        start_hour <= self.hour && self.hour < end_hour
    }
}
