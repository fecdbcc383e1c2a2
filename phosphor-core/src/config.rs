//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign configuration
///
/// Defaults match the reference hardware: two chained HD-0158 modules
/// (8 character cells), 30 ms scroll frame interval, clock lit from
/// 06:00 to 23:00.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignConfig {
    /// Number of chained panel modules (4 character cells each)
    pub panel_count: u8,
    /// Delay between scroll frames in milliseconds
    pub scroll_interval_ms: u16,
    /// Hour the clock display switches on
    pub clock_start_hour: u8,
    /// Hour the clock display switches off
    pub clock_end_hour: u8,
}

impl Default for SignConfig {
    fn default() -> Self {
        Self {
            panel_count: 2,
            scroll_interval_ms: 30,
            clock_start_hour: 6,
            clock_end_hour: 23,
        }
    }
}

impl SignConfig {
    /// Character cells across all chained panels
    pub fn char_cells(&self) -> usize {
        self.panel_count as usize * 4
    }
}
