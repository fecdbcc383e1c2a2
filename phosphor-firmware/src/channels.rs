//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. The display task is the only bus writer; everything that wants
//! pixels on the panel goes through [`DISPLAY_COMMANDS`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use phosphor_core::clock::TimeOfDay;

/// Channel capacity for display commands
const DISPLAY_CHANNEL_SIZE: usize = 4;

/// A request for the display task
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    /// Render the clock face for this time
    Clock(TimeOfDay),
    /// Blank both RAM banks and switch the lamp off (overnight)
    Dark,
}

/// Render requests for the display task
pub static DISPLAY_COMMANDS: Channel<CriticalSectionRawMutex, DisplayCommand, DISPLAY_CHANNEL_SIZE> =
    Channel::new();
