//! Clock task
//!
//! Tracks wall-clock time and drives the display task. Sends a render
//! request every tick while inside the display window and a single Dark
//! command on the way out, so the panel holds a blanked frame overnight
//! instead of being re-blanked twice a second.
//!
//! Time is a compile-time seed advanced by the monotonic timer. An RTC
//! or NTP source would replace [`CLOCK_SEED`] without touching the loop.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use phosphor_core::clock::TimeOfDay;
use phosphor_core::config::SignConfig;

use crate::channels::{DisplayCommand, DISPLAY_COMMANDS};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 500;

/// Wall-clock time at boot
const CLOCK_SEED: TimeOfDay = TimeOfDay::new(12, 0, 0);

/// Clock task - tracks time of day and schedules display updates
#[embassy_executor::task]
pub async fn clock_task(config: SignConfig) {
    info!("Clock task started");

    let boot = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let mut lit = false;

    loop {
        ticker.next().await;

        let now = CLOCK_SEED.advanced_by_secs(boot.elapsed().as_secs());
        let in_window = now.in_window(config.clock_start_hour, config.clock_end_hour);

        if in_window {
            if !lit {
                info!("Entering display window");
                lit = true;
            }
            DISPLAY_COMMANDS.send(DisplayCommand::Clock(now)).await;
        } else if lit {
            info!("Leaving display window");
            lit = false;
            DISPLAY_COMMANDS.send(DisplayCommand::Dark).await;
        }
    }
}
