//! Phosphor - LED Dot-Matrix Clock Sign Firmware
//!
//! Main firmware binary for RP2040-based clock signs driving chained
//! HD-0158 RG0019A tri-color LED panels over a bit-banged parallel bus.
//!
//! Named after the phosphor dots of vintage signage.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use phosphor_core::config::SignConfig;
use phosphor_core::traits::GlyphSource;
use phosphor_core::Color;
use phosphor_hal_rp2040::RpOutputPin;
use phosphor_matrix::{Hd0158, PanelPins};

use crate::font::BuiltinFont;

mod channels;
mod font;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Phosphor firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = SignConfig::default();

    // Panel bus wiring. Connector order: address lines high bit first,
    // then the serial group, then the control ports.
    let pins = PanelPins::new(
        RpOutputPin::new(p.PIN_2.into()),  // A3
        RpOutputPin::new(p.PIN_3.into()),  // A2
        RpOutputPin::new(p.PIN_4.into()),  // A1
        RpOutputPin::new(p.PIN_5.into()),  // A0
        RpOutputPin::new(p.PIN_6.into()),  // DG
        RpOutputPin::new(p.PIN_7.into()),  // CLK
        RpOutputPin::new(p.PIN_8.into()),  // WE
        RpOutputPin::new(p.PIN_9.into()),  // DR
        RpOutputPin::new(p.PIN_10.into()), // ALE
        RpOutputPin::new(p.PIN_11.into()), // AB
        RpOutputPin::new(p.PIN_12.into()), // SE
        RpOutputPin::new(p.PIN_13.into()), // LAMP
    );

    let mut panel = Hd0158::new(pins);
    let mut delay = Delay;

    // Clear both RAM banks so no power-up garbage shows
    panel.blank(&mut delay, config.char_cells());
    info!("Panel initialized");

    // Scroll a startup banner while the clock seeds; leading spaces let
    // the text enter from the right edge
    match BuiltinFont.render("        --:--:--", Color::Green) {
        Ok(banner) => panel.scroll(&mut delay, &banner, config.scroll_interval_ms),
        Err(e) => warn!("Banner rejected: {}", e),
    }

    // Spawn tasks
    spawner.spawn(tasks::display_task(panel, config.clone())).unwrap();
    spawner.spawn(tasks::clock_task(config)).unwrap();

    info!("All tasks spawned, firmware running");
}
