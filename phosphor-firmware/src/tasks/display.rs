//! Display task
//!
//! Sole owner of the panel bus. Receives render requests from
//! [`DISPLAY_COMMANDS`] and performs the blocking bus writes; nothing
//! else in the firmware touches the panel pins.

use defmt::*;
use embassy_time::Delay;

use phosphor_core::config::SignConfig;
use phosphor_core::traits::GlyphSource;
use phosphor_core::Color;
use phosphor_hal_rp2040::RpOutputPin;
use phosphor_matrix::Hd0158;

use crate::channels::{DisplayCommand, DISPLAY_COMMANDS};
use crate::font::BuiltinFont;

/// Per-cell color pattern for the clock face, HH:MM:SS
const CLOCK_COLORS: [Color; 8] = [
    Color::Green,
    Color::Green,
    Color::Orange,
    Color::Green,
    Color::Green,
    Color::Orange,
    Color::Green,
    Color::Green,
];

/// Display task - renders commands onto the panel
#[embassy_executor::task]
pub async fn display_task(mut panel: Hd0158<RpOutputPin<'static>>, config: SignConfig) {
    info!("Display task started");

    let font = BuiltinFont;
    let mut delay = Delay;
    let mut colon_lit = true;

    loop {
        match DISPLAY_COMMANDS.receive().await {
            DisplayCommand::Clock(time) => {
                // Blink the separators on alternate updates
                let mut text = time.hhmmss();
                if !colon_lit {
                    text = text.chars().map(|c| if c == ':' { ' ' } else { c }).collect();
                }
                colon_lit = !colon_lit;

                match font.render_colored(&text, &CLOCK_COLORS) {
                    Ok(frame) => {
                        panel.print(&mut delay, &frame);
                        panel.set_lamp(true);
                    }
                    Err(e) => warn!("Clock frame rejected: {}", e),
                }
            }
            DisplayCommand::Dark => {
                info!("Blanking panel");
                panel.set_lamp(false);
                panel.blank(&mut delay, config.char_cells());
            }
        }
    }
}
