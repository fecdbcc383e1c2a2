//! HD-0158 RG0019A LED dot-matrix panel driver
//!
//! Drives chained red/green LED dot-matrix modules over a bit-banged
//! parallel bus: pixel bits are clocked serially into the panel's shift
//! register (with two color data lines overlaying a per-pixel color), then
//! latched row by row into one of two external RAM banks via an
//! address/strobe sequence. Double-buffered writes between the banks give
//! tear-free updates, and horizontal scrolling is implemented by
//! re-rendering shifted copies of the line buffers.
//!
//! # Bus contract
//!
//! Twelve output lines: four row-address lines (LSB-first, rows 0-15), two
//! color data lines, serial clock, write enable, address latch enable, RAM
//! bank select, mode select, and an indicator lamp output. The panel needs
//! at least 1 us of settle time before each clock rising edge and 1 us of
//! high time - see [`driver::SETTLE_US`].
//!
//! The driver is strictly blocking and single-writer: every render call
//! owns the bus until it completes, and row/column order is fixed by the
//! hardware (the shift register accumulates bits in temporal order).
//!
//! # Usage
//!
//! ```rust, ignore
//! let pins = PanelPins::new(a3, a2, a1, a0, dg, clk, we, dr, ale, ab, se, lamp);
//! let mut panel = Hd0158::new(pins);
//!
//! let frame = font.render("12:34:56", Color::Green)?;
//! panel.print(&mut delay, &frame);             // static, both banks
//! panel.scroll(&mut delay, &frame, 30);        // blocks until done
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod driver;
pub mod pins;

pub use driver::Hd0158;
pub use pins::{Bank, PanelPins};
