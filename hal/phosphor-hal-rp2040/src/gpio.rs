//! GPIO output pins for RP2040
//!
//! Wraps `embassy_rp::gpio::Output` in a newtype so the shared
//! `phosphor_hal::OutputPin` trait can be implemented for it (both the
//! trait and the embassy type are foreign to each other).

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;

use phosphor_hal::gpio::OutputPin;

/// An RP2040 GPIO output pin
///
/// Starts low - the panel bus expects all lines parked low at power-up.
pub struct RpOutputPin<'d> {
    inner: Output<'d>,
}

impl<'d> RpOutputPin<'d> {
    /// Create a new output pin, initially low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            inner: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}
