//! Panel bus pin bundle
//!
//! The HD-0158 bus is write-only. All twelve lines are plain digital
//! outputs; the driver owns the whole bundle so no other code can touch
//! the bus mid-transaction.

use phosphor_hal::gpio::OutputPin;

/// Which of the two display RAM banks a write targets
///
/// The panel shows one bank while the other is written; `A` maps to the
/// bank-select line low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// Bank-select line low
    #[default]
    A,
    /// Bank-select line high
    B,
}

impl Bank {
    /// Flip to the other bank
    pub fn toggle(&mut self) {
        *self = match self {
            Bank::A => Bank::B,
            Bank::B => Bank::A,
        };
    }

    /// Level of the bank-select line for this bank
    pub fn line_high(self) -> bool {
        matches!(self, Bank::B)
    }
}

/// The full panel wiring contract
///
/// Constructor argument order follows the module's connector: address lines
/// high bit first, then the serial group, then the control ports.
pub struct PanelPins<P: OutputPin> {
    /// Row address bit 3 (MSB)
    pub a3: P,
    /// Row address bit 2
    pub a2: P,
    /// Row address bit 1
    pub a1: P,
    /// Row address bit 0 (LSB)
    pub a0: P,
    /// Green serial data (DG)
    pub data_green: P,
    /// Serial clock (CLK)
    pub clock: P,
    /// Write enable (WE)
    pub write_enable: P,
    /// Red serial data (DR)
    pub data_red: P,
    /// Address latch enable (ALE)
    pub address_latch: P,
    /// RAM bank select (AB)
    pub bank_select: P,
    /// Manual/auto RAM control select (SE), held low for manual control
    pub mode_select: P,
    /// Indicator lamp output
    pub lamp: P,
}

impl<P: OutputPin> PanelPins<P> {
    /// Bundle the bus lines
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a3: P,
        a2: P,
        a1: P,
        a0: P,
        data_green: P,
        clock: P,
        write_enable: P,
        data_red: P,
        address_latch: P,
        bank_select: P,
        mode_select: P,
        lamp: P,
    ) -> Self {
        Self {
            a3,
            a2,
            a1,
            a0,
            data_green,
            clock,
            write_enable,
            data_red,
            address_latch,
            bank_select,
            mode_select,
            lamp,
        }
    }

    /// Park every line low
    pub fn set_all_low(&mut self) {
        self.a3.set_low();
        self.a2.set_low();
        self.a1.set_low();
        self.a0.set_low();
        self.data_green.set_low();
        self.clock.set_low();
        self.write_enable.set_low();
        self.data_red.set_low();
        self.address_latch.set_low();
        self.bank_select.set_low();
        self.mode_select.set_low();
        self.lamp.set_low();
    }
}
