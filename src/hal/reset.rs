//! Reset Controller HAL
//!
//! This module drives the WINC1500 power/reset sequence over the control
//! lines. It owns the pin bundle and a delay provider; the Wi-Fi stack is
//! only started once [`ResetController::reset`] has brought the chip up.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use super::gpio::WincPins;
use crate::error::Result;
use crate::internal::constants::{
    CHIP_ENABLE_SETTLE_MS, CHIP_RESET_HOLD_MS, RESET_RELEASE_SETTLE_MS,
};
use crate::pins::PinRole;

// =============================================================================
// Reset State
// =============================================================================

/// Reset state tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetState {
    /// Pins not yet driven
    #[default]
    Unconfigured,
    /// Chip held in reset (chip-enable low, resets low)
    Held,
    /// Chip enabled and out of reset
    Running,
}

// =============================================================================
// Reset Controller
// =============================================================================

/// Control-line driver for the WINC1500 module
///
/// Provides the initial pin configuration, the reset pulse and bus select.
#[derive(Debug)]
pub struct ResetController<CS, CE, RST1, RST2, D> {
    pins: WincPins<CS, CE, RST1, RST2>,
    delay: D,
    state: ResetState,
}

impl<CS, CE, RST1, RST2, D> ResetController<CS, CE, RST1, RST2, D>
where
    CS: OutputPin,
    CE: OutputPin,
    RST1: OutputPin,
    RST2: OutputPin,
    D: DelayNs,
{
    /// Create a new reset controller. No pin is touched until
    /// [`init_pins`](Self::init_pins) or [`reset`](Self::reset).
    pub fn new(pins: WincPins<CS, CE, RST1, RST2>, delay: D) -> Self {
        Self {
            pins,
            delay,
            state: ResetState::Unconfigured,
        }
    }

    /// Get current reset state
    pub fn state(&self) -> ResetState {
        self.state
    }

    /// Put every line at its idle level.
    ///
    /// Chip select is deasserted (high); chip enable and both reset lines are
    /// driven low, which leaves the module held in reset.
    pub fn init_pins(&mut self) -> Result<()> {
        let result = self.idle_sequence();
        self.settle(result, ResetState::Held)
    }

    /// Hold the chip in reset with chip enable low.
    pub fn hold_in_reset(&mut self) -> Result<()> {
        let result = self.hold_sequence();
        self.settle(result, ResetState::Held)
    }

    /// Pulse the chip through reset and leave it running.
    ///
    /// 1. Chip enable low, both resets low, hold `CHIP_RESET_HOLD_MS`
    /// 2. Chip enable high, wait `CHIP_ENABLE_SETTLE_MS`
    /// 3. Both resets high, wait `RESET_RELEASE_SETTLE_MS`
    pub fn reset(&mut self) -> Result<()> {
        let result = self.reset_sequence();
        self.settle(result, ResetState::Running)
    }

    /// Record the outcome of a pin sequence.
    ///
    /// A GPIO failure part-way leaves the line levels unknown, so every
    /// failed sequence lands in `Unconfigured`.
    fn settle(&mut self, result: Result<()>, reached: ResetState) -> Result<()> {
        self.state = match result {
            Ok(()) => reached,
            Err(_) => ResetState::Unconfigured,
        };
        result
    }

    fn idle_sequence(&mut self) -> Result<()> {
        self.pins.set(PinRole::ChipSelect, PinState::High)?;
        self.hold_sequence()
    }

    fn hold_sequence(&mut self) -> Result<()> {
        self.pins.set(PinRole::ChipEnable, PinState::Low)?;
        self.pins.set_resets(PinState::Low)
    }

    fn reset_sequence(&mut self) -> Result<()> {
        self.hold_sequence()?;
        self.delay.delay_ms(CHIP_RESET_HOLD_MS);

        self.pins.set(PinRole::ChipEnable, PinState::High)?;
        self.delay.delay_ms(CHIP_ENABLE_SETTLE_MS);

        self.pins.set_resets(PinState::High)?;
        self.delay.delay_ms(RESET_RELEASE_SETTLE_MS);
        Ok(())
    }

    /// Assert chip select (low).
    pub fn select(&mut self) -> Result<()> {
        self.pins.set(PinRole::ChipSelect, PinState::Low)
    }

    /// Deassert chip select (high).
    pub fn deselect(&mut self) -> Result<()> {
        self.pins.set(PinRole::ChipSelect, PinState::High)
    }

    /// Access the pin bundle
    pub fn pins(&self) -> &WincPins<CS, CE, RST1, RST2> {
        &self.pins
    }

    /// Give back the pins and the delay provider.
    pub fn release(self) -> (WincPins<CS, CE, RST1, RST2>, D) {
        (self.pins, self.delay)
    }
}
