//! SAMD21 Xplained Pro board configuration (WINC1500 Xplained on EXT1).
//!
//! This module provides the pin identifiers for the WINC1500 control lines
//! as routed through the EXT1 header, plus a few helpers for bring-up code.

use super::{BoardPins, PinId, Port};
use crate::pins::WincPinMap;

/// SAMD21 Xplained Pro board configuration constants and helpers.
pub struct Samd21XplainedPro;

/// Driver-facing pin map for this board.
pub type PinMap = WincPinMap<Samd21XplainedPro>;

impl BoardPins for Samd21XplainedPro {
    const NAME: &'static str = "SAMD21 Xplained Pro";

    /// EXT1 pin 15 (SPI SS).
    const CS_PIN: PinId = PinId::gpio(Port::A, 5);

    /// EXT1 pin 10.
    const CE_PIN: PinId = PinId::gpio(Port::B, 5);

    /// EXT1 pin 5.
    const RESET_PIN1: PinId = PinId::gpio(Port::B, 6);

    /// EXT1 pin 6.
    const RESET_PIN2: PinId = PinId::gpio(Port::B, 7);
}

impl Samd21XplainedPro {
    /// Extension header the module sits on.
    pub const HEADER: &'static str = "EXT1";

    /// Microcontroller on board.
    pub const MCU: &'static str = "ATSAMD21J18A";

    /// Get a human-readable description of the board.
    #[must_use]
    pub const fn description() -> &'static str {
        "SAMD21 Xplained Pro: ATSAMD21J18A + WINC1500 Xplained on EXT1 (SPI SS PA05)"
    }
}
