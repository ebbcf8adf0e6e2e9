//! Board-support pin identifiers.
//!
//! A board describes where the four WINC1500 control lines are wired by
//! implementing [`BoardPins`]. The driver-facing names live in
//! [`crate::pins`]; this module only owns the board-side names
//! (`CS_PIN`, `CE_PIN`, `RESET_PIN1`, `RESET_PIN2`).
//!
//! # Supported Boards
//!
//! - SAMD21 Xplained Pro with WINC1500 Xplained on EXT1
//!
//! # Missing Pins
//!
//! Every identifier is a required associated constant, so a board that leaves
//! one out is rejected by the compiler instead of silently falling back to a
//! default:
//!
//! ```compile_fail
//! use ph_winc1500::boards::{BoardPins, PinId, Port};
//!
//! struct HalfWired;
//!
//! impl BoardPins for HalfWired {
//!     const CS_PIN: PinId = PinId::gpio(Port::A, 5);
//!     const CE_PIN: PinId = PinId::gpio(Port::B, 5);
//!     const RESET_PIN1: PinId = PinId::gpio(Port::B, 6);
//!     // RESET_PIN2 missing
//! }
//! ```
//!
//! A complete board compiles:
//!
//! ```
//! use ph_winc1500::boards::{BoardPins, PinId, Port};
//!
//! struct Custom;
//!
//! impl BoardPins for Custom {
//!     const NAME: &'static str = "custom carrier";
//!     const CS_PIN: PinId = PinId::gpio(Port::A, 14);
//!     const CE_PIN: PinId = PinId::gpio(Port::A, 15);
//!     const RESET_PIN1: PinId = PinId::gpio(Port::A, 16);
//!     const RESET_PIN2: PinId = PinId::gpio(Port::A, 17);
//! }
//!
//! assert_eq!(Custom::CS_PIN.pin(), 14);
//! ```

#[cfg(feature = "samd21-xpro")]
#[cfg_attr(docsrs, doc(cfg(feature = "samd21-xpro")))]
pub mod samd21_xpro;

// =============================================================================
// Pin Identifiers
// =============================================================================

/// GPIO port group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Port A
    A = 0,
    /// Port B
    B = 1,
}

/// Board pin identifier.
///
/// Encoded the way Atmel START's `GPIO(port, pin)` macro does:
/// `port * 32 + pin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    /// Pins per port group.
    pub const PINS_PER_PORT: u8 = 32;

    /// Identify `pin` within `port`.
    ///
    /// # Panics
    ///
    /// Panics if `pin` is 32 or above. In a `const` item this is a build error.
    ///
    /// ```compile_fail
    /// use ph_winc1500::boards::{PinId, Port};
    /// const BAD: PinId = PinId::gpio(Port::A, 40);
    /// let _ = BAD.raw();
    /// ```
    #[must_use]
    pub const fn gpio(port: Port, pin: u8) -> Self {
        assert!(pin < Self::PINS_PER_PORT, "pin number out of range for port");
        Self(port as u8 * Self::PINS_PER_PORT + pin)
    }

    /// Raw encoded identifier (`port * 32 + pin`).
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Port group.
    pub const fn port(self) -> Port {
        if self.0 < Self::PINS_PER_PORT {
            Port::A
        } else {
            Port::B
        }
    }

    /// Pin number within the port group.
    #[inline]
    pub const fn pin(self) -> u8 {
        self.0 % Self::PINS_PER_PORT
    }
}

impl core::fmt::Display for PinId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let port = match self.port() {
            Port::A => 'A',
            Port::B => 'B',
        };
        write!(f, "P{port}{:02}", self.pin())
    }
}

// =============================================================================
// Board Trait
// =============================================================================

/// Pin identifiers a board must supply for the WINC1500 control lines.
pub trait BoardPins {
    /// Human-readable board name.
    const NAME: &'static str = "custom board";

    /// SPI chip-select line to the module.
    const CS_PIN: PinId;

    /// Chip-enable line (module power control).
    const CE_PIN: PinId;

    /// First reset line (active low).
    const RESET_PIN1: PinId;

    /// Second reset line (active low).
    const RESET_PIN2: PinId;
}
