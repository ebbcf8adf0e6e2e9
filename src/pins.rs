//! WINC1500 pin-role mapping.
//!
//! The Wi-Fi module needs four discrete control lines. Board support names
//! them `CS_PIN`, `CE_PIN`, `RESET_PIN1` and `RESET_PIN2` (see
//! [`BoardPins`]); the driver side refers to them by fixed names:
//!
//! | Role          | Driver-facing name            | Board name   |
//! |---------------|-------------------------------|--------------|
//! | Chip select   | `CONF_WINC_PIN_CHIP_SELECT`   | `CS_PIN`     |
//! | Chip enable   | `CONF_WINC_PIN_CHIP_ENABLE`   | `CE_PIN`     |
//! | Reset line 1  | `CONF_WINC_PIN_RESET1`        | `RESET_PIN1` |
//! | Reset line 2  | `CONF_WINC_PIN_RESET2`        | `RESET_PIN2` |
//!
//! The mapping resolves entirely at build time. Use [`WincPinMap`] when the
//! board is a type parameter, or [`winc_pin_config!`](crate::winc_pin_config)
//! to emit the four names as plain constants in a module.

use core::marker::PhantomData;

use crate::boards::{BoardPins, PinId};

// =============================================================================
// Pin Roles
// =============================================================================

/// Logical control line of the Wi-Fi module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// SPI chip select (active low)
    ChipSelect,
    /// Chip enable (active high)
    ChipEnable,
    /// First reset line (active low)
    Reset1,
    /// Second reset line (active low)
    Reset2,
}

impl PinRole {
    /// All roles, in mapping order.
    pub const ALL: [PinRole; 4] = [
        PinRole::ChipSelect,
        PinRole::ChipEnable,
        PinRole::Reset1,
        PinRole::Reset2,
    ];

    /// Short role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PinRole::ChipSelect => "chip-select",
            PinRole::ChipEnable => "chip-enable",
            PinRole::Reset1 => "reset1",
            PinRole::Reset2 => "reset2",
        }
    }

    /// Driver-facing configuration name.
    #[must_use]
    pub const fn conf_name(&self) -> &'static str {
        match self {
            PinRole::ChipSelect => "CONF_WINC_PIN_CHIP_SELECT",
            PinRole::ChipEnable => "CONF_WINC_PIN_CHIP_ENABLE",
            PinRole::Reset1 => "CONF_WINC_PIN_RESET1",
            PinRole::Reset2 => "CONF_WINC_PIN_RESET2",
        }
    }
}

impl core::fmt::Display for PinRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Pin Map
// =============================================================================

/// Driver-facing names for a board's control lines.
///
/// Every constant is a plain alias of the board's identifier, so using
/// `WincPinMap::<B>::CONF_WINC_PIN_CHIP_SELECT` anywhere `B::CS_PIN` was used
/// yields the same value.
pub struct WincPinMap<B: BoardPins>(PhantomData<B>);

impl<B: BoardPins> WincPinMap<B> {
    /// Chip-select line.
    pub const CONF_WINC_PIN_CHIP_SELECT: PinId = B::CS_PIN;

    /// Chip-enable line.
    pub const CONF_WINC_PIN_CHIP_ENABLE: PinId = B::CE_PIN;

    /// First reset line.
    pub const CONF_WINC_PIN_RESET1: PinId = B::RESET_PIN1;

    /// Second reset line.
    pub const CONF_WINC_PIN_RESET2: PinId = B::RESET_PIN2;

    /// Every role with its resolved pin, in [`PinRole::ALL`] order.
    pub const ALL: [(PinRole, PinId); 4] = [
        (PinRole::ChipSelect, B::CS_PIN),
        (PinRole::ChipEnable, B::CE_PIN),
        (PinRole::Reset1, B::RESET_PIN1),
        (PinRole::Reset2, B::RESET_PIN2),
    ];

    /// Resolve a role to the board pin.
    #[must_use]
    pub const fn pin(role: PinRole) -> PinId {
        match role {
            PinRole::ChipSelect => Self::CONF_WINC_PIN_CHIP_SELECT,
            PinRole::ChipEnable => Self::CONF_WINC_PIN_CHIP_ENABLE,
            PinRole::Reset1 => Self::CONF_WINC_PIN_RESET1,
            PinRole::Reset2 => Self::CONF_WINC_PIN_RESET2,
        }
    }

    /// Find the role wired to `pin`, if any.
    pub fn role_of(pin: PinId) -> Option<PinRole> {
        Self::ALL
            .iter()
            .find(|(_, id)| *id == pin)
            .map(|(role, _)| *role)
    }
}

/// Emit the four driver-facing pin constants for a board type.
///
/// Expands to `pub const` items named `CONF_WINC_PIN_CHIP_SELECT`,
/// `CONF_WINC_PIN_CHIP_ENABLE`, `CONF_WINC_PIN_RESET1` and
/// `CONF_WINC_PIN_RESET2` in the invoking module, each resolved from the
/// board's [`BoardPins`] implementation.
///
/// # Examples
///
/// ```
/// use ph_winc1500::boards::{BoardPins, PinId, Port};
///
/// pub struct MyBoard;
///
/// impl BoardPins for MyBoard {
///     const CS_PIN: PinId = PinId::gpio(Port::A, 18);
///     const CE_PIN: PinId = PinId::gpio(Port::A, 19);
///     const RESET_PIN1: PinId = PinId::gpio(Port::A, 20);
///     const RESET_PIN2: PinId = PinId::gpio(Port::A, 21);
/// }
///
/// mod conf {
///     ph_winc1500::winc_pin_config!(super::MyBoard);
/// }
///
/// fn main() {
///     assert_eq!(conf::CONF_WINC_PIN_CHIP_SELECT, MyBoard::CS_PIN);
///     assert_eq!(conf::CONF_WINC_PIN_CHIP_ENABLE, MyBoard::CE_PIN);
///     assert_eq!(conf::CONF_WINC_PIN_RESET1, MyBoard::RESET_PIN1);
///     assert_eq!(conf::CONF_WINC_PIN_RESET2, MyBoard::RESET_PIN2);
/// }
/// ```
#[macro_export]
macro_rules! winc_pin_config {
    ($board:ty) => {
        /// Chip-select line of the WINC module.
        pub const CONF_WINC_PIN_CHIP_SELECT: $crate::boards::PinId =
            <$board as $crate::boards::BoardPins>::CS_PIN;
        /// Chip-enable line of the WINC module.
        pub const CONF_WINC_PIN_CHIP_ENABLE: $crate::boards::PinId =
            <$board as $crate::boards::BoardPins>::CE_PIN;
        /// First reset line of the WINC module.
        pub const CONF_WINC_PIN_RESET1: $crate::boards::PinId =
            <$board as $crate::boards::BoardPins>::RESET_PIN1;
        /// Second reset line of the WINC module.
        pub const CONF_WINC_PIN_RESET2: $crate::boards::PinId =
            <$board as $crate::boards::BoardPins>::RESET_PIN2;
    };
}
