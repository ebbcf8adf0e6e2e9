//! Control-line GPIO bundle
//!
//! The board-side identifiers in [`crate::boards`] say *where* the WINC1500
//! control lines are. At runtime the HAL hands over one
//! [`embedded_hal::digital::OutputPin`] per line; [`WincPins`] keeps them in
//! role order so the rest of the crate can drive a line by [`PinRole`].
//!
//! | Role         | Idle level | Active level |
//! |--------------|------------|--------------|
//! | Chip select  | High       | Low          |
//! | Chip enable  | Low        | High         |
//! | Reset 1      | Low (held) | High (run)   |
//! | Reset 2      | Low (held) | High (run)   |

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{Error, Result};
use crate::pins::PinRole;

/// The four WINC1500 control lines.
///
/// # Example
///
/// ```ignore
/// let pins = WincPins::new(
///     pins.pa05.into_push_pull_output(),
///     pins.pb05.into_push_pull_output(),
///     pins.pb06.into_push_pull_output(),
///     pins.pb07.into_push_pull_output(),
/// );
/// ```
#[derive(Debug)]
pub struct WincPins<CS, CE, RST1, RST2> {
    /// SPI chip select
    pub chip_select: CS,
    /// Chip enable
    pub chip_enable: CE,
    /// First reset line
    pub reset1: RST1,
    /// Second reset line
    pub reset2: RST2,
}

impl<CS, CE, RST1, RST2> WincPins<CS, CE, RST1, RST2>
where
    CS: OutputPin,
    CE: OutputPin,
    RST1: OutputPin,
    RST2: OutputPin,
{
    /// Bundle the control lines in role order.
    pub const fn new(chip_select: CS, chip_enable: CE, reset1: RST1, reset2: RST2) -> Self {
        Self {
            chip_select,
            chip_enable,
            reset1,
            reset2,
        }
    }

    /// Drive the line for `role` to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] naming the role if the HAL rejects the write.
    pub fn set(&mut self, role: PinRole, state: PinState) -> Result<()> {
        match role {
            PinRole::ChipSelect => drive(&mut self.chip_select, role, state),
            PinRole::ChipEnable => drive(&mut self.chip_enable, role, state),
            PinRole::Reset1 => drive(&mut self.reset1, role, state),
            PinRole::Reset2 => drive(&mut self.reset2, role, state),
        }
    }

    /// Drive both reset lines to `state`, reset 1 first.
    pub fn set_resets(&mut self, state: PinState) -> Result<()> {
        self.set(PinRole::Reset1, state)?;
        self.set(PinRole::Reset2, state)
    }

    /// Give the pins back to the caller.
    pub fn release(self) -> (CS, CE, RST1, RST2) {
        (self.chip_select, self.chip_enable, self.reset1, self.reset2)
    }
}

fn drive<P: OutputPin>(pin: &mut P, role: PinRole, state: PinState) -> Result<()> {
    pin.set_state(state).map_err(|_| Error::Pin(role))
}
