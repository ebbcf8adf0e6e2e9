//! WINC1500 bring-up driver
//!
//! [`Winc`] owns the control lines, a delay provider and the vendor Wi-Fi
//! stack, and exposes the single startup entry point, [`Winc::wifi_init`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::stack::WifiDriver;
use crate::error::{ConfigError, Error, Result};
use crate::hal::gpio::WincPins;
use crate::hal::reset::{ResetController, ResetState};

// =============================================================================
// State
// =============================================================================

/// Bring-up state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Wi-Fi stack not started
    #[default]
    Uninitialized,
    /// Chip out of reset and the stack accepted its parameters
    Initialized,
    /// Last bring-up attempt failed (see [`Winc::last_error`])
    Failed,
}

// =============================================================================
// Driver
// =============================================================================

/// WINC1500 module bring-up
///
/// # Example
///
/// ```ignore
/// use ph_winc1500::{Winc, WincPins};
///
/// let pins = WincPins::new(cs, ce, reset1, reset2);
/// let mut winc = Winc::new(pins, stack, delay);
///
/// let mut params = InitParams::with_callback(wifi_cb);
/// winc.wifi_init(&mut params);
/// ```
#[derive(Debug)]
pub struct Winc<W, CS, CE, RST1, RST2, D> {
    control: ResetController<CS, CE, RST1, RST2, D>,
    driver: W,
    state: State,
    last_error: Option<Error>,
}

impl<W, CS, CE, RST1, RST2, D> Winc<W, CS, CE, RST1, RST2, D>
where
    W: WifiDriver,
    CS: OutputPin,
    CE: OutputPin,
    RST1: OutputPin,
    RST2: OutputPin,
    D: DelayNs,
{
    /// Create the bring-up driver. Nothing is driven until
    /// [`wifi_init`](Self::wifi_init).
    pub fn new(pins: WincPins<CS, CE, RST1, RST2>, driver: W, delay: D) -> Self {
        Self {
            control: ResetController::new(pins, delay),
            driver,
            state: State::Uninitialized,
            last_error: None,
        }
    }

    /// Start the Wi-Fi subsystem.
    ///
    /// Configures the control lines, pulses the chip through reset and hands
    /// `params` to the Wi-Fi stack. `params` is forwarded as-is.
    ///
    /// Nothing is returned: a failure is logged and leaves the driver in
    /// [`State::Failed`] with the cause in [`last_error`](Self::last_error).
    /// Use [`try_wifi_init`](Self::try_wifi_init) to receive the error.
    pub fn wifi_init(&mut self, params: &mut W::InitParams) {
        if let Err(_err) = self.try_wifi_init(params) {
            #[cfg(feature = "defmt")]
            defmt::warn!("wifi_init failed: {}", _err);
        }
    }

    /// Start the Wi-Fi subsystem, returning any failure.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::AlreadyInitialized`] if the stack is already running;
    ///   the hardware is not touched and the state is unchanged.
    /// - [`Error::Pin`] if a control line could not be driven.
    /// - [`Error::Driver`] if the Wi-Fi stack rejected the parameters.
    pub fn try_wifi_init(&mut self, params: &mut W::InitParams) -> Result<()> {
        if self.state == State::Initialized {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        let result = self.bring_up(params);
        match result {
            Ok(()) => {
                self.state = State::Initialized;
                self.last_error = None;

                #[cfg(feature = "defmt")]
                defmt::info!("WINC1500 Wi-Fi stack initialized");
            }
            Err(err) => {
                self.state = State::Failed;
                self.last_error = Some(err);
            }
        }
        result
    }

    fn bring_up(&mut self, params: &mut W::InitParams) -> Result<()> {
        self.control.init_pins()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("WINC control lines at idle levels");

        self.control.reset()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("WINC out of reset");

        self.driver.init(params)?;
        Ok(())
    }

    /// Stop the Wi-Fi stack and hold the chip in reset.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotInitialized`] unless the stack is running.
    /// - [`Error::Driver`] if the stack refused to stop; the chip is left
    ///   running and the state stays `Initialized`.
    /// - [`Error::Pin`] if the reset lines could not be driven. The stack is
    ///   already stopped, so the state is `Uninitialized` and
    ///   [`reset_state`](Self::reset_state) reports `Unconfigured`.
    ///
    /// Driver and pin failures are also kept in
    /// [`last_error`](Self::last_error).
    pub fn deinit(&mut self) -> Result<()> {
        if self.state != State::Initialized {
            return Err(ConfigError::NotInitialized.into());
        }

        let result = self.shut_down();
        if let Err(err) = result {
            self.last_error = Some(err);
        }
        result
    }

    fn shut_down(&mut self) -> Result<()> {
        self.driver.deinit()?;
        self.state = State::Uninitialized;
        self.control.hold_in_reset()?;

        #[cfg(feature = "defmt")]
        defmt::info!("WINC1500 Wi-Fi stack stopped");

        Ok(())
    }

    /// Get current bring-up state
    pub fn state(&self) -> State {
        self.state
    }

    /// Check if the Wi-Fi stack is running
    pub fn is_initialized(&self) -> bool {
        self.state == State::Initialized
    }

    /// Cause of the last failed bring-up or shutdown, cleared by a
    /// successful bring-up.
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// Control-line state
    pub fn reset_state(&self) -> ResetState {
        self.control.state()
    }

    /// Access the control-line driver mutably (e.g. for bus chip select)
    pub fn control_mut(&mut self) -> &mut ResetController<CS, CE, RST1, RST2, D> {
        &mut self.control
    }

    /// Access the Wi-Fi stack
    pub fn driver(&self) -> &W {
        &self.driver
    }

    /// Access the Wi-Fi stack mutably
    pub fn driver_mut(&mut self) -> &mut W {
        &mut self.driver
    }

    /// Give back pins, Wi-Fi stack and delay provider.
    pub fn release(self) -> (WincPins<CS, CE, RST1, RST2>, W, D) {
        let (pins, delay) = self.control.release();
        (pins, self.driver, delay)
    }
}
