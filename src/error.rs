//! Error types for WINC1500 bring-up
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Bring-up state and control-line failures
//! - [`DriverStatus`]: Status codes reported by the vendor Wi-Fi stack
//!
//! The unified [`Error`] enum wraps both domains and additionally records
//! which control line failed when a GPIO write is rejected by the HAL.

use crate::driver::DriverStatus;
use crate::pins::PinRole;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Bring-up and control-line errors
///
/// These errors occur before or around the hand-off to the vendor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Wi-Fi stack already initialized
    AlreadyInitialized,
    /// Operation requires an initialized Wi-Fi stack
    NotInitialized,
    /// GPIO write to a control line failed
    GpioError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::AlreadyInitialized => "already initialized",
            ConfigError::NotInitialized => "not initialized",
            ConfigError::GpioError => "GPIO configuration error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::AlreadyInitialized)) => { /* ... */ }
///     Err(Error::Pin(PinRole::ChipEnable)) => { /* ... */ }
///     Err(Error::Driver(DriverStatus::SpiFail)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// GPIO write failed on the given control line
    Pin(PinRole),
    /// Vendor driver reported a failure status
    Driver(DriverStatus),
}

impl Error {
    /// Collapse the error into its configuration domain, if any.
    ///
    /// Pin failures count as [`ConfigError::GpioError`].
    #[must_use]
    pub const fn config(&self) -> Option<ConfigError> {
        match self {
            Error::Config(e) => Some(*e),
            Error::Pin(_) => Some(ConfigError::GpioError),
            Error::Driver(_) => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Pin(role) => write!(f, "gpio: {} write failed", role.as_str()),
            Error::Driver(status) => write!(f, "driver: {} ({})", status.as_str(), status.to_raw()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriverStatus> for Error {
    fn from(status: DriverStatus) -> Self {
        Error::Driver(status)
    }
}

/// Result type alias for bring-up operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
