//! Hardware Abstraction Layer
//!
//! This module drives the WINC1500 control lines through `embedded-hal`
//! traits, so any HAL that provides push-pull outputs can host the module.
//!
//! # Modules
//!
//! - [`gpio`]: Control-line bundle addressed by pin role
//! - [`reset`]: Initial pin levels and the chip reset pulse
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL (e.g., `atsamd_hal::delay::Delay`).

pub mod gpio;
pub mod reset;

// Re-export commonly used types
pub use gpio::WincPins;
pub use reset::{ResetController, ResetState};
