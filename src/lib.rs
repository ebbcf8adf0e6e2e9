//! WINC1500 Wi-Fi Module Bring-up
//!
//! A `no_std`, `no_alloc` Rust crate that maps the ATWINC1500 module's control
//! lines onto board pins and starts the vendor Wi-Fi stack.
//!
//! This crate is the seam between a board-support package and the WINC1500
//! host driver (`m2m_wifi`). It does not implement Wi-Fi, SPI transport or the
//! radio's own start-up; those stay in the vendor stack.
//!
//! # Architecture
//!
//! 1. **Board Layer** ([`boards`]): Board-side pin identifiers (`CS_PIN`, `CE_PIN`,
//!    `RESET_PIN1`, `RESET_PIN2`)
//! 2. **Mapping Layer** ([`pins`]): Driver-facing names (`CONF_WINC_PIN_*`)
//! 3. **HAL Layer** ([`hal`]): Control-line levels and the chip reset pulse
//! 4. **Driver Layer** ([`driver`]): [`Winc::wifi_init`] and the [`WifiDriver`] seam
//!
//! # Features
//!
//! - `samd21-xpro` (default): SAMD21 Xplained Pro pin constants in [`conf`]
//! - `defmt`: Enable defmt formatting and bring-up logging
//! - `critical-section`: Enable ISR-safe `SharedWinc` slot
//! - `ffi`: Link the vendor C stack and export `wifi_init` for C callers
//!
//! # Example
//!
//! ```ignore
//! use ph_winc1500::{Winc, WincPins};
//! use embedded_hal::delay::DelayNs;
//!
//! // Push-pull outputs from your HAL, in role order
//! let pins = WincPins::new(cs, ce, reset1, reset2);
//!
//! // Your WifiDriver implementation (or M2mWifi with the `ffi` feature)
//! let mut winc = Winc::new(pins, stack, delay);
//!
//! let mut params = InitParams::with_callback(wifi_cb);
//! winc.wifi_init(&mut params);
//!
//! if let Some(err) = winc.last_error() {
//!     // bring-up failed: control line or stack status
//! }
//! ```
//!
//! # Pin Constants
//!
//! The driver-facing names resolve at build time. A board that does not
//! define one of its four pin identifiers fails to compile; see [`boards`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels mirror the [lints] table in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod driver;
pub mod hal;
pub mod integration;
pub mod pins;

pub mod error;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use boards::{BoardPins, PinId, Port};
pub use driver::{DriverStatus, State, WifiDriver, Winc};
pub use error::{ConfigError, ConfigResult, Error, Result};
pub use hal::{ResetController, ResetState, WincPins};
pub use pins::{PinRole, WincPinMap};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedWinc;

// C entry point re-export
#[cfg(feature = "ffi")]
#[cfg_attr(docsrs, doc(cfg(feature = "ffi")))]
pub use integration::m2m_ffi::{M2mWifi, tstrWifiInitParam, wifi_init};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types and integration points.
pub mod constants {
    pub use crate::internal::constants::{
        // Reset timing
        CHIP_ENABLE_SETTLE_MS,
        CHIP_RESET_HOLD_MS,
        // Driver status
        M2M_SUCCESS,
        RESET_RELEASE_SETTLE_MS,
    };
}

/// Driver-facing pin constants for the board selected by Cargo feature.
///
/// ```
/// use ph_winc1500::BoardPins;
/// use ph_winc1500::boards::samd21_xpro::Samd21XplainedPro;
/// use ph_winc1500::conf::CONF_WINC_PIN_CHIP_SELECT;
///
/// assert_eq!(CONF_WINC_PIN_CHIP_SELECT, Samd21XplainedPro::CS_PIN);
/// ```
#[cfg(feature = "samd21-xpro")]
#[cfg_attr(docsrs, doc(cfg(feature = "samd21-xpro")))]
pub mod conf {
    crate::winc_pin_config!(crate::boards::samd21_xpro::Samd21XplainedPro);
}
