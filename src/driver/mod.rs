//! Core driver components for WINC1500 bring-up.
//!
//! - [`stack`] - The [`WifiDriver`] seam to the vendor Wi-Fi stack
//! - [`status`] - Vendor status codes
//! - [`winc`] - The [`Winc`] bring-up driver and its `wifi_init` entry point
//!
//! # Example
//!
//! ```ignore
//! use ph_winc1500::driver::{Winc, WifiDriver};
//!
//! let mut winc = Winc::new(pins, stack, delay);
//! winc.wifi_init(&mut params);
//! ```

// Submodules
pub mod stack;
pub mod status;
pub mod winc;

// Re-exports for convenience
pub use stack::WifiDriver;
pub use status::DriverStatus;
pub use winc::{State, Winc};
