//! External Stack Integrations
//!
//! This module provides integrations with code outside the crate:
//!
//! - **m2m_wifi C stack** (`m2m_ffi`): Links the vendor WINC1500 host driver
//!   - Opaque `tstrWifiInitParam`
//!   - [`WifiDriver`](crate::WifiDriver) implementation over the C calls
//!   - Exported `wifi_init(tstrWifiInitParam *)` for C firmware
//!   - Requires `ffi` feature
//!
//! # Feature Flags
//!
//! - `ffi`: Enables the vendor C integration (`m2m_ffi` submodule)
//!
//! # Example
//!
//! ```ignore
//! use ph_winc1500::integration::m2m_ffi::M2mWifi;
//!
//! let stack = unsafe { M2mWifi::new() };
//! let mut winc = Winc::new(pins, stack, delay);
//! winc.wifi_init(params);
//! ```

#[cfg(feature = "ffi")]
pub mod m2m_ffi;

#[cfg(feature = "ffi")]
pub use m2m_ffi::{M2mWifi, tstrWifiInitParam};
