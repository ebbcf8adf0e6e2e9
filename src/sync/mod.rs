//! Synchronization Support
//!
//! ISR-safe ownership of the bring-up driver:
//!
//! - [`CriticalSectionCell`] - ISR-safe interior mutability
//! - [`SharedWinc`] - Static slot holding a [`Winc`](crate::Winc)
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ph_winc1500::sync::SharedWinc;
//!
//! static WINC: SharedWinc<Stack, Cs, Ce, Rst1, Rst2, Delay> = SharedWinc::new();
//!
//! fn main() {
//!     WINC.put(Winc::new(pins, stack, delay));
//!     WINC.with(|winc| winc.wifi_init(&mut params));
//! }
//!
//! #[interrupt]
//! fn EIC() {
//!     WINC.with(|winc| winc.driver_mut().handle_events());
//! }
//! ```

mod primitives;
mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::SharedWinc;
