//! Centralized Constants
//!
//! This module provides a single source of truth for the timing values used
//! while power-sequencing the WINC1500 module.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Reset timing**: Hold and settle times of the chip-enable/reset pulse
//! - **Driver status**: Raw status codes returned by the vendor stack

// =============================================================================
// Reset Timing
// =============================================================================

/// Time both reset lines and chip-enable are held low (milliseconds)
pub const CHIP_RESET_HOLD_MS: u32 = 1;

/// Time between raising chip-enable and releasing reset (milliseconds)
pub const CHIP_ENABLE_SETTLE_MS: u32 = 10;

/// Time after releasing reset before the bus is used (milliseconds)
pub const RESET_RELEASE_SETTLE_MS: u32 = 10;

// =============================================================================
// Driver Status
// =============================================================================

/// Status code the vendor stack returns on success (`M2M_SUCCESS`)
pub const M2M_SUCCESS: i8 = 0;
