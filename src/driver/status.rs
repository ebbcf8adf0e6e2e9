//! Vendor driver status codes.
//!
//! The WINC1500 host driver reports every call as a signed 8-bit status:
//! zero (`M2M_SUCCESS`) or a positive value on success, a negative
//! `M2M_ERR_*` code on failure. [`DriverStatus`] names the failure codes.

use crate::internal::constants::M2M_SUCCESS;

/// Failure status reported by the vendor Wi-Fi stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverStatus {
    /// `M2M_ERR_SEND` (-12)
    Send,
    /// `M2M_ERR_RCV` (-13)
    Receive,
    /// `M2M_ERR_MEM_ALLOC` (-14)
    MemAlloc,
    /// `M2M_ERR_TIME_OUT` (-15)
    Timeout,
    /// `M2M_ERR_INIT` (-16)
    Init,
    /// `M2M_ERR_BUS_FAIL` (-17)
    BusFail,
    /// `M2M_NOT_YET` (-18)
    NotYet,
    /// `M2M_ERR_FIRMWARE` (-19)
    Firmware,
    /// `M2M_SPI_FAIL` (-20)
    SpiFail,
    /// `M2M_ERR_FIRMWARE_bURN` (-21)
    FirmwareBurn,
    /// `M2M_ACK` (-22)
    Ack,
    /// `M2M_ERR_FAIL` (-23)
    Fail,
    /// `M2M_ERR_FW_VER_MISMATCH` (-24)
    FirmwareVersionMismatch,
    /// `M2M_ERR_SCAN_IN_PROGRESS` (-25)
    ScanInProgress,
    /// `M2M_ERR_INVALID_ARG` (-26)
    InvalidArg,
    /// Negative code this crate does not name
    Unknown(i8),
}

impl DriverStatus {
    /// Map a raw status to `Ok(())` or the failure it names.
    ///
    /// Zero and positive values are success.
    pub const fn check(raw: i8) -> Result<(), DriverStatus> {
        if raw >= M2M_SUCCESS {
            Ok(())
        } else {
            Err(Self::from_raw(raw))
        }
    }

    /// Name a negative raw status.
    ///
    /// Codes without a dedicated variant are kept in [`DriverStatus::Unknown`].
    /// `raw` must be negative; use [`check`](Self::check) for values that may
    /// be success codes.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `raw` is zero or positive.
    pub const fn from_raw(raw: i8) -> Self {
        debug_assert!(raw < M2M_SUCCESS, "success code is not a failure status");
        match raw {
            -12 => DriverStatus::Send,
            -13 => DriverStatus::Receive,
            -14 => DriverStatus::MemAlloc,
            -15 => DriverStatus::Timeout,
            -16 => DriverStatus::Init,
            -17 => DriverStatus::BusFail,
            -18 => DriverStatus::NotYet,
            -19 => DriverStatus::Firmware,
            -20 => DriverStatus::SpiFail,
            -21 => DriverStatus::FirmwareBurn,
            -22 => DriverStatus::Ack,
            -23 => DriverStatus::Fail,
            -24 => DriverStatus::FirmwareVersionMismatch,
            -25 => DriverStatus::ScanInProgress,
            -26 => DriverStatus::InvalidArg,
            other => DriverStatus::Unknown(other),
        }
    }

    /// Raw status code as the vendor stack reports it.
    pub const fn to_raw(self) -> i8 {
        match self {
            DriverStatus::Send => -12,
            DriverStatus::Receive => -13,
            DriverStatus::MemAlloc => -14,
            DriverStatus::Timeout => -15,
            DriverStatus::Init => -16,
            DriverStatus::BusFail => -17,
            DriverStatus::NotYet => -18,
            DriverStatus::Firmware => -19,
            DriverStatus::SpiFail => -20,
            DriverStatus::FirmwareBurn => -21,
            DriverStatus::Ack => -22,
            DriverStatus::Fail => -23,
            DriverStatus::FirmwareVersionMismatch => -24,
            DriverStatus::ScanInProgress => -25,
            DriverStatus::InvalidArg => -26,
            DriverStatus::Unknown(raw) => raw,
        }
    }

    /// Returns a human-readable description of the status
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Send => "send failed",
            DriverStatus::Receive => "receive failed",
            DriverStatus::MemAlloc => "memory allocation failed",
            DriverStatus::Timeout => "timed out",
            DriverStatus::Init => "initialization failed",
            DriverStatus::BusFail => "bus failure",
            DriverStatus::NotYet => "not yet available",
            DriverStatus::Firmware => "firmware error",
            DriverStatus::SpiFail => "SPI failure",
            DriverStatus::FirmwareBurn => "firmware burn failed",
            DriverStatus::Ack => "ack error",
            DriverStatus::Fail => "generic failure",
            DriverStatus::FirmwareVersionMismatch => "firmware version mismatch",
            DriverStatus::ScanInProgress => "scan in progress",
            DriverStatus::InvalidArg => "invalid argument",
            DriverStatus::Unknown(_) => "unknown status",
        }
    }
}

impl core::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
