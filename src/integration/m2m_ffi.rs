//! C ABI seam to the vendor WINC1500 host driver.
//!
//! When the `ffi` feature is enabled the crate links against the vendor's
//! `m2m_wifi` stack and BSP, and exports `wifi_init` with the C signature
//! firmware already calls:
//!
//! ```c
//! void wifi_init(tstrWifiInitParam *params);
//! ```
//!
//! # Linking
//!
//! The application must link the vendor driver sources (`m2m_wifi.c`,
//! `nm_bsp_*.c` and friends). The BSP reads the pin constants through its own
//! configuration header; use [`winc_pin_config!`](crate::winc_pin_config) on
//! the Rust side to keep both in sync.

use core::ffi::c_void;
use core::marker::{PhantomData, PhantomPinned};

use crate::driver::{DriverStatus, WifiDriver};

/// Opaque driver initialization parameters (`tstrWifiInitParam`).
///
/// Defined by the vendor stack. Only ever handled through a pointer.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct tstrWifiInitParam {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

unsafe extern "C" {
    fn nm_bsp_init() -> i8;
    fn m2m_wifi_init(param: *mut tstrWifiInitParam) -> i8;
    fn m2m_wifi_deinit(arg: *mut c_void) -> i8;
}

/// [`WifiDriver`] backed by the vendor C stack.
///
/// Pair it with [`Winc`](crate::Winc) when Rust owns the control lines; the
/// vendor BSP's own reset (`nm_bsp_init`) is then not called.
#[derive(Debug)]
pub struct M2mWifi {
    _private: (),
}

impl M2mWifi {
    /// Handle to the linked C stack.
    ///
    /// # Safety
    ///
    /// The vendor driver must be linked and only one handle may be in use.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl WifiDriver for M2mWifi {
    type InitParams = tstrWifiInitParam;

    fn init(&mut self, params: &mut tstrWifiInitParam) -> Result<(), DriverStatus> {
        // SAFETY: `params` is a live exclusive reference; the stack is linked per `new`.
        DriverStatus::check(unsafe { m2m_wifi_init(params) })
    }

    fn deinit(&mut self) -> Result<(), DriverStatus> {
        // SAFETY: the argument is reserved by the vendor API and must be null.
        DriverStatus::check(unsafe { m2m_wifi_deinit(core::ptr::null_mut()) })
    }
}

/// Start the Wi-Fi subsystem from C.
///
/// Runs the vendor BSP init (pin setup and chip reset) and then
/// `m2m_wifi_init(params)`. Returns nothing; failures are logged when the
/// `defmt` feature is on. A null `params` is ignored.
///
/// # Safety
///
/// `params` must be null or point to a valid, initialized
/// `tstrWifiInitParam` that is not accessed elsewhere during the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wifi_init(params: *mut tstrWifiInitParam) {
    if params.is_null() {
        #[cfg(feature = "defmt")]
        defmt::warn!("wifi_init called with null params");
        return;
    }

    // SAFETY: vendor BSP is linked; it takes no arguments.
    if let Err(_status) = DriverStatus::check(unsafe { nm_bsp_init() }) {
        #[cfg(feature = "defmt")]
        defmt::warn!("nm_bsp_init failed: {}", _status);
        return;
    }

    // SAFETY: non-null and valid per the caller contract.
    if let Err(_status) = DriverStatus::check(unsafe { m2m_wifi_init(params) }) {
        #[cfg(feature = "defmt")]
        defmt::warn!("m2m_wifi_init failed: {}", _status);
    }
}

// C prototype: `void wifi_init(tstrWifiInitParam *params);`
const _: unsafe extern "C" fn(*mut tstrWifiInitParam) = wifi_init;

#[cfg(test)]
#[allow(clippy::std_instead_of_core)]
mod tests {
    extern crate std;

    use core::sync::atomic::{AtomicI8, AtomicU32, Ordering};
    use std::sync::Mutex;

    use super::*;

    // Host stand-ins for the vendor symbols
    static BSP_STATUS: AtomicI8 = AtomicI8::new(0);
    static INIT_STATUS: AtomicI8 = AtomicI8::new(0);
    static BSP_CALLS: AtomicU32 = AtomicU32::new(0);
    static INIT_CALLS: AtomicU32 = AtomicU32::new(0);
    static DEINIT_CALLS: AtomicU32 = AtomicU32::new(0);
    static LOCK: Mutex<()> = Mutex::new(());

    #[unsafe(no_mangle)]
    extern "C" fn nm_bsp_init() -> i8 {
        BSP_CALLS.fetch_add(1, Ordering::SeqCst);
        BSP_STATUS.load(Ordering::SeqCst)
    }

    #[unsafe(no_mangle)]
    extern "C" fn m2m_wifi_init(_param: *mut tstrWifiInitParam) -> i8 {
        INIT_CALLS.fetch_add(1, Ordering::SeqCst);
        INIT_STATUS.load(Ordering::SeqCst)
    }

    #[unsafe(no_mangle)]
    extern "C" fn m2m_wifi_deinit(_arg: *mut c_void) -> i8 {
        DEINIT_CALLS.fetch_add(1, Ordering::SeqCst);
        0
    }

    fn reset(bsp: i8, init: i8) {
        BSP_STATUS.store(bsp, Ordering::SeqCst);
        INIT_STATUS.store(init, Ordering::SeqCst);
        BSP_CALLS.store(0, Ordering::SeqCst);
        INIT_CALLS.store(0, Ordering::SeqCst);
        DEINIT_CALLS.store(0, Ordering::SeqCst);
    }

    fn fake_params() -> *mut tstrWifiInitParam {
        // The stand-in never dereferences it
        core::ptr::NonNull::<tstrWifiInitParam>::dangling().as_ptr()
    }

    #[test]
    fn exported_wifi_init_runs_bsp_then_stack() {
        let _guard = LOCK.lock().unwrap();
        reset(0, 0);

        unsafe { super::wifi_init(fake_params()) };

        assert_eq!(BSP_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exported_wifi_init_matches_c_prototype() {
        let entry: unsafe extern "C" fn(*mut tstrWifiInitParam) = super::wifi_init;

        let _guard = LOCK.lock().unwrap();
        reset(0, -16);

        // Failure is swallowed; the caller gets nothing back
        let () = unsafe { entry(fake_params()) };

        assert_eq!(BSP_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exported_wifi_init_ignores_null() {
        let _guard = LOCK.lock().unwrap();
        reset(0, 0);

        unsafe { super::wifi_init(core::ptr::null_mut()) };

        assert_eq!(BSP_CALLS.load(Ordering::SeqCst), 0);
        assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn bsp_failure_skips_stack_init() {
        let _guard = LOCK.lock().unwrap();
        reset(-17, 0);

        unsafe { super::wifi_init(fake_params()) };

        assert_eq!(BSP_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn m2m_driver_maps_status() {
        let _guard = LOCK.lock().unwrap();
        reset(0, -16);

        let mut stack = unsafe { M2mWifi::new() };
        let params = unsafe { &mut *fake_params() };

        assert_eq!(stack.init(params), Err(DriverStatus::Init));
        assert_eq!(stack.deinit(), Ok(()));
        assert_eq!(DEINIT_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(BSP_CALLS.load(Ordering::SeqCst), 0);
    }
}
