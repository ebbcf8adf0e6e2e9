//! Wi-Fi stack seam.
//!
//! The WINC1500 host driver (`m2m_wifi`) is an external collaborator. This
//! crate only needs two things from it, both captured by [`WifiDriver`].

use super::status::DriverStatus;

/// Vendor Wi-Fi stack interface
///
/// Implement this for whatever drives the radio. With the `ffi` feature,
/// [`M2mWifi`](crate::integration::m2m_ffi::M2mWifi) forwards to the C stack.
///
/// # Example
///
/// ```ignore
/// struct Stack;
///
/// impl WifiDriver for Stack {
///     type InitParams = MyParams;
///
///     fn init(&mut self, params: &mut MyParams) -> Result<(), DriverStatus> {
///         DriverStatus::check(unsafe { my_stack_init(params) })
///     }
///
///     fn deinit(&mut self) -> Result<(), DriverStatus> {
///         Ok(())
///     }
/// }
/// ```
pub trait WifiDriver {
    /// Initialization parameters, defined entirely by the stack.
    ///
    /// The bring-up code forwards it untouched.
    type InitParams;

    /// Start the Wi-Fi stack.
    fn init(&mut self, params: &mut Self::InitParams) -> Result<(), DriverStatus>;

    /// Stop the Wi-Fi stack.
    fn deinit(&mut self) -> Result<(), DriverStatus>;
}

impl<T: WifiDriver + ?Sized> WifiDriver for &mut T {
    type InitParams = T::InitParams;

    fn init(&mut self, params: &mut Self::InitParams) -> Result<(), DriverStatus> {
        T::init(self, params)
    }

    fn deinit(&mut self) -> Result<(), DriverStatus> {
        T::deinit(self)
    }
}
