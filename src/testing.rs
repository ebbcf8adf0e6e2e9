//! Testing utilities and mock implementations
//!
//! This module provides mock pins, a mock delay and a mock Wi-Fi driver that
//! all write into one shared [`Trace`], so tests can assert the exact order
//! of pin writes, delays and driver calls.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::driver::{DriverStatus, WifiDriver};
use crate::hal::gpio::WincPins;
use crate::pins::PinRole;

// =============================================================================
// Shared Trace
// =============================================================================

/// One observable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pin driven (`true` = high)
    Set(PinRole, bool),
    /// Delay in nanoseconds
    DelayNs(u64),
    /// `WifiDriver::init` called with the given params tag
    DriverInit(u32),
    /// `WifiDriver::deinit` called
    DriverDeinit,
}

/// Ordered event log shared between mocks.
#[derive(Debug, Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// =============================================================================
// Mock Pin
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that logs every write, or rejects writes once its budget runs out.
#[derive(Debug)]
pub struct MockPin {
    role: PinRole,
    trace: Trace,
    budget: Option<u32>,
}

impl MockPin {
    pub fn new(role: PinRole, trace: &Trace) -> Self {
        Self {
            role,
            trace: trace.clone(),
            budget: None,
        }
    }

    pub fn failing(role: PinRole, trace: &Trace) -> Self {
        Self::failing_after(role, trace, 0)
    }

    /// Accepts `writes` writes, then rejects every later one.
    pub fn failing_after(role: PinRole, trace: &Trace, writes: u32) -> Self {
        Self {
            role,
            trace: trace.clone(),
            budget: Some(writes),
        }
    }

    pub fn role(&self) -> PinRole {
        self.role
    }

    fn write(&mut self, high: bool) -> Result<(), MockPinError> {
        if let Some(left) = self.budget.as_mut() {
            if *left == 0 {
                return Err(MockPinError);
            }
            *left -= 1;
        }
        self.trace.push(Event::Set(self.role, high));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

pub type MockPins = WincPins<MockPin, MockPin, MockPin, MockPin>;

/// All four lines, none failing.
pub fn mock_pins(trace: &Trace) -> MockPins {
    WincPins::new(
        MockPin::new(PinRole::ChipSelect, trace),
        MockPin::new(PinRole::ChipEnable, trace),
        MockPin::new(PinRole::Reset1, trace),
        MockPin::new(PinRole::Reset2, trace),
    )
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Delay that records the requested duration instead of sleeping.
#[derive(Debug)]
pub struct MockDelay {
    trace: Trace,
}

impl MockDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Event::DelayNs(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.trace.push(Event::DelayNs(u64::from(us) * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.push(Event::DelayNs(u64::from(ms) * 1_000_000));
    }
}

// =============================================================================
// Mock Wi-Fi Driver
// =============================================================================

/// Stand-in for the driver's init parameter block.
#[derive(Debug, Default)]
pub struct MockParams {
    /// Identifies the block in the trace
    pub tag: u32,
    /// Incremented by the driver on each init
    pub seen: u32,
}

/// Wi-Fi driver that logs calls and returns scripted statuses.
#[derive(Debug)]
pub struct MockDriver {
    trace: Trace,
    init_status: Result<(), DriverStatus>,
    deinit_status: Result<(), DriverStatus>,
}

impl MockDriver {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            init_status: Ok(()),
            deinit_status: Ok(()),
        }
    }

    pub fn failing_init(trace: &Trace, status: DriverStatus) -> Self {
        Self {
            init_status: Err(status),
            ..Self::new(trace)
        }
    }

    pub fn set_init_status(&mut self, status: Result<(), DriverStatus>) {
        self.init_status = status;
    }

    pub fn set_deinit_status(&mut self, status: Result<(), DriverStatus>) {
        self.deinit_status = status;
    }
}

impl WifiDriver for MockDriver {
    type InitParams = MockParams;

    fn init(&mut self, params: &mut MockParams) -> Result<(), DriverStatus> {
        params.seen += 1;
        self.trace.push(Event::DriverInit(params.tag));
        self.init_status
    }

    fn deinit(&mut self) -> Result<(), DriverStatus> {
        self.trace.push(Event::DriverDeinit);
        self.deinit_status
    }
}

// =============================================================================
// Null Parts (for `Send` statics)
// =============================================================================

/// Driver whose init never fails.
#[cfg(feature = "critical-section")]
#[derive(Debug, Default)]
pub struct NullDriver;

#[cfg(feature = "critical-section")]
impl WifiDriver for NullDriver {
    type InitParams = ();

    fn init(&mut self, _params: &mut ()) -> Result<(), DriverStatus> {
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), DriverStatus> {
        Ok(())
    }
}

/// Pin that never fails and records nothing.
#[cfg(feature = "critical-section")]
#[derive(Debug, Default)]
pub struct NullPin;

#[cfg(feature = "critical-section")]
impl ErrorType for NullPin {
    type Error = core::convert::Infallible;
}

#[cfg(feature = "critical-section")]
impl OutputPin for NullPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Delay that returns immediately.
#[cfg(feature = "critical-section")]
#[derive(Debug, Default)]
pub struct NullDelay;

#[cfg(feature = "critical-section")]
impl DelayNs for NullDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
