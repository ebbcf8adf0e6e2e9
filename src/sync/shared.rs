//! ISR-safe WINC holder using critical sections.

use super::primitives::CriticalSectionCell;
use crate::driver::Winc;

/// ISR-safe static slot for a [`Winc`].
///
/// Starts empty so it can live in a `static`; firmware moves the driver in
/// with [`put`](Self::put) once the HAL has handed over the pins. All access
/// goes through `critical_section::with()`.
///
/// # Example
///
/// ```ignore
/// static WINC: SharedWinc<Stack, Cs, Ce, Rst1, Rst2, Delay> = SharedWinc::new();
///
/// WINC.put(Winc::new(pins, stack, delay));
/// WINC.with(|winc| winc.wifi_init(&mut params));
/// ```
pub struct SharedWinc<W, CS, CE, RST1, RST2, D> {
    inner: CriticalSectionCell<Option<Winc<W, CS, CE, RST1, RST2, D>>>,
}

impl<W, CS, CE, RST1, RST2, D> SharedWinc<W, CS, CE, RST1, RST2, D> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Move a driver into the slot, returning any previous one.
    pub fn put(
        &self,
        winc: Winc<W, CS, CE, RST1, RST2, D>,
    ) -> Option<Winc<W, CS, CE, RST1, RST2, D>> {
        self.inner.replace(Some(winc))
    }

    /// Take the driver out, leaving the slot empty.
    pub fn take(&self) -> Option<Winc<W, CS, CE, RST1, RST2, D>> {
        self.inner.replace(None)
    }

    /// Check if a driver is stored.
    pub fn is_occupied(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access to the driver.
    ///
    /// Returns `None` if the slot is empty. Interrupts are disabled for the
    /// duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Winc<W, CS, CE, RST1, RST2, D>) -> R,
    {
        self.inner.with(|slot| slot.as_mut().map(f))
    }

    /// Like [`with`](Self::with), but also returns `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Winc<W, CS, CE, RST1, RST2, D>) -> R,
    {
        self.inner.try_with(|slot| slot.as_mut().map(f)).flatten()
    }
}

impl<W, CS, CE, RST1, RST2, D> Default for SharedWinc<W, CS, CE, RST1, RST2, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::State;
    use crate::hal::gpio::WincPins;
    use crate::testing::{
        MockDelay, MockDriver, MockParams, MockPin, NullDelay, NullDriver, NullPin, Trace,
        mock_pins,
    };

    type NullWinc = SharedWinc<NullDriver, NullPin, NullPin, NullPin, NullPin, NullDelay>;

    fn null_winc() -> Winc<NullDriver, NullPin, NullPin, NullPin, NullPin, NullDelay> {
        Winc::new(
            WincPins::new(NullPin, NullPin, NullPin, NullPin),
            NullDriver,
            NullDelay,
        )
    }

    #[test]
    fn empty_slot_runs_nothing() {
        let shared: NullWinc = SharedWinc::new();
        assert!(!shared.is_occupied());
        assert_eq!(shared.with(|winc| winc.state()), None);
    }

    #[test]
    fn static_slot_bring_up() {
        static WINC: NullWinc = SharedWinc::new();

        assert!(WINC.put(null_winc()).is_none());
        WINC.with(|winc| winc.wifi_init(&mut ()));

        assert_eq!(WINC.with(|winc| winc.state()), Some(State::Initialized));
        assert!(WINC.take().is_some());
        assert!(!WINC.is_occupied());
    }

    #[test]
    fn put_returns_previous_driver() {
        let shared: NullWinc = SharedWinc::default();
        shared.put(null_winc());
        assert!(shared.put(null_winc()).is_some());
    }

    #[test]
    fn try_with_fails_while_borrowed() {
        let trace = Trace::new();
        let shared: SharedWinc<MockDriver, MockPin, MockPin, MockPin, MockPin, MockDelay> =
            SharedWinc::new();
        shared.put(Winc::new(
            mock_pins(&trace),
            MockDriver::new(&trace),
            MockDelay::new(&trace),
        ));

        let nested = shared.with(|_| shared.try_with(|winc| winc.state()));
        assert_eq!(nested, Some(None));

        let mut params = MockParams::default();
        shared.with(|winc| winc.wifi_init(&mut params));
        assert_eq!(params.seen, 1);
    }
}
