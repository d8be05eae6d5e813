//! Millisecond time sources for the blink timers.
//!
//! The library never reads a real clock. Front-ends inject one (the
//! simulator wraps `std::time::Instant`), and tests drive a [`ManualClock`].

/// Monotonic millisecond counter.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 { (**self).now_ms() }
}

/// A clock that only moves when told to.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub const fn new(start_ms: u64) -> Self { Self { now_ms: start_ms } }

    /// Move the clock forward.
    pub fn advance(
        &mut self,
        ms: u64,
    ) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 { self.now_ms }
}
