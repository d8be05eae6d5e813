//! Wall-clock time for the simulator.
//!
//! `std::time` is not available to the `no_std` library, so the frame
//! budget and the [`Clock`] backed by `Instant` live here.

use std::time::{Duration, Instant};

use cluster_common::Clock;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Milliseconds since the simulator started.
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Default for WallClock {
    fn default() -> Self { Self::new() }
}

impl Clock for WallClock {
    fn now_ms(&self) -> u64 { u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_clock_is_monotonic() {
        let clock = WallClock::new();
        let a = clock.now_ms();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.now_ms();
        assert!(b >= a + 1);
    }
}
