//! Turn signal blink controller.
//!
//! One [`BlinkController`] exists per [`Side`]. Each owns a [`BlinkTimer`]
//! and applies the same transition rule to its side of the
//! [`DashboardState`] whenever the timer fires:
//!
//! | Condition | Result |
//! |-----------|--------|
//! | hazard on | toggle |
//! | connected, side requested, hazard off | toggle |
//! | anything else | force hidden |
//!
//! # Timer Semantics
//!
//! A fired timer re-arms at `now + period`, measured from the poll that saw
//! it fire. If the caller polls late, the missed periods collapse into one
//! tick rather than a burst of catch-up toggles.

use crate::config::{BLINK_PERIOD_MS, FAST_FIRST_TICK_MS};
use crate::state::DashboardState;

// =============================================================================
// Side
// =============================================================================

/// Which turn signal a controller drives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in polling order.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Short name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

// =============================================================================
// Blink Phase
// =============================================================================

/// Current phase of one arrow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlinkPhase {
    Visible,
    Hidden,
}

impl BlinkPhase {
    #[inline]
    pub const fn from_visible(visible: bool) -> Self { if visible { Self::Visible } else { Self::Hidden } }

    #[inline]
    pub const fn is_visible(self) -> bool { matches!(self, Self::Visible) }

    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }
}

/// Whether `side` keeps blinking on the next tick.
///
/// Hazard mode blinks both sides regardless of connection or requests. An
/// ordinary signal only blinks while connected and outside hazard mode.
pub const fn side_active(
    state: &DashboardState,
    side: Side,
) -> bool {
    state.hazard() || (state.connected() && state.requested(side) && !state.hazard())
}

/// Phase that `side` moves to when its timer fires.
pub const fn next_phase(
    state: &DashboardState,
    side: Side,
) -> BlinkPhase {
    if side_active(state, side) {
        BlinkPhase::from_visible(state.visible(side)).toggled()
    } else {
        BlinkPhase::Hidden
    }
}

// =============================================================================
// Schedule and Timer
// =============================================================================

/// Delay before the first tick and period of every tick after it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlinkSchedule {
    pub first_tick_ms: u64,
    pub period_ms: u64,
}

impl BlinkSchedule {
    /// Every tick, including the first, `BLINK_PERIOD_MS` apart.
    pub const UNIFORM: Self = Self {
        first_tick_ms: BLINK_PERIOD_MS,
        period_ms: BLINK_PERIOD_MS,
    };

    /// First tick after `FAST_FIRST_TICK_MS`, then `BLINK_PERIOD_MS`.
    /// Gives a quick first flash after a signal is switched on.
    pub const FAST_FIRST: Self = Self {
        first_tick_ms: FAST_FIRST_TICK_MS,
        period_ms: BLINK_PERIOD_MS,
    };
}

impl Default for BlinkSchedule {
    fn default() -> Self { Self::UNIFORM }
}

/// Repeating timer driven by an external millisecond clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlinkTimer {
    period_ms: u64,
    due_ms: u64,
}

impl BlinkTimer {
    /// Arm a timer at `now_ms` following `schedule`.
    pub const fn start(
        schedule: BlinkSchedule,
        now_ms: u64,
    ) -> Self {
        Self {
            period_ms: schedule.period_ms,
            due_ms: now_ms.saturating_add(schedule.first_tick_ms),
        }
    }

    /// Returns `true` once per expiry and re-arms for `now_ms + period`.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if now_ms < self.due_ms {
            return false;
        }
        self.due_ms = now_ms.saturating_add(self.period_ms);
        true
    }

    /// Time at which the timer fires next.
    #[inline]
    pub const fn due_ms(&self) -> u64 { self.due_ms }
}

// =============================================================================
// Controller
// =============================================================================

/// Blink state machine for one side.
#[derive(Clone, Copy, Debug)]
pub struct BlinkController {
    side: Side,
    timer: BlinkTimer,
}

impl BlinkController {
    pub const fn new(
        side: Side,
        schedule: BlinkSchedule,
        now_ms: u64,
    ) -> Self {
        Self {
            side,
            timer: BlinkTimer::start(schedule, now_ms),
        }
    }

    #[inline]
    pub const fn side(&self) -> Side { self.side }

    #[inline]
    pub const fn timer(&self) -> &BlinkTimer { &self.timer }

    /// Check the timer. Returns `true` if a tick is due now.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> bool {
        self.timer.poll(now_ms)
    }

    /// Apply one tick to this side of `state` and return the new phase.
    pub fn step(
        &self,
        state: &mut DashboardState,
    ) -> BlinkPhase {
        let phase = next_phase(state, self.side);
        state.set_visible(self.side, phase.is_visible());
        phase
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_state() -> DashboardState {
        let mut state = DashboardState::new();
        state.set_connection_status(true);
        state
    }

    #[test]
    fn test_phase_toggle() {
        assert_eq!(BlinkPhase::Visible.toggled(), BlinkPhase::Hidden);
        assert_eq!(BlinkPhase::Hidden.toggled(), BlinkPhase::Visible);
        assert!(BlinkPhase::from_visible(true).is_visible());
        assert!(!BlinkPhase::from_visible(false).is_visible());
    }

    #[test]
    fn test_requested_side_toggles_when_connected() {
        let mut state = connected_state();
        state.set_left_arrow(true);
        let left = BlinkController::new(Side::Left, BlinkSchedule::UNIFORM, 0);

        assert_eq!(left.step(&mut state), BlinkPhase::Visible);
        assert_eq!(left.step(&mut state), BlinkPhase::Hidden);
        assert_eq!(left.step(&mut state), BlinkPhase::Visible);
    }

    #[test]
    fn test_unrequested_side_stays_hidden() {
        let mut state = connected_state();
        state.set_left_arrow(true);
        let right = BlinkController::new(Side::Right, BlinkSchedule::UNIFORM, 0);

        for _ in 0..4 {
            assert_eq!(right.step(&mut state), BlinkPhase::Hidden);
        }
    }

    #[test]
    fn test_disconnected_suppresses_signal() {
        let mut state = DashboardState::new();
        state.set_left_arrow(true);
        state.set_right_arrow(true);

        for side in Side::BOTH {
            let controller = BlinkController::new(side, BlinkSchedule::UNIFORM, 0);
            for _ in 0..4 {
                assert_eq!(controller.step(&mut state), BlinkPhase::Hidden);
                assert!(!state.visible(side));
            }
        }
    }

    #[test]
    fn test_hazard_ignores_connection_and_requests() {
        let mut state = DashboardState::new();
        state.set_warning(true);
        assert!(side_active(&state, Side::Left));
        assert!(side_active(&state, Side::Right));

        let left = BlinkController::new(Side::Left, BlinkSchedule::UNIFORM, 0);
        let right = BlinkController::new(Side::Right, BlinkSchedule::UNIFORM, 0);
        for _ in 0..6 {
            let l = left.step(&mut state);
            let r = right.step(&mut state);
            assert_eq!(l, r, "hazard sides must blink in lockstep");
        }
    }

    #[test]
    fn test_releasing_signal_forces_hidden() {
        let mut state = connected_state();
        state.set_right_arrow(true);
        let right = BlinkController::new(Side::Right, BlinkSchedule::UNIFORM, 0);
        assert_eq!(right.step(&mut state), BlinkPhase::Visible);

        state.set_right_arrow(false);
        assert_eq!(right.step(&mut state), BlinkPhase::Hidden);
        assert_eq!(right.step(&mut state), BlinkPhase::Hidden);
    }

    #[test]
    fn test_uniform_timer() {
        let mut timer = BlinkTimer::start(BlinkSchedule::UNIFORM, 0);
        assert!(!timer.poll(499));
        assert!(timer.poll(500));
        assert!(!timer.poll(999));
        assert!(timer.poll(1000));
    }

    #[test]
    fn test_fast_first_timer() {
        let mut timer = BlinkTimer::start(BlinkSchedule::FAST_FIRST, 0);
        assert!(!timer.poll(249));
        assert!(timer.poll(250));
        assert!(!timer.poll(500));
        assert!(timer.poll(750));
        assert!(timer.poll(1250));
    }

    #[test]
    fn test_late_poll_coalesces() {
        let mut timer = BlinkTimer::start(BlinkSchedule::UNIFORM, 0);
        // Three periods late: one tick, re-armed from the late poll
        assert!(timer.poll(1600));
        assert!(!timer.poll(1601));
        assert_eq!(timer.due_ms(), 2100);
    }

    #[test]
    fn test_default_schedule_is_uniform() {
        assert_eq!(BlinkSchedule::default(), BlinkSchedule::UNIFORM);
    }
}
