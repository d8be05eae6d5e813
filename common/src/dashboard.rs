//! The dashboard widget: state, blink controllers and tone sync in one owner.
//!
//! [`Dashboard`] is what a front-end holds. It exposes the seven setters,
//! drives both blink controllers from an injected [`Clock`], and keeps a
//! [`ToneSink`] in step after every toggle.
//!
//! # Frame Loop
//!
//! ```ignore
//! let mut dash = Dashboard::new(sink, clock);
//! loop {
//!     dash.poll();
//!     if dash.take_redraw() {
//!         draw_dashboard(&mut display, dash.state());
//!     }
//! }
//! ```
//!
//! Everything runs on the caller's thread. A setter and the next tick may
//! land in either order; at worst one tick of stale visuals results.

use heapless::Vec;

use crate::audio::{Tone, ToneSink, ToneSync};
use crate::blink::{BlinkController, BlinkPhase, BlinkSchedule, Side};
use crate::clock::Clock;
use crate::state::DashboardState;

/// Ticks fired by one [`Dashboard::poll`] call, at most one per side.
pub type FiredTicks = Vec<(Side, BlinkPhase), 2>;

pub struct Dashboard<S, C> {
    state: DashboardState,
    left: BlinkController,
    right: BlinkController,
    tones: ToneSync,
    sink: S,
    clock: C,
}

impl<S: ToneSink, C: Clock> Dashboard<S, C> {
    /// Create a dashboard with default state and uniform 500 ms blinking.
    pub fn new(
        sink: S,
        clock: C,
    ) -> Self {
        Self::with_schedule(sink, clock, BlinkSchedule::default())
    }

    /// Create a dashboard whose blink timers follow `schedule`.
    /// Both timers are armed at the clock's current time.
    pub fn with_schedule(
        sink: S,
        clock: C,
        schedule: BlinkSchedule,
    ) -> Self {
        let now = clock.now_ms();
        Self {
            state: DashboardState::new(),
            left: BlinkController::new(Side::Left, schedule, now),
            right: BlinkController::new(Side::Right, schedule, now),
            tones: ToneSync::new(),
            sink,
            clock,
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_connection_status(
        &mut self,
        connected: bool,
    ) {
        self.state.set_connection_status(connected);
    }

    pub fn set_left_arrow(
        &mut self,
        on: bool,
    ) {
        self.state.set_left_arrow(on);
    }

    pub fn set_right_arrow(
        &mut self,
        on: bool,
    ) {
        self.state.set_right_arrow(on);
    }

    /// Enter or leave hazard mode. Both arrows snap to `on` and the tone
    /// follows immediately rather than on the next tick.
    pub fn set_warning(
        &mut self,
        on: bool,
    ) {
        self.state.set_warning(on);
        self.sync_tones();
    }

    pub fn set_temperature(
        &mut self,
        celsius: i32,
    ) {
        self.state.set_temperature(celsius);
    }

    pub fn set_battery_level(
        &mut self,
        percent: i32,
    ) {
        self.state.set_battery_level(percent);
    }

    pub fn set_speed(
        &mut self,
        kmh: i32,
    ) {
        self.state.set_speed(kmh);
    }

    // =========================================================================
    // Blinking
    // =========================================================================

    /// Fire every blink timer that is due at the clock's current time.
    ///
    /// Returns the sides that ticked and the phase each moved to, left first.
    pub fn poll(&mut self) -> FiredTicks {
        let now = self.clock.now_ms();
        let mut fired = FiredTicks::new();
        for side in Side::BOTH {
            if self.controller_mut(side).poll(now) {
                let phase = self.tick(side);
                // Capacity equals Side::BOTH.len()
                fired.push((side, phase)).ok();
            }
        }
        fired
    }

    /// Apply one tick to `side` immediately, as if its timer had fired.
    pub fn tick(
        &mut self,
        side: Side,
    ) -> BlinkPhase {
        let controller = match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        };
        let phase = controller.step(&mut self.state);
        self.sync_tones();
        phase
    }

    fn controller_mut(
        &mut self,
        side: Side,
    ) -> &mut BlinkController {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn sync_tones(&mut self) {
        let active = self.state.sound_active();
        let hazard = self.state.hazard();
        self.tones.sync(&mut self.sink, active, hazard);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn state(&self) -> &DashboardState { &self.state }

    /// `left visible || right visible || hazard`.
    #[inline]
    pub const fn sound_active(&self) -> bool { self.state.sound_active() }

    /// Tone the sink was last told to play.
    #[inline]
    pub const fn playing_tone(&self) -> Option<Tone> { self.tones.playing() }

    /// Consume the pending redraw request, if any.
    #[inline]
    pub fn take_redraw(&mut self) -> bool { self.state.take_redraw() }

    /// Next time either blink timer fires. Lets a front-end sleep until then.
    pub fn next_tick_ms(&self) -> u64 { self.left.timer().due_ms().min(self.right.timer().due_ms()) }

    #[inline]
    pub const fn clock(&self) -> &C { &self.clock }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C { &mut self.clock }

    #[inline]
    pub const fn sink(&self) -> &S { &self.sink }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S { &mut self.sink }
}

// =============================================================================
// Unit Tests
// =============================================================================
