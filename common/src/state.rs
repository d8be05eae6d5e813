//! Observable dashboard state.
//!
//! [`DashboardState`] is a plain record mutated through total setters. Every
//! setter stores its value unconditionally and raises a redraw request.
//! Requests are coalesced: any number of mutations between two frames yields
//! a single redraw, consumed with [`DashboardState::take_redraw`].
//!
//! The blink visibility flags are derived. They are written only by the
//! blink controller and by [`DashboardState::set_warning`].

use crate::blink::Side;

/// Temperature reported before the first update, in degrees C.
pub const DEFAULT_TEMPERATURE: i32 = 0;

/// Battery level reported before the first update, in percent.
pub const DEFAULT_BATTERY_PERCENT: i32 = 50;

/// Speed reported before the first update, in km/h.
pub const DEFAULT_SPEED_KMH: i32 = 0;

/// Everything the renderer needs to draw one frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DashboardState {
    connected: bool,
    left_requested: bool,
    right_requested: bool,
    hazard: bool,
    left_visible: bool,
    right_visible: bool,
    temperature: i32,
    battery_percent: i32,
    speed_kmh: i32,

    /// Pending redraw request. Starts raised so the first frame is drawn.
    redraw: bool,
}

impl DashboardState {
    /// Create the state with its construction defaults: disconnected, all
    /// signals off, temperature 0, battery 50%, speed 0.
    pub const fn new() -> Self {
        Self {
            connected: false,
            left_requested: false,
            right_requested: false,
            hazard: false,
            left_visible: false,
            right_visible: false,
            temperature: DEFAULT_TEMPERATURE,
            battery_percent: DEFAULT_BATTERY_PERCENT,
            speed_kmh: DEFAULT_SPEED_KMH,
            redraw: true,
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_connection_status(
        &mut self,
        connected: bool,
    ) {
        self.connected = connected;
        self.request_redraw();
    }

    pub fn set_left_arrow(
        &mut self,
        on: bool,
    ) {
        self.left_requested = on;
        self.request_redraw();
    }

    pub fn set_right_arrow(
        &mut self,
        on: bool,
    ) {
        self.right_requested = on;
        self.request_redraw();
    }

    /// Set hazard mode. Both arrows snap to `on` immediately instead of
    /// waiting for the next blink tick.
    pub fn set_warning(
        &mut self,
        on: bool,
    ) {
        self.hazard = on;
        self.left_visible = on;
        self.right_visible = on;
        self.request_redraw();
    }

    pub fn set_temperature(
        &mut self,
        celsius: i32,
    ) {
        self.temperature = celsius;
        self.request_redraw();
    }

    /// Store the battery level. Values outside 0-100 are kept as given;
    /// the renderer clamps the fill bar.
    pub fn set_battery_level(
        &mut self,
        percent: i32,
    ) {
        self.battery_percent = percent;
        self.request_redraw();
    }

    /// Store the speed. Values outside 0-240 are kept as given; the renderer
    /// clamps the needle.
    pub fn set_speed(
        &mut self,
        kmh: i32,
    ) {
        self.speed_kmh = kmh;
        self.request_redraw();
    }

    // =========================================================================
    // Getters
    // =========================================================================

    #[inline]
    pub const fn connected(&self) -> bool { self.connected }

    #[inline]
    pub const fn hazard(&self) -> bool { self.hazard }

    #[inline]
    pub const fn temperature(&self) -> i32 { self.temperature }

    #[inline]
    pub const fn battery_percent(&self) -> i32 { self.battery_percent }

    #[inline]
    pub const fn speed_kmh(&self) -> i32 { self.speed_kmh }

    /// Whether the driver asked for this side to blink.
    #[inline]
    pub const fn requested(
        &self,
        side: Side,
    ) -> bool {
        match side {
            Side::Left => self.left_requested,
            Side::Right => self.right_requested,
        }
    }

    /// Whether this side's arrow is drawn in the current blink phase.
    #[inline]
    pub const fn visible(
        &self,
        side: Side,
    ) -> bool {
        match side {
            Side::Left => self.left_visible,
            Side::Right => self.right_visible,
        }
    }

    /// True iff either arrow is lit or hazard mode is on.
    #[inline]
    pub const fn sound_active(&self) -> bool { self.left_visible || self.right_visible || self.hazard }

    // =========================================================================
    // Redraw Requests
    // =========================================================================

    #[inline]
    pub fn request_redraw(&mut self) { self.redraw = true; }

    #[inline]
    pub const fn redraw_pending(&self) -> bool { self.redraw }

    /// Consume the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool { core::mem::replace(&mut self.redraw, false) }

    pub(crate) fn set_visible(
        &mut self,
        side: Side,
        visible: bool,
    ) {
        match side {
            Side::Left => self.left_visible = visible,
            Side::Right => self.right_visible = visible,
        }
        self.request_redraw();
    }
}

impl Default for DashboardState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
