//! Full-frame rendering of the dashboard.
//!
//! Rendering is split in two steps. [`Scene::from_state`] resolves a
//! [`DashboardState`] into everything that depends on it (needle angle,
//! readout colors, which arrows are lit, what the status line says), and
//! [`draw_scene`] paints that into any `DrawTarget`. The split keeps the
//! state-to-visual rules testable without pixels.
//!
//! # Paint Order
//!
//! | Layer | Contents |
//! |-------|----------|
//! | 1 | Base color and diagonal gradient |
//! | 2 | Dial arc and hub |
//! | 3 | Visible turn arrows |
//! | 4 | Thermometer and temperature text |
//! | 5 | Speed readout or connection error |
//! | 6 | Battery text, battery icon, then the decal |
//! | 7 | Needle, speed labels, ticks |
//!
//! Every frame repaints the whole widget; there is no partial invalidation.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::blink::Side;
use crate::config::DECAL_ORIGIN;
use crate::geometry::{DialLayout, battery_fill_height, needle_angle_deg};
use crate::state::DashboardState;
use crate::widgets::{
    arrow_box,
    battery_color,
    draw_background,
    draw_battery_icon,
    draw_battery_text,
    draw_connection_error,
    draw_dial_arc,
    draw_hub,
    draw_needle,
    draw_speed_labels,
    draw_speed_readout,
    draw_temperature,
    draw_ticks,
    draw_turn_arrow,
    temperature_color,
};

// =============================================================================
// Scene
// =============================================================================

/// What the status line under the hub shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusReadout {
    /// Connected: speed icon and "{speed} km/h".
    Speed(i32),
    /// Disconnected: red icon and "Connection Error". Replaces the speed.
    ConnectionError,
}

/// One frame's worth of resolved visuals.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Scene {
    pub layout: DialLayout,
    pub needle_angle_deg: f32,
    pub left_arrow: bool,
    pub right_arrow: bool,
    pub temperature: i32,
    pub temperature_color: Rgb565,
    pub status: StatusReadout,
    pub battery_percent: i32,
    pub battery_color: Rgb565,
    pub battery_fill_height: u32,
}

impl Scene {
    /// Resolve `state` for a widget of `size`.
    ///
    /// Text readouts carry the stored values as-is. The needle and the
    /// battery fill clamp to their drawable ranges.
    pub fn from_state(
        state: &DashboardState,
        size: Size,
    ) -> Self {
        let status = if state.connected() {
            StatusReadout::Speed(state.speed_kmh())
        } else {
            StatusReadout::ConnectionError
        };

        Self {
            layout: DialLayout::centered_in(size),
            needle_angle_deg: needle_angle_deg(state.speed_kmh()),
            left_arrow: state.visible(Side::Left),
            right_arrow: state.visible(Side::Right),
            temperature: state.temperature(),
            temperature_color: temperature_color(state.temperature()),
            status,
            battery_percent: state.battery_percent(),
            battery_color: battery_color(state.battery_percent()),
            battery_fill_height: battery_fill_height(state.battery_percent()),
        }
    }

    pub const fn arrow_visible(
        &self,
        side: Side,
    ) -> bool {
        match side {
            Side::Left => self.left_arrow,
            Side::Right => self.right_arrow,
        }
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Layers 1 through 6, up to and including the battery icon.
fn draw_readouts<D>(
    display: &mut D,
    scene: &Scene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let layout = &scene.layout;

    draw_background(display);
    draw_dial_arc(display, layout);
    draw_hub(display, layout);

    for side in Side::BOTH {
        if scene.arrow_visible(side) {
            draw_turn_arrow(display, &arrow_box(layout, side), side);
        }
    }

    draw_temperature(display, layout, scene.temperature, scene.temperature_color);

    match scene.status {
        StatusReadout::Speed(speed) => draw_speed_readout(display, layout, speed),
        StatusReadout::ConnectionError => draw_connection_error(display, layout),
    }

    draw_battery_text(display, layout, scene.battery_percent);
    draw_battery_icon(display, layout, scene.battery_color, scene.battery_fill_height);
}

/// Layer 7: the dial scale on top of everything else.
fn draw_scale<D>(
    display: &mut D,
    scene: &Scene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_needle(display, &scene.layout, scene.needle_angle_deg);
    draw_speed_labels(display, &scene.layout);
    draw_ticks(display, &scene.layout);
}

/// Paint a resolved scene. The target's full bounding box is repainted.
pub fn draw_scene<D>(
    display: &mut D,
    scene: &Scene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_readouts(display, scene);
    draw_scale(display, scene);
}

/// Render one frame of `state` into `display`.
pub fn draw_dashboard<D>(
    display: &mut D,
    state: &DashboardState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let scene = Scene::from_state(state, display.bounding_box().size);
    draw_scene(display, &scene);
}

/// Render one frame with a static decal drawn at [`DECAL_ORIGIN`], between
/// the battery icon and the dial scale.
pub fn draw_dashboard_with_decal<D, G>(
    display: &mut D,
    state: &DashboardState,
    decal: &G,
) where
    D: DrawTarget<Color = Rgb565>,
    G: Drawable<Color = Rgb565>,
{
    let scene = Scene::from_state(state, display.bounding_box().size);
    draw_readouts(display, &scene);
    decal.draw(&mut display.translated(DECAL_ORIGIN)).ok();
    draw_scale(display, &scene);
}

// =============================================================================
// Unit Tests
// =============================================================================
