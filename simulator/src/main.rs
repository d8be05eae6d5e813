//! Instrument cluster simulator for desktop platforms.
//!
//! Runs the dashboard widget in an SDL window via embedded-graphics-simulator,
//! with looping turn signal tones through rodio.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | L / R | Toggle left / right turn signal |
//! | W | Toggle hazard warning |
//! | C | Toggle connection |
//! | S / A | Speed +10 / -10 km/h |
//! | T / G | Temperature +5 / -5 C |
//! | B / V | Battery +5 / -5 % |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod assets;
mod audio;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use cluster_common::blink::Side;
use cluster_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use cluster_common::{Clock, Dashboard, ToneSink, draw_dashboard, draw_dashboard_with_decal};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::assets::{AssetPaths, Decal};
use crate::audio::TonePlayer;
use crate::timing::{FRAME_TIME, WallClock};

const WINDOW_TITLE: &str = "Client";

const SPEED_STEP: i32 = 10;
const TEMPERATURE_STEP: i32 = 5;
const BATTERY_STEP: i32 = 5;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let paths = match AssetPaths::resolve() {
        Ok(paths) => Some(paths),
        Err(e) => {
            warn!("Running without assets: {e}");
            None
        }
    };
    let player = paths.as_ref().map_or_else(TonePlayer::silent, TonePlayer::open);
    let decal = paths.as_ref().and_then(|p| p.decal.as_deref()).and_then(|path| {
        Decal::load(path)
            .inspect_err(|e| warn!("Decal disabled: {e}"))
            .ok()
    });

    let mut dash = Dashboard::new(player, WallClock::new());
    dash.set_connection_status(true);
    dash.set_temperature(60);
    dash.set_battery_level(80);
    dash.set_speed(140);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    info!("Simulator started ({SCREEN_WIDTH}x{SCREEN_HEIGHT})");

    loop {
        let frame_start = Instant::now();

        if dash.take_redraw() {
            match &decal {
                Some(decal) => draw_dashboard_with_decal(&mut display, dash.state(), decal),
                None => draw_dashboard(&mut display, dash.state()),
            }
        }
        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("Window closed");
                    return Ok(());
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if !repeat {
                        handle_key(&mut dash, keycode);
                    }
                }
                _ => {}
            }
        }

        for (side, phase) in dash.poll() {
            debug!(side = side.label(), visible = phase.is_visible(), "Blink tick");
        }

        thread::sleep(FRAME_TIME.saturating_sub(frame_start.elapsed()));
    }
}

/// Apply one key press to the dashboard.
fn handle_key<S, C>(
    dash: &mut Dashboard<S, C>,
    keycode: Keycode,
) where
    S: ToneSink,
    C: Clock,
{
    let state = *dash.state();
    match keycode {
        Keycode::L => dash.set_left_arrow(!state.requested(Side::Left)),
        Keycode::R => dash.set_right_arrow(!state.requested(Side::Right)),
        Keycode::W => dash.set_warning(!state.hazard()),
        Keycode::C => dash.set_connection_status(!state.connected()),
        Keycode::S => dash.set_speed(state.speed_kmh().saturating_add(SPEED_STEP)),
        Keycode::A => dash.set_speed(state.speed_kmh().saturating_sub(SPEED_STEP)),
        Keycode::T => dash.set_temperature(state.temperature().saturating_add(TEMPERATURE_STEP)),
        Keycode::G => dash.set_temperature(state.temperature().saturating_sub(TEMPERATURE_STEP)),
        Keycode::B => dash.set_battery_level(state.battery_percent().saturating_add(BATTERY_STEP)),
        Keycode::V => dash.set_battery_level(state.battery_percent().saturating_sub(BATTERY_STEP)),
        _ => return,
    }

    let state = dash.state();
    info!(
        connected = state.connected(),
        left = state.requested(Side::Left),
        right = state.requested(Side::Right),
        hazard = state.hazard(),
        speed = state.speed_kmh(),
        temperature = state.temperature(),
        battery = state.battery_percent(),
        "Controls updated"
    );
}
