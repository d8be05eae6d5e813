//! Instrument cluster widget: state, blink timing, tone sync and rendering.
//!
//! This crate is platform-agnostic. Front-ends supply a [`Clock`], a
//! [`ToneSink`] and an RGB565 `DrawTarget`; everything else lives here:
//!
//! - [`state`]: The observable dashboard record and its setters
//! - [`blink`]: Per-side turn signal timers and transition rule
//! - [`audio`]: Tone selection and play/stop synchronization
//! - [`dashboard`]: The widget that ties state, blinking and tones together
//! - [`render`]: Full-frame rendering of a state
//! - [`widgets`]: Individual drawing components
//! - [`geometry`]: Dial angles, scale marks and readout layout
//! - [`colors`], [`config`], [`styles`], [`thresholds`]: Constants
//!
//! # no_std Compatibility
//!
//! The library is `no_std`. Unit tests build against the host's `std` for
//! their framebuffer and recording sink.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod audio;
pub mod blink;
pub mod clock;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod geometry;
pub mod render;
pub mod state;
pub mod styles;
pub mod thresholds;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use audio::{Tone, ToneSink};
pub use blink::{BlinkPhase, BlinkSchedule, Side};
pub use clock::{Clock, ManualClock};
pub use dashboard::Dashboard;
pub use render::{draw_dashboard, draw_dashboard_with_decal};
pub use state::DashboardState;
