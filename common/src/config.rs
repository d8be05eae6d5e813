//! Display, layout and timing configuration constants.
//!
//! Everything is positioned relative to the dial: a single center point and a
//! fixed nominal radius. The dial re-centers with the widget size but does
//! not scale.

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Display Configuration
// =============================================================================

/// Default widget width in pixels.
pub const SCREEN_WIDTH: u32 = 800;

/// Default widget height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;

// =============================================================================
// Dial Layout
// =============================================================================

/// Nominal dial radius. The arc's bounding box is twice this on each side.
pub const DIAL_RADIUS: i32 = 250;

/// The dial sits this far below the widget center.
pub const DIAL_CENTER_DROP: i32 = 50;

/// Stroke width of the dial arc.
pub const ARC_STROKE: u32 = 8;

/// Hub dot radius.
pub const HUB_RADIUS: u32 = 10;

/// Distance from the hub to the needle tip.
pub const NEEDLE_LENGTH: i32 = 185;

/// Needle outline stroke.
pub const NEEDLE_STROKE: u32 = 6;

/// Half width of the needle base triangle.
pub const NEEDLE_BASE_HALF_WIDTH: i32 = 3;

/// The needle base slides this far along the needle's vertical component,
/// tucking it under the hub.
pub const NEEDLE_BASE_DROP: f32 = 5.0;

/// Speed labels sit this far inside the rim.
pub const LABEL_INSET: i32 = 45;

/// Major ticks run from this inset to `TICK_OUTER_INSET`.
pub const MAJOR_TICK_INNER_INSET: i32 = 25;

/// Minor ticks run from this inset to `TICK_OUTER_INSET`.
pub const MINOR_TICK_INNER_INSET: i32 = 20;

/// Outer end of every tick, measured inward from the rim.
pub const TICK_OUTER_INSET: i32 = 10;

/// Stroke of major ticks and of every other minor tick.
pub const HEAVY_TICK_STROKE: u32 = 4;

/// Stroke of the remaining minor ticks.
pub const LIGHT_TICK_STROKE: u32 = 2;

const _: () = assert!(TICK_OUTER_INSET < MINOR_TICK_INNER_INSET);
const _: () = assert!(MINOR_TICK_INNER_INSET < MAJOR_TICK_INNER_INSET);
const _: () = assert!(MAJOR_TICK_INNER_INSET < LABEL_INSET);
const _: () = assert!(NEEDLE_LENGTH < DIAL_RADIUS - LABEL_INSET);

// =============================================================================
// Battery Icon
// =============================================================================

/// Height of the battery fill bar at 100%.
pub const BATTERY_FILL_HEIGHT: u32 = 60;

/// Width of the battery fill bar.
pub const BATTERY_FILL_WIDTH: u32 = 35;

/// Position of the static battery decal, in widget coordinates.
pub const DECAL_ORIGIN: Point = Point::new(20, 20);

// =============================================================================
// Readout Boxes (offsets from the dial bounding box)
// =============================================================================

/// Size of each turn signal arrow box.
pub const ARROW_BOX: Size = Size::new(100, 80);

/// Size of the status icon box under the hub.
pub const STATUS_ICON_BOX: Size = Size::new(80, 80);

// =============================================================================
// Blink Timing
// =============================================================================

/// Steady-state blink period for both turn signals.
pub const BLINK_PERIOD_MS: u64 = 500;

/// Delay before the very first tick in the fast-first schedule.
pub const FAST_FIRST_TICK_MS: u64 = 250;

const _: () = assert!(FAST_FIRST_TICK_MS < BLINK_PERIOD_MS);

// =============================================================================
// Tone Playback
// =============================================================================

/// Playback volume for both tones (0.0 - 1.0).
pub const TONE_VOLUME: f32 = 0.5;
