//! Dial geometry: angle mapping, polar placement and the widget layout.
//!
//! Angles here are mathematical degrees: 0° points right, angles grow
//! counter-clockwise, and screen y grows downward, so
//! `y = center.y - r * sin(angle)`. The dial runs from 210° (0 km/h, lower
//! left) clockwise over the top to -30° (240 km/h, lower right).
//!
//! Trigonometry uses `micromath` so the module stays `no_std`.

use core::f32::consts::PI;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use micromath::F32;

use crate::config::{BATTERY_FILL_HEIGHT, DIAL_CENTER_DROP, DIAL_RADIUS};
use crate::thresholds::{BATTERY_FULL, MINOR_TICK_DIVISIONS, SPEED_LABEL_COUNT, SPEED_LABEL_STEP_KMH, SPEED_MAX_KMH};

// =============================================================================
// Angle Mapping
// =============================================================================

/// Angle of the dial's zero mark.
pub const DIAL_START_DEG: f32 = 210.0;

/// Angular span of the whole scale.
pub const DIAL_SPAN_DEG: f32 = 240.0;

/// Angle at `fraction` of the scale (0.0 = start, 1.0 = end).
#[inline]
pub fn dial_angle_deg(fraction: f32) -> f32 { DIAL_START_DEG - fraction * DIAL_SPAN_DEG }

/// Needle angle for a speed: `210 - (speed / 240) * 240`.
///
/// Speeds outside 0-240 km/h pin the needle to the nearest end of the scale.
pub fn needle_angle_deg(speed_kmh: i32) -> f32 {
    let speed = speed_kmh.clamp(0, SPEED_MAX_KMH);
    dial_angle_deg(speed as f32 / SPEED_MAX_KMH as f32)
}

/// Point at `radius` from `center` along `angle_deg`.
///
/// Coordinates truncate toward zero, as the integer pixel grid requires.
pub fn polar(
    center: Point,
    radius: f32,
    angle_deg: f32,
) -> Point {
    let rad = F32(angle_deg * PI / 180.0);
    let x = center.x as f32 + radius * rad.cos().0;
    let y = center.y as f32 - radius * rad.sin().0;
    Point::new(x as i32, y as i32)
}

// =============================================================================
// Scale Marks
// =============================================================================

/// A numbered label: its speed and the angle it sits at.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SpeedMark {
    pub speed_kmh: i32,
    pub angle_deg: f32,
}

/// The 13 numbered marks 0, 20, ..., 240.
pub fn speed_marks() -> impl Iterator<Item = SpeedMark> {
    let last = (SPEED_LABEL_COUNT - 1) as f32;
    (0..SPEED_LABEL_COUNT).map(move |i| SpeedMark {
        speed_kmh: i as i32 * SPEED_LABEL_STEP_KMH,
        angle_deg: dial_angle_deg(i as f32 / last),
    })
}

/// A minor tick between two numbered marks.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MinorTick {
    pub angle_deg: f32,
    /// Every other minor tick (the halfway mark) uses the heavy stroke.
    pub heavy: bool,
}

/// Minor ticks at every subdivision that is not a numbered mark.
pub fn minor_ticks() -> impl Iterator<Item = MinorTick> {
    let per_major = MINOR_TICK_DIVISIONS / (SPEED_LABEL_COUNT - 1);
    (0..=MINOR_TICK_DIVISIONS).filter(move |i| i % per_major != 0).map(|i| MinorTick {
        angle_deg: dial_angle_deg(i as f32 / MINOR_TICK_DIVISIONS as f32),
        heavy: i % 2 == 0,
    })
}

// =============================================================================
// Battery Fill
// =============================================================================

/// Height of the battery fill bar for a level.
///
/// Linear in the level, 0 at 0% and `BATTERY_FILL_HEIGHT` at 100%. Levels
/// outside 0-100 are clamped.
pub fn battery_fill_height(percent: i32) -> u32 {
    let level = percent.clamp(0, BATTERY_FULL) as u32;
    BATTERY_FILL_HEIGHT * level / BATTERY_FULL as u32
}

// =============================================================================
// Dial Layout
// =============================================================================

/// Dial center and radius, plus the bounding box every readout hangs off.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DialLayout {
    pub center: Point,
    pub radius: i32,
}

impl DialLayout {
    /// Center the dial horizontally, `DIAL_CENTER_DROP` below mid-height.
    pub const fn centered_in(size: Size) -> Self {
        Self {
            center: Point::new((size.width / 2) as i32, (size.height / 2) as i32 + DIAL_CENTER_DROP),
            radius: DIAL_RADIUS,
        }
    }

    /// Square box enclosing the full circle of the dial.
    pub const fn bounds(&self) -> Rectangle {
        let diameter = (self.radius * 2) as u32;
        Rectangle::new(
            Point::new(self.center.x - self.radius, self.center.y - self.radius),
            Size::new(diameter, diameter),
        )
    }

    #[inline]
    pub const fn left(&self) -> i32 { self.center.x - self.radius }

    #[inline]
    pub const fn right(&self) -> i32 { self.center.x + self.radius }

    #[inline]
    pub const fn top(&self) -> i32 { self.center.y - self.radius }

    #[inline]
    pub const fn bottom(&self) -> i32 { self.center.y + self.radius }

    /// Point on a circle `inset` pixels inside the rim.
    pub fn at(
        &self,
        inset: i32,
        angle_deg: f32,
    ) -> Point {
        polar(self.center, (self.radius - inset) as f32, angle_deg)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
