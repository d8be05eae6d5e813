//! Color constants for the instrument cluster.
//!
//! Pure colors come from the `RgbColor` trait constants so they map to the
//! exact Rgb565 extremes. Custom colors are given as 5-6-5 channel values with
//! the 8-bit RGB they approximate noted alongside.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. End point of the background gradient.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Dial arc, ticks, labels and readout text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Hot temperature, low battery and the connection error path.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Turn signal arrows and a healthy battery.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue. Temperature in the normal band.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow. Battery in the middle band.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark plum window fill, RGB888 (30, 0, 30).
pub const BACKGROUND: Rgb565 = Rgb565::new(3, 0, 3);

/// Top-left color of the diagonal gradient, RGB888 (0, 0, 230).
/// Only the blue channel is non-zero, which the gradient relies on.
pub const GRADIENT_START_BLUE: u8 = 28;

/// Needle outline, RGB888 (0, 128, 128).
pub const TEAL: Rgb565 = Rgb565::new(0, 32, 16);

/// Hub dot and needle body, RGB888 (160, 160, 164).
pub const GRAY: Rgb565 = Rgb565::new(20, 40, 20);
