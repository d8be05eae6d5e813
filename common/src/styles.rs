//! Pre-computed static text and primitive styles.
//!
//! `MonoTextStyle`, `TextStyle` and `PrimitiveStyle` constructors are `const`
//! in embedded-graphics 0.8, so fixed-color styles are built at compile
//! time. Readouts whose color depends on state expose their font instead,
//! and callers build `MonoTextStyle::new(FONT, color)` on the spot.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT};

use crate::colors::{GRAY, TEAL, WHITE};
use crate::config::{ARC_STROKE, HEAVY_TICK_STROKE, LIGHT_TICK_STROKE, NEEDLE_STROKE};

// =============================================================================
// Text Alignment
// =============================================================================

/// Centered both ways on the anchor point. Every readout is laid out as a
/// box, and text is anchored at the box center.
pub const BOX_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Small readouts (temperature, battery percentage).
pub const READOUT_FONT: &MonoFont = &PROFONT_12_POINT;

/// Large status line (speed or connection error). Color varies with state.
pub const STATUS_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Text Styles
// =============================================================================

/// Speed numbers around the dial.
pub const DIAL_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// White small readout text.
pub const READOUT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);

// =============================================================================
// Primitive Styles
// =============================================================================

/// Dial arc stroke.
pub const ARC_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, ARC_STROKE);

/// Hub dot fill.
pub const HUB_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);

/// Gray needle body with a teal outline.
pub const NEEDLE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(GRAY)
    .stroke_color(TEAL)
    .stroke_width(NEEDLE_STROKE)
    .build();

/// Major ticks and heavy minor ticks.
pub const HEAVY_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, HEAVY_TICK_STROKE);

/// Light minor ticks.
pub const LIGHT_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, LIGHT_TICK_STROKE);
