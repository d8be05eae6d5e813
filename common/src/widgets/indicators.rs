//! Readouts around the dial: turn arrows, temperature, connection status and
//! battery.
//!
//! Every readout is positioned as a box hanging off the dial's bounding box,
//! so the whole cluster moves together when the widget is re-centered.
//!
//! # Color Bands
//!
//! | Readout | Band | Color |
//! |---------|------|-------|
//! | Temperature | < 5 | WHITE |
//! | Temperature | 5-39 | BLUE |
//! | Temperature | >= 40 | RED |
//! | Battery | < 25 | RED |
//! | Battery | 25-49 | YELLOW |
//! | Battery | >= 50 | GREEN |

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};
use heapless::String;

use super::primitives::draw_text_in;
use crate::blink::Side;
use crate::colors::{BLUE, GREEN, RED, WHITE, YELLOW};
use crate::config::{ARROW_BOX, BATTERY_FILL_HEIGHT, BATTERY_FILL_WIDTH, STATUS_ICON_BOX};
use crate::geometry::DialLayout;
use crate::styles::{READOUT_FONT, READOUT_STYLE_WHITE, STATUS_FONT};
use crate::thresholds::{BATTERY_LOW, BATTERY_OK, TEMP_HOT, TEMP_NORMAL_MIN};

/// Text shown instead of the speed while the link is down.
pub const CONNECTION_ERROR_TEXT: &str = "Connection Error";

// =============================================================================
// Color Functions
// =============================================================================

pub fn temperature_color(celsius: i32) -> Rgb565 {
    if celsius < TEMP_NORMAL_MIN {
        WHITE
    } else if celsius < TEMP_HOT {
        BLUE
    } else {
        RED
    }
}

pub fn battery_color(percent: i32) -> Rgb565 {
    if percent < BATTERY_LOW {
        RED
    } else if percent < BATTERY_OK {
        YELLOW
    } else {
        GREEN
    }
}

// =============================================================================
// Readout Boxes
// =============================================================================

/// Box for a turn arrow, just outside the dial's upper corner on that side.
pub fn arrow_box(
    layout: &DialLayout,
    side: Side,
) -> Rectangle {
    let x = match side {
        Side::Left => layout.left() - ARROW_BOX.width as i32,
        Side::Right => layout.right(),
    };
    Rectangle::new(Point::new(x, layout.top() - ARROW_BOX.height as i32), ARROW_BOX)
}

pub fn thermometer_box(layout: &DialLayout) -> Rectangle {
    Rectangle::new(Point::new(layout.right() + 20, layout.bottom() - 180), Size::new(100, 80))
}

pub fn temperature_text_box(layout: &DialLayout) -> Rectangle {
    Rectangle::new(Point::new(layout.right() + 20, layout.bottom() - 120), Size::new(100, 40))
}

/// Speed or error icon, centered under the hub.
pub fn status_icon_box(layout: &DialLayout) -> Rectangle {
    Rectangle::new(
        Point::new(layout.center.x - STATUS_ICON_BOX.width as i32 / 2, layout.bottom() - 180),
        STATUS_ICON_BOX,
    )
}

/// Speed or error text, centered under the status icon. The error text
/// gets a wider box.
pub fn status_text_box(
    layout: &DialLayout,
    connected: bool,
) -> Rectangle {
    let width: u32 = if connected { 100 } else { 200 };
    Rectangle::new(
        Point::new(layout.center.x - width as i32 / 2, layout.bottom() - 120),
        Size::new(width, 40),
    )
}

pub fn battery_text_box(layout: &DialLayout) -> Rectangle {
    Rectangle::new(Point::new(layout.right() + 30, layout.bottom() - 220), Size::new(85, 40))
}

/// Area the battery fill bar occupies when full.
pub fn battery_fill_area(layout: &DialLayout) -> Rectangle {
    // Bottom of the fill sits 100px above the bottom of the 250px icon box
    let left = layout.right() + 20 + 32;
    let bottom = layout.bottom() - 380 + 250 - 100;
    Rectangle::new(
        Point::new(left, bottom - BATTERY_FILL_HEIGHT as i32),
        Size::new(BATTERY_FILL_WIDTH, BATTERY_FILL_HEIGHT),
    )
}

// =============================================================================
// Turn Arrows
// =============================================================================

/// Draw a green arrow pointing away from the dial on `side`.
pub fn draw_turn_arrow<D>(
    display: &mut D,
    area: &Rectangle,
    side: Side,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let c = area.center();
    let dir = match side {
        Side::Left => -1,
        Side::Right => 1,
    };
    let style = PrimitiveStyle::with_fill(GREEN);

    let tip = Point::new(c.x + dir * 30, c.y);
    let head_base = c.x + dir * 5;
    Triangle::new(tip, Point::new(head_base, c.y - 20), Point::new(head_base, c.y + 20))
        .into_styled(style)
        .draw(display)
        .ok();

    let tail = c.x - dir * 30;
    let shaft_left = head_base.min(tail);
    Rectangle::new(Point::new(shaft_left, c.y - 8), Size::new(35, 16))
        .into_styled(style)
        .draw(display)
        .ok();
}

// =============================================================================
// Temperature
// =============================================================================

pub fn draw_thermometer<D>(
    display: &mut D,
    area: &Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let c = area.center();
    let style = PrimitiveStyle::with_fill(color);

    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(c.x - 5, c.y - 30), Size::new(10, 44)),
        Size::new(5, 5),
    )
    .into_styled(style)
    .draw(display)
    .ok();

    Circle::with_center(Point::new(c.x, c.y + 20), 20)
        .into_styled(style)
        .draw(display)
        .ok();
}

pub fn draw_temperature<D>(
    display: &mut D,
    layout: &DialLayout,
    celsius: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_thermometer(display, &thermometer_box(layout), color);

    let mut text: String<16> = String::new();
    let _ = write!(text, "{celsius}C");
    draw_text_in(display, &text, &temperature_text_box(layout), MonoTextStyle::new(READOUT_FONT, color));
}

// =============================================================================
// Connection Status
// =============================================================================

/// Small gauge glyph: a half ring with a needle. Used for both the speed
/// icon and, in red, the connection error icon.
pub fn draw_gauge_icon<D>(
    display: &mut D,
    area: &Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let c = area.center() + Point::new(0, 10);
    let stroke = PrimitiveStyle::with_stroke(color, 5);

    Arc::with_center(c, 54, 180.0.deg(), 180.0.deg())
        .into_styled(stroke)
        .draw(display)
        .ok();
    Line::new(c, c + Point::new(12, -15))
        .into_styled(PrimitiveStyle::with_stroke(color, 4))
        .draw(display)
        .ok();
    Circle::with_center(c, 9)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Speed icon and readout while connected.
pub fn draw_speed_readout<D>(
    display: &mut D,
    layout: &DialLayout,
    speed_kmh: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gauge_icon(display, &status_icon_box(layout), WHITE);

    let mut text: String<16> = String::new();
    let _ = write!(text, "{speed_kmh} km/h");
    draw_text_in(display, &text, &status_text_box(layout, true), MonoTextStyle::new(STATUS_FONT, WHITE));
}

/// Red error icon and message while disconnected.
pub fn draw_connection_error<D>(
    display: &mut D,
    layout: &DialLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gauge_icon(display, &status_icon_box(layout), RED);
    draw_text_in(
        display,
        CONNECTION_ERROR_TEXT,
        &status_text_box(layout, false),
        MonoTextStyle::new(STATUS_FONT, RED),
    );
}

// =============================================================================
// Battery
// =============================================================================

pub fn draw_battery_text<D>(
    display: &mut D,
    layout: &DialLayout,
    percent: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut text: String<16> = String::new();
    let _ = write!(text, "{percent}%");
    draw_text_in(display, &text, &battery_text_box(layout), READOUT_STYLE_WHITE);
}

/// Battery outline with a fill bar rising `fill_height` pixels from the
/// bottom of the fill area.
pub fn draw_battery_icon<D>(
    display: &mut D,
    layout: &DialLayout,
    color: Rgb565,
    fill_height: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = battery_fill_area(layout);
    let outline = Rectangle::new(fill.top_left - Point::new(4, 4), fill.size + Size::new(8, 8));
    outline
        .into_styled(PrimitiveStyle::with_stroke(color, 2))
        .draw(display)
        .ok();

    let cap_w = BATTERY_FILL_WIDTH / 2;
    Rectangle::new(
        Point::new(fill.center().x - cap_w as i32 / 2, outline.top_left.y - 6),
        Size::new(cap_w, 6),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();

    let height = fill_height.min(fill.size.height);
    if height == 0 {
        return;
    }
    let bottom = fill.top_left.y + fill.size.height as i32;
    Rectangle::new(
        Point::new(fill.top_left.x, bottom - height as i32),
        Size::new(fill.size.width, height),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::test_support::Framebuffer;

    fn layout() -> DialLayout { DialLayout::centered_in(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    #[test]
    fn test_temperature_color_bands() {
        assert_eq!(temperature_color(-10), WHITE);
        assert_eq!(temperature_color(4), WHITE);
        assert_eq!(temperature_color(5), BLUE);
        assert_eq!(temperature_color(39), BLUE);
        assert_eq!(temperature_color(40), RED);
        assert_eq!(temperature_color(120), RED);
    }

    #[test]
    fn test_battery_color_bands() {
        assert_eq!(battery_color(0), RED);
        assert_eq!(battery_color(24), RED);
        assert_eq!(battery_color(25), YELLOW);
        assert_eq!(battery_color(49), YELLOW);
        assert_eq!(battery_color(50), GREEN);
        assert_eq!(battery_color(100), GREEN);
    }

    #[test]
    fn test_arrow_boxes_outside_dial() {
        let layout = layout();
        let left = arrow_box(&layout, Side::Left);
        let right = arrow_box(&layout, Side::Right);
        assert_eq!(left.top_left, Point::new(50, 20));
        assert_eq!(right.top_left, Point::new(650, 20));
        assert!(left.top_left.x + left.size.width as i32 <= layout.left());
        assert!(right.top_left.x >= layout.right());
    }

    #[test]
    fn test_arrows_point_outward() {
        let mut fb = Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let layout = layout();
        for side in Side::BOTH {
            let area = arrow_box(&layout, side);
            draw_turn_arrow(&mut fb, &area, side);
        }

        let left = arrow_box(&layout, Side::Left).center();
        assert_eq!(fb.pixel(left + Point::new(-25, 0)), Some(GREEN));
        assert_eq!(fb.pixel(left + Point::new(-7, -15)), Some(GREEN));
        assert_eq!(fb.pixel(left + Point::new(25, 0)), Some(GREEN));
        assert_eq!(fb.pixel(left + Point::new(25, -18)), Some(BLACK));

        let right = arrow_box(&layout, Side::Right).center();
        assert_eq!(fb.pixel(right + Point::new(25, 0)), Some(GREEN));
        assert_eq!(fb.pixel(right + Point::new(7, -15)), Some(GREEN));
        assert_eq!(fb.pixel(right + Point::new(-25, -18)), Some(BLACK));
    }

    #[test]
    fn test_battery_fill_area_position() {
        let fill = battery_fill_area(&layout());
        assert_eq!(fill.top_left, Point::new(702, 310));
        assert_eq!(fill.size, Size::new(BATTERY_FILL_WIDTH, BATTERY_FILL_HEIGHT));
    }

    #[test]
    fn test_battery_fill_rises_from_bottom() {
        let layout = layout();
        let fill = battery_fill_area(&layout);
        let mut fb = Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_battery_icon(&mut fb, &layout, GREEN, BATTERY_FILL_HEIGHT / 2);

        assert_eq!(fb.count_in(&fill, GREEN), (fill.size.width * fill.size.height / 2) as usize);
        let bottom_row = Point::new(fill.center().x, fill.top_left.y + fill.size.height as i32 - 1);
        let top_row = Point::new(fill.center().x, fill.top_left.y);
        assert_eq!(fb.pixel(bottom_row), Some(GREEN));
        assert_eq!(fb.pixel(top_row), Some(BLACK));
    }

    #[test]
    fn test_empty_battery_has_no_fill() {
        let layout = layout();
        let fill = battery_fill_area(&layout);
        let mut fb = Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_battery_icon(&mut fb, &layout, RED, 0);
        assert_eq!(fb.count_in(&fill, RED), 0);
        // Outline is still drawn
        assert!(fb.count_in(&fill.offset(4), RED) > 0);
    }

    #[test]
    fn test_error_readout_is_red() {
        let layout = layout();
        let mut fb = Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_connection_error(&mut fb, &layout);
        assert!(fb.count_in(&status_icon_box(&layout), RED) > 0);
        assert!(fb.count_in(&status_text_box(&layout, false), RED) > 0);
        assert_eq!(fb.count_in(&status_icon_box(&layout), WHITE), 0);
    }

    #[test]
    fn test_speed_readout_is_white() {
        let layout = layout();
        let mut fb = Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_speed_readout(&mut fb, &layout, 140);
        assert!(fb.count_in(&status_icon_box(&layout), WHITE) > 0);
        assert!(fb.count_in(&status_text_box(&layout, true), WHITE) > 0);
        assert_eq!(fb.count_in(&status_icon_box(&layout), RED), 0);
    }
}
