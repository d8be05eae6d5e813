//! Speedometer dial: arc, hub, needle, numbered labels and tick rings.

use core::f32::consts::PI;
use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, Triangle};
use embedded_graphics::text::Text;
use heapless::String;
use micromath::F32;

use crate::config::{
    HUB_RADIUS,
    LABEL_INSET,
    MAJOR_TICK_INNER_INSET,
    MINOR_TICK_INNER_INSET,
    NEEDLE_BASE_DROP,
    NEEDLE_BASE_HALF_WIDTH,
    NEEDLE_LENGTH,
    TICK_OUTER_INSET,
};
use crate::geometry::{DIAL_SPAN_DEG, DIAL_START_DEG, DialLayout, minor_ticks, polar, speed_marks};
use crate::styles::{ARC_STYLE, BOX_CENTERED, DIAL_LABEL_STYLE, HEAVY_TICK_STYLE, HUB_STYLE, LIGHT_TICK_STYLE, NEEDLE_STYLE};

/// Draw the 240° scale arc, open at the bottom.
pub fn draw_dial_arc<D>(
    display: &mut D,
    layout: &DialLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // embedded-graphics measures clockwise from +x, so the zero mark at
    // 210° counter-clockwise starts at 150° here and sweeps clockwise.
    Arc::with_center(
        layout.center,
        (layout.radius * 2) as u32,
        (360.0 - DIAL_START_DEG).deg(),
        DIAL_SPAN_DEG.deg(),
    )
    .into_styled(ARC_STYLE)
    .draw(display)
    .ok();
}

pub fn draw_hub<D>(
    display: &mut D,
    layout: &DialLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(layout.center, HUB_RADIUS * 2)
        .into_styled(HUB_STYLE)
        .draw(display)
        .ok();
}

/// Corners of the needle triangle: two base corners near the hub and the tip.
pub fn needle_triangle(
    layout: &DialLayout,
    angle_deg: f32,
) -> [Point; 3] {
    let c = layout.center;
    let tip = polar(c, NEEDLE_LENGTH as f32, angle_deg);
    let sin = F32(angle_deg * PI / 180.0).sin().0;
    let base = Point::new(c.x, c.y + (NEEDLE_BASE_DROP * sin) as i32);
    let hw = NEEDLE_BASE_HALF_WIDTH;
    [
        Point::new(base.x - hw, base.y - hw),
        Point::new(base.x + hw, base.y - hw),
        tip,
    ]
}

pub fn draw_needle<D>(
    display: &mut D,
    layout: &DialLayout,
    angle_deg: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let [a, b, tip] = needle_triangle(layout, angle_deg);
    Triangle::new(a, b, tip)
        .into_styled(NEEDLE_STYLE)
        .draw(display)
        .ok();
}

/// Draw the 0-240 speed numbers just inside the tick rings.
pub fn draw_speed_labels<D>(
    display: &mut D,
    layout: &DialLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for mark in speed_marks() {
        let mut label: String<4> = String::new();
        let _ = write!(label, "{}", mark.speed_kmh);
        Text::with_text_style(
            &label,
            layout.at(LABEL_INSET, mark.angle_deg),
            DIAL_LABEL_STYLE,
            BOX_CENTERED,
        )
        .draw(display)
        .ok();
    }
}

/// Draw the major ticks at every label and the minor ring between them.
pub fn draw_ticks<D>(
    display: &mut D,
    layout: &DialLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for mark in speed_marks() {
        Line::new(
            layout.at(MAJOR_TICK_INNER_INSET, mark.angle_deg),
            layout.at(TICK_OUTER_INSET, mark.angle_deg),
        )
        .into_styled(HEAVY_TICK_STYLE)
        .draw(display)
        .ok();
    }

    for tick in minor_ticks() {
        let style = if tick.heavy { HEAVY_TICK_STYLE } else { LIGHT_TICK_STYLE };
        Line::new(
            layout.at(MINOR_TICK_INNER_INSET, tick.angle_deg),
            layout.at(TICK_OUTER_INSET, tick.angle_deg),
        )
        .into_styled(style)
        .draw(display)
        .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::test_support::Framebuffer;

    fn layout() -> DialLayout { DialLayout::centered_in(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn distance(
        a: Point,
        b: Point,
    ) -> f32 {
        let d = a - b;
        ((d.x * d.x + d.y * d.y) as f32).sqrt()
    }

    #[test]
    fn test_needle_tip_length() {
        let layout = layout();
        for speed in [0, 60, 120, 180, 240] {
            let angle = crate::geometry::needle_angle_deg(speed);
            let [_, _, tip] = needle_triangle(&layout, angle);
            let len = distance(tip, layout.center);
            assert!((len - NEEDLE_LENGTH as f32).abs() <= 2.0, "speed {speed}: {len}");
        }
    }

    #[test]
    fn test_needle_points_up_at_mid_scale() {
        let layout = layout();
        let [_, _, tip] = needle_triangle(&layout, crate::geometry::needle_angle_deg(120));
        assert!((tip.x - layout.center.x).abs() <= 1);
        assert!(tip.y < layout.center.y);
    }

    #[test]
    fn test_arc_is_open_at_bottom() {
        let layout = layout();
        let mut fb = Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_dial_arc(&mut fb, &layout);

        // Top of the circle is on the scale
        let top = Point::new(layout.center.x, layout.top());
        let near_top = embedded_graphics::primitives::Rectangle::with_center(top, Size::new(5, 11));
        assert!(fb.count_in(&near_top, WHITE) > 0);

        // Bottom of the circle is the gap
        let bottom = Point::new(layout.center.x, layout.bottom() - 1);
        let near_bottom = embedded_graphics::primitives::Rectangle::with_center(bottom, Size::new(5, 11));
        assert_eq!(fb.count_in(&near_bottom, WHITE), 0);
    }

    #[test]
    fn test_ticks_stay_inside_rim() {
        let layout = layout();
        let mut fb = Framebuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_ticks(&mut fb, &layout);

        // Nothing drawn in the bottom gap below the hub
        let gap = embedded_graphics::primitives::Rectangle::new(
            Point::new(layout.center.x - 60, layout.center.y + 150),
            Size::new(120, 90),
        );
        assert_eq!(fb.count_in(&gap, WHITE), 0);

        // Major tick straight up at 120 km/h
        let up = layout.at(15, 90.0);
        assert_eq!(fb.pixel(up), Some(WHITE));
    }
}
