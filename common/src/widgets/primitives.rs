//! Low-level drawing primitives shared across widgets.
//!
//! # Background Gradient
//!
//! The background is a linear gradient along the top-left to bottom-right
//! diagonal. Each pixel's color comes from its projection onto that
//! diagonal, so lines perpendicular to it share one color. The whole area is
//! streamed through `fill_contiguous` in row-major order, which lets
//! framebuffer targets write it without per-pixel bounds checks.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::colors::{BACKGROUND, GRADIENT_START_BLUE};
use crate::styles::BOX_CENTERED;

/// Gradient color at `offset` inside an area of `size`.
///
/// Full `GRADIENT_START_BLUE` at the top-left corner, black at the
/// bottom-right corner.
pub fn gradient_color(
    offset: Point,
    size: Size,
) -> Rgb565 {
    let w = i64::from(size.width);
    let h = i64::from(size.height);
    let length_sq = w * w + h * h;
    if length_sq == 0 {
        return Rgb565::new(0, 0, GRADIENT_START_BLUE);
    }

    let projection = (i64::from(offset.x) * w + i64::from(offset.y) * h).clamp(0, length_sq);
    let blue = i64::from(GRADIENT_START_BLUE) * (length_sq - projection) / length_sq;
    Rgb565::new(0, 0, blue as u8)
}

/// Fill the whole target with the base color, then the diagonal gradient.
pub fn draw_background<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let area = display.bounding_box();
    display.fill_solid(&area, BACKGROUND).ok();

    let origin = area.top_left;
    let colors = area.points().map(|p| gradient_color(p - origin, area.size));
    display.fill_contiguous(&area, colors).ok();
}

/// Draw `text` centered in `area`.
pub fn draw_text_in<D>(
    display: &mut D,
    text: &str,
    area: &Rectangle,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, area.center(), style, BOX_CENTERED)
        .draw(display)
        .ok();
}
