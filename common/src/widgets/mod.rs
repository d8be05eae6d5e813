//! Widget components for the instrument cluster.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so the same code
//! renders into the simulator window and into test framebuffers.

mod dial;
mod indicators;
mod primitives;

pub use dial::{draw_dial_arc, draw_hub, draw_needle, draw_speed_labels, draw_ticks, needle_triangle};
pub use indicators::{
    CONNECTION_ERROR_TEXT,
    arrow_box,
    battery_color,
    battery_fill_area,
    battery_text_box,
    draw_battery_icon,
    draw_battery_text,
    draw_connection_error,
    draw_gauge_icon,
    draw_speed_readout,
    draw_temperature,
    draw_thermometer,
    draw_turn_arrow,
    status_icon_box,
    status_text_box,
    temperature_color,
    temperature_text_box,
    thermometer_box,
};
pub use primitives::{draw_background, draw_text_in, gradient_color};
