//! Centralized readout threshold configuration.
//!
//! All thresholds are compile-time constants with ordering assertions, so a
//! misconfigured band fails the build instead of rendering the wrong color.
//!
//! # Usage
//!
//! ```ignore
//! use cluster_common::thresholds::{TEMP_HOT, BATTERY_OK};
//! ```

// =============================================================================
// Temperature Icon Thresholds (degrees C)
// =============================================================================

/// Below this value the thermometer is WHITE (near freezing).
pub const TEMP_NORMAL_MIN: i32 = 5;

/// At or above this value the thermometer is RED.
/// Between `TEMP_NORMAL_MIN` and this value (exclusive) it is BLUE.
pub const TEMP_HOT: i32 = 40;

const _: () = assert!(TEMP_NORMAL_MIN < TEMP_HOT);

// =============================================================================
// Battery Icon Thresholds (percent)
// =============================================================================

/// Below this value the battery icon is RED.
pub const BATTERY_LOW: i32 = 25;

/// At or above this value the battery icon is GREEN.
/// Between `BATTERY_LOW` and this value (exclusive) it is YELLOW.
pub const BATTERY_OK: i32 = 50;

/// A full battery. The fill bar reaches its nominal height here.
pub const BATTERY_FULL: i32 = 100;

const _: () = assert!(0 < BATTERY_LOW);
const _: () = assert!(BATTERY_LOW < BATTERY_OK);
const _: () = assert!(BATTERY_OK < BATTERY_FULL);

// =============================================================================
// Speed Range (km/h)
// =============================================================================

/// Top of the speedometer scale.
pub const SPEED_MAX_KMH: i32 = 240;

/// Distance between two numbered labels on the dial.
pub const SPEED_LABEL_STEP_KMH: i32 = 20;

const _: () = assert!(SPEED_MAX_KMH % SPEED_LABEL_STEP_KMH == 0);

/// Number of numbered labels (and major ticks), including both ends.
pub const SPEED_LABEL_COUNT: usize = (SPEED_MAX_KMH / SPEED_LABEL_STEP_KMH) as usize + 1;

/// Number of equal subdivisions used for the minor tick ring.
pub const MINOR_TICK_DIVISIONS: usize = 48;

// Every major tick must land on a minor subdivision.
const _: () = assert!(MINOR_TICK_DIVISIONS % (SPEED_LABEL_COUNT - 1) == 0);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_threshold_ordering() {
        assert!(TEMP_NORMAL_MIN < TEMP_HOT);
    }

    #[test]
    fn test_battery_threshold_ordering() {
        assert!(BATTERY_LOW < BATTERY_OK);
        assert!(BATTERY_OK < BATTERY_FULL);
    }

    #[test]
    fn test_speed_label_count() {
        // 0, 20, ..., 240
        assert_eq!(SPEED_LABEL_COUNT, 13);
    }

    #[test]
    fn test_minor_divisions_align_with_labels() {
        assert_eq!(MINOR_TICK_DIVISIONS / (SPEED_LABEL_COUNT - 1), 4);
    }
}
