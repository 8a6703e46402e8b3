//! The slider-owned parameters the simulation reads each frame.

use std::ops::RangeInclusive;

/// Slider range for the amplitude maximum, pixels.
pub const AMPLITUDE_RANGE: RangeInclusive<f32> = 50.0..=300.0;
/// Slider range for the frequency maximum.
pub const FREQUENCY_RANGE: RangeInclusive<f32> = 1.0..=10.0;
/// Slider range for the lifetime maximum, seconds.
pub const DURATION_RANGE: RangeInclusive<f32> = 2.0..=15.0;

/// Current values of the three user-facing parameters.
///
/// Each value is the upper bound of the range new curves draw from. The UI
/// layer keeps every value inside its slider range; the simulation reads
/// them as-is and does not validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Upper bound for spawned curve amplitudes, pixels.
    pub amplitude: f32,
    /// Upper bound for spawned curve frequency multipliers.
    pub frequency: f32,
    /// Upper bound for spawned curve lifetimes, seconds.
    pub duration: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            amplitude: 150.0,
            frequency: 3.0,
            duration: 7.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_inside_slider_ranges() {
        let controls = Controls::default();
        assert!(AMPLITUDE_RANGE.contains(&controls.amplitude));
        assert!(FREQUENCY_RANGE.contains(&controls.frequency));
        assert!(DURATION_RANGE.contains(&controls.duration));
    }
}
