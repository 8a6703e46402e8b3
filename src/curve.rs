//! The curve entity: one animated Lissajous figure.
//!
//! A curve's shape is fixed the moment it spawns; what animates is its
//! color, blending from a start color to an end color as it ages. Geometry
//! is re-sampled from the parameters every frame rather than cached - the
//! host clears the canvas each frame anyway, and 500 sine evaluations are
//! cheap next to keeping a point buffer coherent.

use std::f32::consts::TAU;

use crate::color::Rgb;
use crate::controls::Controls;
use crate::spawn::RandomSource;
use crate::surface::PixelSurface;

/// Points plotted per curve per frame.
pub const SAMPLES: u32 = 500;

/// Angle step divisor: sample `i` sits at `i / 50` radians, so the full set
/// covers `[0, 10)` radians of the base parametrization.
const SPREAD: f32 = 50.0;

/// Shape and lifetime parameters, fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Horizontal swing, pixels.
    pub amplitude_x: f32,
    /// Vertical swing, pixels.
    pub amplitude_y: f32,
    /// Angular-frequency multiplier on the x oscillation.
    pub freq_x: u32,
    /// Angular-frequency multiplier on the y oscillation.
    pub freq_y: u32,
    /// Phase offset on the x oscillation, radians.
    pub phase: f32,
    /// Total lifetime, seconds.
    pub duration: f32,
}

impl CurveParams {
    /// Draw randomized parameters from the current slider maxima.
    ///
    /// Amplitudes are whole pixel counts in `[50, amplitude]`, frequencies
    /// integers in `[1, frequency]`, phase uniform in `[0, 2π)`, duration
    /// uniform in `[2, duration]` seconds. The maxima must already sit
    /// inside their slider ranges.
    pub fn draw(controls: &Controls, rng: &mut dyn RandomSource) -> Self {
        Self {
            amplitude_x: rng.uniform_int(50, controls.amplitude as u32) as f32,
            amplitude_y: rng.uniform_int(50, controls.amplitude as u32) as f32,
            freq_x: rng.uniform_int(1, controls.frequency as u32),
            freq_y: rng.uniform_int(1, controls.frequency as u32),
            phase: rng.uniform(0.0, TAU),
            duration: rng.uniform(2.0, controls.duration),
        }
    }
}

/// One live figure.
#[derive(Debug, Clone)]
pub struct Curve {
    params: CurveParams,
    /// Seconds lived so far. Only ever grows.
    age: f32,
    start_color: Rgb,
    end_color: Rgb,
}

impl Curve {
    /// A curve at age zero with two freshly drawn gradient colors.
    pub fn new(params: CurveParams, rng: &mut dyn RandomSource) -> Self {
        Self {
            params,
            age: 0.0,
            start_color: Rgb::random(rng),
            end_color: Rgb::random(rng),
        }
    }

    /// Accumulate elapsed time.
    pub fn advance(&mut self, elapsed: f32) {
        self.age += elapsed;
    }

    /// A curve past its duration draws nothing and is waiting for eviction.
    pub fn is_expired(&self) -> bool {
        self.age > self.params.duration
    }

    /// Plot the figure at its current age.
    ///
    /// Samples [`SAMPLES`] points of
    ///
    /// ```text
    /// x = cx + amplitude_x * sin(freq_x * angle + phase)
    /// y = cy + amplitude_y * sin(freq_y * angle)
    /// ```
    ///
    /// around the surface midpoint `(cx, cy)`, each floored to a pixel and
    /// written in the current gradient color. Expired curves draw nothing.
    pub fn render(&self, surface: &mut impl PixelSurface) {
        if self.is_expired() {
            return;
        }
        let t = self.age / self.params.duration;
        let color = self.start_color.lerp(self.end_color, t);
        let center_x = (surface.width() / 2) as f32;
        let center_y = (surface.height() / 2) as f32;

        for i in 0..SAMPLES {
            let angle = i as f32 / SPREAD;
            let x = center_x
                + self.params.amplitude_x * (self.params.freq_x as f32 * angle + self.params.phase).sin();
            let y = center_y + self.params.amplitude_y * (self.params.freq_y as f32 * angle).sin();
            surface.set_pixel(x.floor() as i32, y.floor() as i32, color);
        }
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn duration(&self) -> f32 {
        self.params.duration
    }

    pub fn start_color(&self) -> Rgb {
        self.start_color
    }

    pub fn end_color(&self) -> Rgb {
        self.end_color
    }
}
