//! # Lissa - interactive Lissajous art
//!
//! An ever-changing field of Lissajous figures. Curves spawn on a random
//! cadence, each with its own amplitudes, frequencies, phase and lifetime;
//! over that lifetime the figure's color slides from one random tone to
//! another, then the curve disappears and leaves room for the next one.
//! Three sliders steer the population: the amplitude, frequency and
//! lifetime ranges new curves draw from.
//!
//! This library holds the simulation only. It knows nothing about windows
//! or widgets; each frame it takes elapsed seconds, the current slider
//! values and a [`surface::PixelSurface`] to plot into. The binary target
//! wires those up with winit, wgpu and egui.
//!
//! ## Quick start
//!
//! ```ignore
//! use lissa::prelude::*;
//!
//! let mut scene = Scene::new();
//! let controls = Controls::default();
//! let mut canvas = Framebuffer::new(800, 800);
//!
//! // each frame:
//! canvas.clear(Rgb::BLACK);
//! scene.tick(delta_seconds, &controls, &mut canvas);
//! // ...upload the canvas bytes and present
//! ```

pub mod color;
pub mod controls;
pub mod curve;
pub mod scene;
pub mod spawn;
pub mod surface;
pub mod time;

pub use color::Rgb;
pub use controls::Controls;
pub use curve::{Curve, CurveParams};
pub use scene::Scene;
pub use spawn::{EntropySource, RandomSource};
pub use surface::{Framebuffer, PixelSurface};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::controls::Controls;
    pub use crate::curve::{Curve, CurveParams};
    pub use crate::scene::Scene;
    pub use crate::spawn::{EntropySource, RandomSource};
    pub use crate::surface::{Framebuffer, PixelSurface};
    pub use crate::time::FrameClock;
}
