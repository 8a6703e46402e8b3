//! Spawn scheduling and curve lifecycle.

use crate::controls::Controls;
use crate::curve::{Curve, CurveParams};
use crate::spawn::{EntropySource, RandomSource};
use crate::surface::PixelSurface;

/// Lower bound of the random spawn interval, seconds.
pub const SPAWN_INTERVAL_MIN: f32 = 1.0;
/// Upper bound of the random spawn interval, seconds.
pub const SPAWN_INTERVAL_MAX: f32 = 3.0;

/// Owns every live curve and decides when a new one appears.
///
/// Nothing caps the live set: when spawn intervals run shorter than typical
/// curve durations the collection grows and frame time degrades with it.
/// The trade is visual density against throughput, settled by the sliders.
///
/// ```ignore
/// let mut scene = Scene::new();
/// let controls = Controls::default();
/// let mut canvas = Framebuffer::new(800, 800);
///
/// // once per frame, after clearing the canvas:
/// scene.tick(delta_seconds, &controls, &mut canvas);
/// ```
pub struct Scene<R: RandomSource = EntropySource> {
    curves: Vec<Curve>,
    /// Seconds since the last spawn.
    spawn_timer: f32,
    rng: R,
}

impl Scene<EntropySource> {
    pub fn new() -> Self {
        Self::with_random_source(EntropySource::new())
    }
}

impl Default for Scene<EntropySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Scene<R> {
    /// A scene drawing its randomness from an explicit source.
    pub fn with_random_source(rng: R) -> Self {
        Self {
            curves: Vec::new(),
            spawn_timer: 0.0,
            rng,
        }
    }

    /// One frame of simulation: maybe spawn, then age, evict and draw.
    ///
    /// The spawn check draws a fresh threshold from
    /// `[SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX]` on every tick until one
    /// fires, so the effective inter-spawn interval is a max-of-repeated-
    /// draws process rather than a clean uniform; higher frame rates skew
    /// spawns toward the long end.
    ///
    /// A curve spawned this tick ages and renders with the rest. A curve
    /// whose age passes its duration is dropped without rendering.
    pub fn tick(&mut self, elapsed: f32, controls: &Controls, surface: &mut impl PixelSurface) {
        self.spawn_timer += elapsed;

        let threshold = self.rng.uniform(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX);
        if self.spawn_timer > threshold {
            let params = CurveParams::draw(controls, &mut self.rng);
            self.curves.push(Curve::new(params, &mut self.rng));
            self.spawn_timer = 0.0;
        }

        // Survivor rebuild instead of removal mid-iteration.
        self.curves.retain_mut(|curve| {
            curve.advance(elapsed);
            if curve.is_expired() {
                false
            } else {
                curve.render(surface);
                true
            }
        });
    }

    /// The live curves, in spawn order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Seconds accumulated toward the next spawn.
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Drop every live curve. The spawn timer keeps running.
    pub fn clear(&mut self) {
        self.curves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    /// Counts writes; never clips.
    struct CountingSurface {
        writes: usize,
    }

    impl PixelSurface for CountingSurface {
        fn width(&self) -> u32 {
            800
        }

        fn height(&self) -> u32 {
            800
        }

        fn set_pixel(&mut self, _x: i32, _y: i32, _color: Rgb) {
            self.writes += 1;
        }
    }

    /// Replays fixed sequences of draws in call order.
    struct Script {
        floats: Vec<f32>,
        ints: Vec<u32>,
        next_float: usize,
        next_int: usize,
    }

    impl Script {
        fn new(floats: &[f32], ints: &[u32]) -> Self {
            Self {
                floats: floats.to_vec(),
                ints: ints.to_vec(),
                next_float: 0,
                next_int: 0,
            }
        }
    }

    impl RandomSource for Script {
        fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
            let value = self.floats[self.next_float];
            self.next_float += 1;
            assert!(lo <= value && value <= hi, "scripted {value} outside [{lo}, {hi}]");
            value
        }

        fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
            let value = self.ints[self.next_int];
            self.next_int += 1;
            assert!((lo..=hi).contains(&value), "scripted {value} outside [{lo}, {hi}]");
            value
        }
    }

    #[test]
    fn test_no_spawn_before_minimum_interval() {
        // Whatever threshold gets drawn is at least SPAWN_INTERVAL_MIN, so
        // half a second of accumulated time can never spawn.
        let mut scene = Scene::with_random_source(EntropySource::seeded(17));
        let controls = Controls::default();
        let mut surface = CountingSurface { writes: 0 };

        for _ in 0..10 {
            scene.tick(0.05, &controls, &mut surface);
        }
        assert!(scene.curves().is_empty());
        assert_eq!(surface.writes, 0);
        assert!(scene.spawn_timer() > 0.0);
    }

    #[test]
    fn test_spawn_fires_when_timer_passes_threshold() {
        // Thresholds pinned at 1.5s; ticks of 0.6s cross on the third tick.
        // Spawn draw order: amplitudes, frequencies (ints), then phase and
        // duration (floats), then six color channels (ints).
        let script = Script::new(
            &[1.5, 1.5, 1.5, 0.3, 2.5],
            &[60, 70, 1, 2, 50, 60, 70, 80, 90, 100],
        );
        let mut scene = Scene::with_random_source(script);
        let controls = Controls::default();
        let mut surface = CountingSurface { writes: 0 };

        scene.tick(0.6, &controls, &mut surface);
        scene.tick(0.6, &controls, &mut surface);
        assert!(scene.curves().is_empty());
        assert_eq!(surface.writes, 0);

        scene.tick(0.6, &controls, &mut surface);
        assert_eq!(scene.curves().len(), 1);
        assert_eq!(scene.spawn_timer(), 0.0);
        // the fresh curve aged and rendered on its spawn tick
        let curve = &scene.curves()[0];
        assert_eq!(curve.age(), 0.6);
        assert_eq!(surface.writes, crate::curve::SAMPLES as usize);

        let p = curve.params();
        assert_eq!(p.amplitude_x, 60.0);
        assert_eq!(p.amplitude_y, 70.0);
        assert_eq!(p.freq_x, 1);
        assert_eq!(p.freq_y, 2);
        assert_eq!(p.phase, 0.3);
        assert_eq!(p.duration, 2.5);
    }

    #[test]
    fn test_expired_curve_removed_without_rendering() {
        // One curve with duration 2.5s; thresholds then stay high so no
        // second spawn interferes while it ages out.
        let script = Script::new(
            &[1.5, 1.5, 1.5, 0.3, 2.5, 3.0, 3.0, 3.0, 3.0],
            &[60, 70, 1, 2, 50, 60, 70, 80, 90, 100],
        );
        let mut scene = Scene::with_random_source(script);
        let controls = Controls::default();
        let mut surface = CountingSurface { writes: 0 };

        for _ in 0..3 {
            scene.tick(0.6, &controls, &mut surface);
        }
        assert_eq!(scene.curves().len(), 1);

        // ages 1.2, 1.8, 2.4: still live
        for _ in 0..3 {
            scene.tick(0.6, &controls, &mut surface);
        }
        assert_eq!(scene.curves().len(), 1);
        let writes_before = surface.writes;

        // age 3.0 > 2.5: evicted, nothing drawn this tick
        scene.tick(0.6, &controls, &mut surface);
        assert!(scene.curves().is_empty());
        assert_eq!(surface.writes, writes_before);
    }

    #[test]
    fn test_clear_drops_curves_not_timer() {
        let script = Script::new(
            &[1.5, 1.5, 1.5, 0.3, 2.5, 3.0],
            &[60, 70, 1, 2, 50, 60, 70, 80, 90, 100],
        );
        let mut scene = Scene::with_random_source(script);
        let controls = Controls::default();
        let mut surface = CountingSurface { writes: 0 };

        for _ in 0..4 {
            scene.tick(0.6, &controls, &mut surface);
        }
        assert_eq!(scene.curves().len(), 1);

        let timer = scene.spawn_timer();
        assert!(timer > 0.0);
        scene.clear();
        assert!(scene.curves().is_empty());
        assert_eq!(scene.spawn_timer(), timer);
    }
}
