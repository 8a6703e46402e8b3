//! Frame timing.

use std::time::{Duration, Instant};

/// How often the FPS estimate refreshes.
const FPS_WINDOW: Duration = Duration::from_millis(500);

/// Per-frame clock: yields the real seconds elapsed since the previous
/// frame and keeps a smoothed frames-per-second estimate for the panel.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    frame_count: u64,
    fps: f32,
    window_start: Instant,
    window_frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            frame_count: 0,
            fps: 0.0,
            window_start: now,
            window_frames: 0,
        }
    }

    /// Advance one frame; returns the seconds since the previous call
    /// (since construction, for the first call).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let window = now.duration_since(self.window_start);
        if window >= FPS_WINDOW {
            self.fps = (self.frame_count - self.window_frames) as f32 / window.as_secs_f32();
            self.window_frames = self.frame_count;
            self.window_start = now;
        }

        delta
    }

    /// Frames ticked since construction.
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frames per second; 0 until the first window closes.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_clock_is_fresh() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.01);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_fps_updates_after_window() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert_eq!(clock.fps(), 0.0);

        thread::sleep(FPS_WINDOW);
        clock.tick();
        assert!(clock.fps() > 0.0);
    }
}
