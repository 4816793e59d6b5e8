//! Frame timing.
//!
//! [`FrameClock`] measures the time between frames and hands it to the game
//! as `dt`. Long stalls (window drags, breakpoints) are clamped so a single
//! frame never moves the world by more than `max_step` seconds.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//!
//! // once per frame
//! let dt = clock.restart();
//! game.update(dt, controls);
//! ```

use std::time::{Duration, Instant};

/// Largest step handed out by default, in seconds.
pub const DEFAULT_MAX_STEP: f32 = 0.25;

/// Wall-clock frame timer.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    max_step: f32,
    frame_count: u64,
    paused: bool,
    /// FPS estimate, refreshed every `fps_interval`.
    fps: f32,
    fps_frames: u64,
    fps_since: Instant,
    fps_interval: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            max_step: DEFAULT_MAX_STEP,
            frame_count: 0,
            paused: false,
            fps: 0.0,
            fps_frames: 0,
            fps_since: now,
            fps_interval: Duration::from_millis(500),
        }
    }

    /// Set the largest `dt` [`restart`](Self::restart) may return.
    pub fn with_max_step(mut self, seconds: f32) -> Self {
        self.max_step = seconds.max(0.0);
        self
    }

    /// Seconds since the previous call (or since creation), clamped to the
    /// maximum step. Always non-negative; zero while paused.
    pub fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.paused {
            return 0.0;
        }

        self.frame_count += 1;
        self.fps_frames += 1;
        let window = now.duration_since(self.fps_since);
        if window >= self.fps_interval {
            self.fps = self.fps_frames as f32 / window.as_secs_f32();
            self.fps_frames = 0;
            self.fps_since = now;
        }

        raw.min(self.max_step)
    }

    /// Frames counted by [`restart`](Self::restart), pauses excluded.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// True on every `every`-th counted frame, never while paused.
    pub fn is_periodic_frame(&self, every: u64) -> bool {
        !self.paused && every > 0 && self.frame_count > 0 && self.frame_count % every == 0
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
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
    fn test_restart_measures_elapsed() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let dt = clock.restart();

        assert!(dt > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_restart_clamps_long_frames() {
        let mut clock = FrameClock::new().with_max_step(0.005);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.restart(), 0.005);
    }

    #[test]
    fn test_paused_clock_yields_zero() {
        let mut clock = FrameClock::new();
        clock.set_paused(true);
        thread::sleep(Duration::from_millis(60));

        assert_eq!(clock.restart(), 0.0);
        assert_eq!(clock.frame(), 0);

        clock.toggle_pause();
        assert!(!clock.is_paused());
        // Time spent paused is not handed out afterwards.
        assert!(clock.restart() < 0.05);
    }

    #[test]
    fn test_periodic_frame_is_silent_while_paused() {
        let mut clock = FrameClock::new();
        assert!(!clock.is_periodic_frame(3));
        for _ in 0..3 {
            clock.restart();
        }
        assert!(clock.is_periodic_frame(3));
        assert!(!clock.is_periodic_frame(0));

        // The count stops on a multiple while paused; it must not keep firing.
        clock.set_paused(true);
        clock.restart();
        assert_eq!(clock.frame(), 3);
        assert!(!clock.is_periodic_frame(3));

        clock.set_paused(false);
        clock.restart();
        assert!(!clock.is_periodic_frame(3));
    }

    #[test]
    fn test_negative_max_step_clamps_to_zero() {
        let clock = FrameClock::new().with_max_step(-1.0);
        assert_eq!(clock.max_step(), 0.0);
    }
}
