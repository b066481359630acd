//! Frame clock.
//!
//! Turns monotonic timestamps into per-frame delta seconds, counts frames
//! and keeps a rolling FPS figure for the window title.
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // Once per redraw:
//! let dt = time.update();
//! fireworks.step(dt);
//! ```

use std::time::{Duration, Instant};

/// Time tracking for the frame loop.
#[derive(Debug)]
pub struct Time {
    /// When the timer was created or last reset.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// Set on the frame the FPS figure was refreshed.
    fps_refreshed: bool,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a time tracker whose first frame is measured from `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            fps_refreshed: false,
        }
    }

    /// Update timing values using the current instant. Call once per frame.
    ///
    /// Returns the delta time in seconds.
    pub fn update(&mut self) -> f32 {
        self.update_at(Instant::now())
    }

    /// Update timing values for a frame that happened at `now`.
    ///
    /// Timestamps earlier than the previous frame give a zero delta.
    pub fn update_at(&mut self, now: Instant) -> f32 {
        self.delta_secs = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        self.fps_refreshed = false;
        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            self.fps_refreshed = true;
        }

        self.delta_secs
    }

    /// Time since last frame in seconds (delta time).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total elapsed time in seconds up to the last frame.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.last_frame.saturating_duration_since(self.start).as_secs_f32()
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// True if the last [`update`](Self::update) recomputed the FPS figure.
    #[inline]
    pub fn fps_refreshed(&self) -> bool {
        self.fps_refreshed
    }

    /// Restart the clock so the next frame is measured from now.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
