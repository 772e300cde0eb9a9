//! Looping frame animation
//!
//! Frames are plain indices; the presentation layer maps them onto texture
//! regions. The animation holds no clock of its own: callers pass the shared
//! elapsed time of the round.

use serde::{Deserialize, Serialize};

/// A fixed-rate, endlessly looping frame sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Number of frames in the loop (at least 1)
    pub frame_count: usize,
    /// Seconds each frame stays on screen
    pub frame_duration: f32,
}

impl Animation {
    pub fn new(frame_count: usize, frame_duration: f32) -> Self {
        debug_assert!(frame_count > 0, "animation needs at least one frame");
        debug_assert!(frame_duration > 0.0, "frame duration must be positive");
        Self {
            frame_count,
            frame_duration,
        }
    }

    /// A single still frame
    pub fn still() -> Self {
        Self::new(1, 1.0)
    }

    /// Frame shown at `elapsed` seconds: `floor(elapsed / duration) mod count`
    pub fn frame_at(&self, elapsed: f32) -> usize {
        if self.frame_count <= 1 || elapsed <= 0.0 {
            return 0;
        }
        let ticks = (elapsed / self.frame_duration).floor() as u64;
        (ticks % self.frame_count as u64) as usize
    }

    /// Length of one full loop in seconds
    pub fn cycle_duration(&self) -> f32 {
        self.frame_duration * self.frame_count as f32
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::still()
    }
}
