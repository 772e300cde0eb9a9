//! Alien Drift - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, spawning, collisions, round state)
//! - `session`: Score and high-score bookkeeping
//! - `persistence`: High-score storage behind a small trait
//! - `game`: Screen state machine tying input, simulation and session together
//! - `settings`: Player preferences

pub mod game;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::{Game, Screen, Sprite};
pub use highscores::HighScores;
pub use session::{ScoringRule, Session};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration once the player has jumped (pixels/s², y grows upward)
    pub const GRAVITY: f32 = -900.0;
    /// Vertical velocity set by an impulse (overwrites, never adds)
    pub const BOUNCE_VELOCITY: f32 = 320.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 46.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    pub const PLAYER_START_X: f32 = 100.0;
    /// Player may roam the left part of the screen only
    pub const PLAYER_BOUNDS_FRACTION: f32 = 0.5;
    pub const PLAYER_FRAME_DURATION: f32 = 0.15;
    pub const PLAYER_FRAME_COUNT: usize = 1;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const OBSTACLE_HEIGHT: f32 = 64.0;
    pub const OBSTACLE_FRAME_DURATION: f32 = 0.2;
    pub const OBSTACLE_FRAME_COUNT: usize = 4;
    /// Number of planet skins the presentation layer can draw
    pub const OBSTACLE_VARIANTS: usize = 6;

    /// Shrink applied to every side of both rectangles before overlap tests
    pub const COLLISION_MARGIN: f32 = 5.0;

    /// Placement heuristic
    pub const PLACEMENT_ATTEMPTS: u32 = 10;
    pub const MIN_SEPARATION: f32 = 80.0;
    /// Width of the off-screen band new obstacles appear in
    pub const SPAWN_BAND_WIDTH: f32 = 80.0;
    /// Absorbs float drift when summing frame deltas against the spawn interval
    pub const SPAWN_TIMER_EPSILON: f32 = 1e-4;

    /// Game-over screen ignores keys for this long (players are still mashing)
    pub const GAME_OVER_INPUT_DELAY: f32 = 1.0;
}

/// Live screen geometry, queried every frame rather than fixed at startup.
pub trait Viewport {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    #[inline]
    fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}

impl Viewport for Vec2 {
    #[inline]
    fn width(&self) -> f32 {
        self.x
    }

    #[inline]
    fn height(&self) -> f32 {
        self.y
    }
}

impl Viewport for (f32, f32) {
    #[inline]
    fn width(&self) -> f32 {
        self.0
    }

    #[inline]
    fn height(&self) -> f32 {
        self.1
    }
}
