//! Round state and core simulation types
//!
//! Everything that changes during a round lives in [`RoundState`]. Tuning is
//! frozen into a [`RoundConfig`] when the round is set up and never touched
//! again until the next round.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::Animation;
use super::difficulty::Difficulty;
use super::entity::Entity;
use super::rect::Rect;
use super::spawn::SeparationRule;
use crate::Viewport;
use crate::consts::*;

/// Phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Set up, waiting for the first frame
    Ready,
    /// Active gameplay
    Running,
    /// Round ended (terminal)
    Over,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Player touched an obstacle
    Collision,
    /// Player fell to the bottom of the screen
    Floor,
    /// Player flew into the top of the screen
    Ceiling,
    /// Player gave up (Escape)
    Quit,
}

/// Notifications for the presentation layer (animation swaps, sounds, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { difficulty: Difficulty },
    Jumped,
    ObstacleSpawned { id: u32, variant: usize },
    ObstaclesPassed { count: u32 },
    NewHighScore { difficulty: Difficulty, score: u64 },
    RoundOver { cause: EndCause },
}

/// Tuning for one round, built once when the round is set up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub difficulty: Difficulty,
    pub spawn_interval_seconds: f32,
    /// Obstacle speed at round start (pixels/s)
    pub obstacle_speed: f32,
    pub max_on_screen: usize,
    /// Speed gained by new obstacles per second of play
    pub speed_ramp: f32,
    pub separation: SeparationRule,
    pub obstacle_size: Vec2,
    /// Skins to pick from for each new obstacle
    pub obstacle_variants: usize,
}

impl RoundConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let params = difficulty.params();
        Self {
            difficulty,
            spawn_interval_seconds: params.spawn_interval_seconds,
            obstacle_speed: params.obstacle_speed,
            max_on_screen: params.max_on_screen,
            speed_ramp: params.speed_ramp,
            separation: SeparationRule::default(),
            obstacle_size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            obstacle_variants: OBSTACLE_VARIANTS,
        }
    }

    pub fn with_separation(mut self, separation: SeparationRule) -> Self {
        self.separation = separation;
        self
    }
}

/// An obstacle (planet) crossing the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Cosmetic skin index
    pub variant: usize,
    pub entity: Entity,
}

/// Complete state of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub config: RoundConfig,
    pub phase: RoundPhase,
    pub player: Entity,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Seconds since the last spawn attempt
    pub spawn_timer: f32,
    /// Seconds of play, also the animation clock
    pub elapsed: f32,
    /// Speed handed to the next spawned obstacle
    pub current_speed: f32,
    /// Gravity stays off until the first impulse
    pub impulse_received: bool,
    pub end_cause: Option<EndCause>,
    next_id: u32,
}

impl RoundState {
    /// Set up a round in the `Ready` phase
    pub fn new<V: Viewport + ?Sized>(config: RoundConfig, viewport: &V) -> Self {
        let mut player = Entity::new(
            Vec2::new(PLAYER_START_X, viewport.height() / 2.0 - PLAYER_HEIGHT / 2.0),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            Animation::new(PLAYER_FRAME_COUNT, PLAYER_FRAME_DURATION),
        );
        player.set_movement_bounds(Self::player_bounds(viewport));

        log::info!(
            "Round ready: {} (interval {:.2}s, speed {:.0}, max {}, {} separation)",
            config.difficulty.as_str(),
            config.spawn_interval_seconds,
            config.obstacle_speed,
            config.max_on_screen,
            config.separation.as_str()
        );

        Self {
            config,
            phase: RoundPhase::Ready,
            player,
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            elapsed: 0.0,
            current_speed: config.obstacle_speed,
            impulse_received: false,
            end_cause: None,
            next_id: 1,
        }
    }

    /// Region the player may move in: the left part of the screen, full height
    pub fn player_bounds<V: Viewport + ?Sized>(viewport: &V) -> Rect {
        Rect::new(0.0, 0.0, viewport.width() * PLAYER_BOUNDS_FRACTION, viewport.height())
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an obstacle at `pos` moving left at the current speed
    pub fn spawn_obstacle_at(&mut self, pos: Vec2, variant: usize) -> u32 {
        let id = self.next_obstacle_id();
        let mut entity = Entity::new(
            pos,
            self.config.obstacle_size,
            Animation::new(OBSTACLE_FRAME_COUNT, OBSTACLE_FRAME_DURATION),
        );
        entity.set_velocity(Vec2::new(-self.current_speed, 0.0));
        self.obstacles.push(Obstacle {
            id,
            variant,
            entity,
        });
        id
    }

    /// Positions of active obstacles, for the placement heuristic
    pub fn obstacle_positions(&self) -> Vec<Vec2> {
        self.obstacles.iter().map(|o| o.entity.pos()).collect()
    }

    /// Move to `Over`. Returns false if the round had already ended.
    pub(crate) fn end(&mut self, cause: EndCause) -> bool {
        if self.phase == RoundPhase::Over {
            return false;
        }
        self.phase = RoundPhase::Over;
        self.end_cause = Some(cause);
        log::info!("Round over ({:?}) after {:.1}s", cause, self.elapsed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: (f32, f32) = (800.0, 480.0);

    #[test]
    fn test_new_round_is_ready_and_centred() {
        let state = RoundState::new(RoundConfig::for_difficulty(Difficulty::Medium), &SCREEN);
        assert_eq!(state.phase, RoundPhase::Ready);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.player.vel(), Vec2::ZERO);
        assert_eq!(state.player.y(), 240.0 - PLAYER_HEIGHT / 2.0);
        assert_eq!(state.current_speed, Difficulty::Medium.params().obstacle_speed);
        assert!(!state.impulse_received);
    }

    #[test]
    fn test_spawn_obstacle_moves_left() {
        let mut state = RoundState::new(RoundConfig::for_difficulty(Difficulty::Easy), &SCREEN);
        let a = state.spawn_obstacle_at(Vec2::new(820.0, 10.0), 2);
        let b = state.spawn_obstacle_at(Vec2::new(860.0, 300.0), 0);
        assert!(b > a);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].entity.vel(), Vec2::new(-120.0, 0.0));
        assert_eq!(state.obstacles[0].variant, 2);
    }

    #[test]
    fn test_end_only_once() {
        let mut state = RoundState::new(RoundConfig::for_difficulty(Difficulty::Easy), &SCREEN);
        assert!(state.end(EndCause::Floor));
        assert!(!state.end(EndCause::Collision));
        assert_eq!(state.end_cause, Some(EndCause::Floor));
    }
}
