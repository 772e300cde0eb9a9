//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform dependencies:
//! - Caller-supplied `dt` only, no clocks
//! - Injectable randomness only
//! - Stable iteration order (spawn order)

pub mod anim;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use anim::Animation;
pub use collision::{forgiving_overlap, has_departed, outside_play_area};
pub use difficulty::{Difficulty, DifficultyParams};
pub use entity::{Axis, Entity};
pub use rect::Rect;
pub use spawn::{RandomSource, SeparationRule, SequenceRandom, SpawnArea, find_spawn_position};
pub use state::{EndCause, GameEvent, Obstacle, RoundConfig, RoundPhase, RoundState};
pub use tick::{TickInput, TickReport, tick};
