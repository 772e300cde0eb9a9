//! Obstacle placement
//!
//! Candidates are drawn from a band just past the right edge of the screen
//! and rejected when they crowd an obstacle that is already active. After a
//! bounded number of tries the spawn is simply skipped.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MIN_SEPARATION, PLACEMENT_ATTEMPTS, SPAWN_BAND_WIDTH};

/// Source of uniform randomness for spawning
///
/// Production uses a seeded [`Pcg32`]; tests script exact sequences with
/// [`SequenceRandom`].
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[lo, hi)`
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform index in `0..len` (`len` must be non-zero)
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_unit() * len as f32) as usize).min(len - 1)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of unit samples, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
        Self { values, cursor: 0 }
    }

    /// Number of samples handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

/// How a spawn candidate is judged against an existing obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeparationRule {
    /// Reject only if the candidate is close on both axes at once
    PerAxis,
    /// Reject if the corners are closer than the threshold in a straight line
    #[default]
    Euclidean,
}

impl SeparationRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeparationRule::PerAxis => "PerAxis",
            SeparationRule::Euclidean => "Euclidean",
        }
    }

    /// Whether `candidate` keeps enough distance from `existing`
    pub fn accepts(&self, candidate: Vec2, existing: Vec2, min_separation: f32) -> bool {
        match self {
            SeparationRule::PerAxis => {
                let d = (candidate - existing).abs();
                d.x > min_separation || d.y > min_separation
            }
            SeparationRule::Euclidean => candidate.distance(existing) >= min_separation,
        }
    }
}

/// Everything the placement heuristic needs to know about the screen
#[derive(Debug, Clone, Copy)]
pub struct SpawnArea {
    pub screen: Vec2,
    pub obstacle_size: Vec2,
}

impl SpawnArea {
    /// Horizontal range of the off-screen spawn band
    pub fn x_range(&self) -> (f32, f32) {
        (self.screen.x, self.screen.x + SPAWN_BAND_WIDTH)
    }

    /// Vertical range keeping the obstacle fully on screen
    pub fn y_range(&self) -> (f32, f32) {
        (0.0, (self.screen.y - self.obstacle_size.y).max(0.0))
    }
}

/// Try up to [`PLACEMENT_ATTEMPTS`] candidates; `None` means skip this spawn
pub fn find_spawn_position<R: RandomSource + ?Sized>(
    area: &SpawnArea,
    existing: &[Vec2],
    rule: SeparationRule,
    rng: &mut R,
) -> Option<Vec2> {
    let (x_lo, x_hi) = area.x_range();
    let (y_lo, y_hi) = area.y_range();

    for attempt in 0..PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(rng.range(x_lo, x_hi), rng.range(y_lo, y_hi));
        if existing
            .iter()
            .all(|&pos| rule.accepts(candidate, pos, MIN_SEPARATION))
        {
            log::trace!("placement accepted on attempt {}", attempt + 1);
            return Some(candidate);
        }
    }

    None
}
