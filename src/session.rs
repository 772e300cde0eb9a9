//! Score and high-score bookkeeping
//!
//! The session outlives rounds: `reset()` clears the current score at round
//! start, while the high score only ever goes up.

use serde::{Deserialize, Serialize};

use crate::persistence::HighScoreStore;
use crate::sim::Difficulty;

/// Credit awarded per obstacle that scrolled past
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringRule {
    /// One point per obstacle
    #[default]
    Flat,
    /// `floor(count * speed)`: faster obstacles are worth more
    SpeedScaled,
}

impl ScoringRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringRule::Flat => "Flat",
            ScoringRule::SpeedScaled => "SpeedScaled",
        }
    }

    /// Points for `count` obstacles passed at `speed` pixels/s
    pub fn credit(&self, count: u32, speed: f32) -> u64 {
        match self {
            ScoringRule::Flat => u64::from(count),
            // Float-to-int `as` saturates: negative/NaN -> 0, huge -> u64::MAX
            ScoringRule::SpeedScaled => (count as f64 * speed as f64).floor() as u64,
        }
    }
}

/// Current/high score for the active tier, backed by a store
#[derive(Debug)]
pub struct Session<S: HighScoreStore> {
    store: S,
    difficulty: Difficulty,
    scoring: ScoringRule,
    score: u64,
    high_score: u64,
    round_active: bool,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(store: S, difficulty: Difficulty, scoring: ScoringRule) -> Self {
        let high_score = store.load_high_score(difficulty);
        Self {
            store,
            difficulty,
            scoring,
            score: 0,
            high_score,
            round_active: false,
        }
    }

    /// Credit passed obstacles. Returns true if this set a new high score.
    pub fn add_passed(&mut self, count: u32, speed: f32) -> bool {
        let credit = self.scoring.credit(count, speed);
        self.score = self.score.saturating_add(credit);

        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.store_high_score(self.difficulty, self.high_score);
            log::info!(
                "New high score on {}: {}",
                self.difficulty.as_str(),
                self.high_score
            );
            return true;
        }
        false
    }

    /// Zero the current score for a new round (high score untouched)
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Switch tier and pick up that tier's stored high score
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.high_score = self.store.load_high_score(difficulty);
    }

    pub fn set_scoring(&mut self, scoring: ScoringRule) {
        self.scoring = scoring;
    }

    pub fn set_round_active(&mut self, active: bool) {
        self.round_active = active;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scoring(&self) -> ScoringRule {
        self.scoring
    }

    pub fn round_active(&self) -> bool {
        self.round_active
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
