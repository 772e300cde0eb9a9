//! Per-tier high score table
//!
//! Keyed by tier name ("Easy", "Medium", "Hard") so saved files stay readable
//! and survive enum reordering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::persistence::HighScoreStore;
use crate::sim::Difficulty;

/// Best score per difficulty tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    #[serde(default)]
    pub scores: BTreeMap<String, u64>,
}

impl HighScores {
    /// Storage key (LocalStorage on wasm32, file stem on native)
    pub const STORAGE_KEY: &'static str = "alien_drift_highscores";

    /// Create empty table
    pub fn new() -> Self {
        Self {
            scores: BTreeMap::new(),
        }
    }

    /// Best score for a tier (0 when never played)
    pub fn get(&self, difficulty: Difficulty) -> u64 {
        self.scores.get(difficulty.as_str()).copied().unwrap_or(0)
    }

    /// Record a score; keeps the larger of old and new.
    /// Returns true if the stored value went up.
    pub fn record(&mut self, difficulty: Difficulty, score: u64) -> bool {
        let entry = self.scores.entry(difficulty.as_str().to_string()).or_insert(0);
        if score > *entry {
            *entry = score;
            true
        } else {
            false
        }
    }

    /// Check if no tier has a score yet
    pub fn is_empty(&self) -> bool {
        self.scores.values().all(|&s| s == 0)
    }

    /// Best score across all tiers (if any)
    pub fn top_score(&self) -> Option<(Difficulty, u64)> {
        Difficulty::ALL
            .iter()
            .map(|&d| (d, self.get(d)))
            .filter(|&(_, s)| s > 0)
            .max_by_key(|&(_, s)| s)
    }
}

impl HighScoreStore for HighScores {
    fn load_high_score(&self, difficulty: Difficulty) -> u64 {
        self.get(difficulty)
    }

    fn store_high_score(&mut self, difficulty: Difficulty, value: u64) {
        self.record(difficulty, value);
    }
}
