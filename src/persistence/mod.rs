//! High-score persistence
//!
//! The simulation only sees the [`HighScoreStore`] contract. Backends:
//! - [`HighScores`](crate::HighScores): in memory (tests, headless runs)
//! - `JsonFileStore`: JSON file on native, written via tmp file + rename
//! - `LocalStorageStore`: browser LocalStorage on wasm32
//!
//! Storage failures never reach gameplay: they are logged and the store
//! falls back to what it has in memory.

use crate::sim::Difficulty;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::{JsonFileStore, read_json, write_json};
#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorageStore, local_storage_get, local_storage_set};

/// Read/write contract for the best score of each difficulty tier
pub trait HighScoreStore {
    /// Best score recorded for `difficulty`, 0 if none
    fn load_high_score(&self, difficulty: Difficulty) -> u64;

    /// Durably record a new best score. Called synchronously on every new high.
    fn store_high_score(&mut self, difficulty: Difficulty, value: u64);
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load_high_score(&self, difficulty: Difficulty) -> u64 {
        (**self).load_high_score(difficulty)
    }

    fn store_high_score(&mut self, difficulty: Difficulty, value: u64) {
        (**self).store_high_score(difficulty, value)
    }
}
