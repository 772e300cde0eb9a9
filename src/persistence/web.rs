//! Browser LocalStorage backend (wasm32 only)

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::HighScoreStore;
use crate::highscores::HighScores;
use crate::sim::Difficulty;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Load a JSON value from LocalStorage
pub fn local_storage_get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring unreadable '{}': {}", key, e);
            None
        }
    }
}

/// Save a JSON value to LocalStorage. Returns false if storage is unavailable.
pub fn local_storage_set<T: Serialize>(key: &str, value: &T) -> bool {
    let Some(storage) = storage() else {
        return false;
    };
    match serde_json::to_string(value) {
        Ok(json) => storage.set_item(key, &json).is_ok(),
        Err(_) => false,
    }
}

/// High scores mirrored to LocalStorage
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore {
    scores: HighScores,
}

impl LocalStorageStore {
    pub fn open() -> Self {
        let scores = match local_storage_get::<HighScores>(HighScores::STORAGE_KEY) {
            Some(scores) => {
                log::info!("Loaded high scores from LocalStorage");
                scores
            }
            None => {
                log::info!("No high scores found, starting fresh");
                HighScores::new()
            }
        };
        Self { scores }
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self, difficulty: Difficulty) -> u64 {
        self.scores.get(difficulty)
    }

    fn store_high_score(&mut self, difficulty: Difficulty, value: u64) {
        if self.scores.record(difficulty, value)
            && !local_storage_set(HighScores::STORAGE_KEY, &self.scores)
        {
            log::warn!("LocalStorage unavailable, high score kept in memory only");
        }
    }
}
