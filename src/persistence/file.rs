//! JSON file storage for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::HighScoreStore;
use crate::highscores::HighScores;
use crate::sim::Difficulty;

/// Read a JSON document. `Ok(None)` when the file does not exist yet.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    let value = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(value))
}

/// Write a JSON document via a tmp file and rename, so a crash mid-write
/// leaves the previous file intact.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// High scores kept in memory and mirrored to a JSON file on every new high
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    scores: HighScores,
}

impl JsonFileStore {
    /// Default location, relative to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(format!("{}.json", HighScores::STORAGE_KEY))
    }

    /// Open the store, loading whatever is on disk. A missing or corrupt file
    /// starts a fresh table.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let scores = match read_json::<HighScores>(&path) {
            Ok(Some(scores)) => {
                log::info!("Loaded high scores from {}", path.display());
                scores
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                HighScores::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high scores: {:#}", e);
                HighScores::new()
            }
        };
        Self { path, scores }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self, difficulty: Difficulty) -> u64 {
        self.scores.get(difficulty)
    }

    fn store_high_score(&mut self, difficulty: Difficulty, value: u64) {
        if !self.scores.record(difficulty, value) {
            return;
        }
        match write_json(&self.path, &self.scores) {
            Ok(()) => log::debug!("High score saved ({} = {})", difficulty.as_str(), value),
            Err(e) => log::warn!("Could not save high score: {:#}", e),
        }
    }
}
