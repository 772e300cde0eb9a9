//! Game settings and preferences
//!
//! Persisted separately from high scores (LocalStorage on web, JSON file on
//! native).

use serde::{Deserialize, Serialize};

use crate::session::ScoringRule;
use crate::sim::{Difficulty, RoundConfig, SeparationRule};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tier preselected on the menu
    pub difficulty: Difficulty,

    // === Rules ===
    /// How passed obstacles are scored
    pub scoring: ScoringRule,
    /// How spawn candidates keep apart from active obstacles
    pub separation: SeparationRule,
    /// Obstacles speed up during a round
    pub speed_ramp: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,

            scoring: ScoringRule::Flat,
            separation: SeparationRule::Euclidean,
            speed_ramp: true,
        }
    }
}

impl Settings {
    /// Round tuning for `difficulty` with these preferences applied
    pub fn round_config(&self, difficulty: Difficulty) -> RoundConfig {
        let mut config = RoundConfig::for_difficulty(difficulty).with_separation(self.separation);
        if !self.speed_ramp {
            config.speed_ramp = 0.0;
        }
        config
    }

    /// Storage key (LocalStorage on web, file stem on native)
    const STORAGE_KEY: &'static str = "alien_drift_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match crate::persistence::local_storage_get(Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if crate::persistence::local_storage_set(Self::STORAGE_KEY, self) {
            log::info!("Settings saved");
        }
    }

    /// Native settings file location, relative to the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> std::path::PathBuf {
        std::path::PathBuf::from(format!("{}.json", Self::STORAGE_KEY))
    }

    /// Load settings from a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match crate::persistence::read_json(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) {
        match crate::persistence::write_json(path, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {:#}", e),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        self.save_to(&Self::default_path())
    }
}
