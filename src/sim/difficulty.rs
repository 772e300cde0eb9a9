//! Difficulty tiers and their tuning table

use serde::{Deserialize, Serialize};

/// Difficulty tier, chosen before a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Read-only tuning for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Seconds between spawn attempts
    pub spawn_interval_seconds: f32,
    /// Leftward speed of newly spawned obstacles at round start (pixels/s)
    pub obstacle_speed: f32,
    /// Cap on concurrently active obstacles
    pub max_on_screen: usize,
    /// Spawn speed gained per second of play (pixels/s²)
    pub speed_ramp: f32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn params(&self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                spawn_interval_seconds: 2.0,
                obstacle_speed: 120.0,
                max_on_screen: 4,
                speed_ramp: 1.0,
            },
            Difficulty::Medium => DifficultyParams {
                spawn_interval_seconds: 1.5,
                obstacle_speed: 170.0,
                max_on_screen: 6,
                speed_ramp: 1.5,
            },
            Difficulty::Hard => DifficultyParams {
                spawn_interval_seconds: 1.0,
                obstacle_speed: 230.0,
                max_on_screen: 8,
                speed_ramp: 2.5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for tier in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(Difficulty::from_str("MED"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_harder_tiers_are_harder() {
        let easy = Difficulty::Easy.params();
        let hard = Difficulty::Hard.params();
        assert!(hard.spawn_interval_seconds < easy.spawn_interval_seconds);
        assert!(hard.obstacle_speed > easy.obstacle_speed);
        assert!(hard.max_on_screen > easy.max_on_screen);
    }
}
