//! Browser bindings
//!
//! JS owns the canvas, the texture atlas and the `requestAnimationFrame`
//! loop. Each frame it forwards input, calls `update` with the live canvas
//! size, then draws the flat sprite buffer.

use wasm_bindgen::prelude::*;

use crate::Game;
use crate::input::{InputEvent, Key};
use crate::persistence::LocalStorageStore;
use crate::settings::Settings;
use crate::sim::{Difficulty, GameEvent};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Alien Drift starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore>,
    width: f32,
    height: f32,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let seed = rand::random::<u64>();
        WebGame {
            game: Game::new(LocalStorageStore::open(), Settings::load(), seed),
            width,
            height,
        }
    }

    /// Canvas resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Menu / game-over tier selection. Returns false for unknown names or
    /// while a round is still in progress.
    pub fn start(&mut self, difficulty: &str) -> bool {
        let Some(difficulty) = Difficulty::from_str(difficulty) else {
            return false;
        };
        if self
            .game
            .select_tier(difficulty, &(self.width, self.height))
            .is_none()
        {
            return false;
        }
        self.game.settings().save();
        true
    }

    /// `KeyboardEvent.code` of a key press
    pub fn key_down(&mut self, code: &str) {
        self.game.handle_input(InputEvent::KeyDown(Key::from_code(code)));
    }

    pub fn touch(&mut self) {
        self.game.handle_input(InputEvent::Touch);
    }

    /// Advance one frame. Returns the names of the events that fired, for
    /// sound effects and animation swaps.
    pub fn update(&mut self, dt: f32) -> Vec<String> {
        let dt = dt.min(0.1);
        self.game
            .update(dt, &(self.width, self.height))
            .into_iter()
            .map(|e| {
                match e {
                    GameEvent::RoundStarted { .. } => "round_started",
                    GameEvent::Jumped => "jumped",
                    GameEvent::ObstacleSpawned { .. } => "obstacle_spawned",
                    GameEvent::ObstaclesPassed { .. } => "obstacles_passed",
                    GameEvent::NewHighScore { .. } => "new_high_score",
                    GameEvent::RoundOver { .. } => "round_over",
                }
                .to_string()
            })
            .collect()
    }

    /// Sprites as `[kind, variant, x, y, w, h, frame]` records; kind 0 is the
    /// player, 1 an obstacle. y is measured from the bottom of the canvas.
    pub fn sprites(&self) -> Vec<f32> {
        use crate::game::SpriteKind;

        let mut out = Vec::new();
        for s in self.game.sprites() {
            let (kind, variant) = match s.kind {
                SpriteKind::Player => (0.0, 0.0),
                SpriteKind::Obstacle { variant, .. } => (1.0, variant as f32),
            };
            out.extend_from_slice(&[
                kind,
                variant,
                s.pos.x,
                s.pos.y,
                s.size.x,
                s.size.y,
                s.frame as f32,
            ]);
        }
        out
    }

    pub fn score(&self) -> f64 {
        self.game.session().score() as f64
    }

    pub fn high_score(&self) -> f64 {
        self.game.session().high_score() as f64
    }

    pub fn difficulty(&self) -> String {
        self.game.session().difficulty().as_str().to_string()
    }

    pub fn is_playing(&self) -> bool {
        self.game.is_playing()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }
}
