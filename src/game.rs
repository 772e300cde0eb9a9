//! Screen state machine
//!
//! `Menu -> Playing -> GameOver`, and from `GameOver` back into `Playing`
//! (same tier on any key, or a newly chosen tier). The presentation layer
//! draws whatever [`Game::sprites`] returns and reacts to the returned
//! [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Viewport;
use crate::consts::GAME_OVER_INPUT_DELAY;
use crate::input::{InputEvent, InputState};
use crate::persistence::HighScoreStore;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{Difficulty, GameEvent, RandomSource, RoundState, tick};

/// Which screen is showing
#[derive(Debug, Clone)]
pub enum Screen {
    /// Pick a difficulty
    Menu,
    /// A round in progress
    Playing(Box<RoundState>),
    /// Final state of the last round, plus time spent on this screen
    GameOver { round: Box<RoundState>, shown_for: f32 },
}

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Obstacle { id: u32, variant: usize },
}

/// Draw data for one live entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub frame: usize,
}

/// The whole game: screens, session and input
pub struct Game<S: HighScoreStore, R: RandomSource = Pcg32> {
    screen: Screen,
    session: Session<S>,
    settings: Settings,
    rng: R,
    input: InputState,
}

impl<S: HighScoreStore> Game<S, Pcg32> {
    /// Create a game on the menu screen with a seeded RNG
    pub fn new(store: S, settings: Settings, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::with_rng(store, settings, Pcg32::seed_from_u64(seed))
    }
}

impl<S: HighScoreStore, R: RandomSource> Game<S, R> {
    pub fn with_rng(store: S, settings: Settings, rng: R) -> Self {
        let session = Session::new(store, settings.difficulty, settings.scoring);
        Self {
            screen: Screen::Menu,
            session,
            settings,
            rng,
            input: InputState::default(),
        }
    }

    /// Start a fresh round on `difficulty` (menu or game-over selection)
    pub fn start_round<V: Viewport + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        viewport: &V,
    ) -> GameEvent {
        self.settings.difficulty = difficulty;
        self.session.set_scoring(self.settings.scoring);
        self.session.set_difficulty(difficulty);
        self.session.reset();
        self.session.set_round_active(true);
        self.input.clear();

        let config = self.settings.round_config(difficulty);
        log::info!(
            "Starting {} round with {} scoring",
            difficulty.as_str(),
            self.settings.scoring.as_str()
        );
        self.screen = Screen::Playing(Box::new(RoundState::new(config, viewport)));
        GameEvent::RoundStarted { difficulty }
    }

    /// Tier picked from the menu or game-over screen. A round in progress
    /// must end first, so this returns `None` while playing.
    pub fn select_tier<V: Viewport + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        viewport: &V,
    ) -> Option<GameEvent> {
        if self.is_playing() {
            log::debug!("Ignoring tier change to {} mid-round", difficulty.as_str());
            return None;
        }
        Some(self.start_round(difficulty, viewport))
    }

    /// Leave whatever is showing and go back to the menu
    pub fn return_to_menu(&mut self) {
        self.session.set_round_active(false);
        self.input.clear();
        self.screen = Screen::Menu;
    }

    /// Queue a platform input event for the next frame
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.handle(event);
    }

    /// Advance one frame
    pub fn update<V: Viewport + ?Sized>(&mut self, dt: f32, viewport: &V) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match std::mem::replace(&mut self.screen, Screen::Menu) {
            Screen::Menu => {
                // Tier selection comes through start_round
                self.input.clear();
            }
            Screen::Playing(mut round) => {
                let input = self.input.take_tick_input();
                let report = tick(&mut round, &input, dt, viewport, &mut self.rng);
                events.extend(report.events);

                if report.passed > 0 && self.session.add_passed(report.passed, round.current_speed)
                {
                    events.push(GameEvent::NewHighScore {
                        difficulty: self.session.difficulty(),
                        score: self.session.high_score(),
                    });
                }

                if report.round_over {
                    self.session.set_round_active(false);
                    log::info!(
                        "Game over: {} points on {} (best {})",
                        self.session.score(),
                        self.session.difficulty().as_str(),
                        self.session.high_score()
                    );
                    self.screen = Screen::GameOver {
                        round,
                        shown_for: 0.0,
                    };
                } else {
                    self.screen = Screen::Playing(round);
                }
            }
            Screen::GameOver { round, shown_for } => {
                let shown_for = shown_for + dt;
                let pressed = self.input.take_any_key();
                if pressed && shown_for > GAME_OVER_INPUT_DELAY {
                    events.push(self.start_round(round.config.difficulty, viewport));
                } else {
                    self.screen = Screen::GameOver { round, shown_for };
                }
            }
        }

        events
    }

    /// The round being played or just finished
    pub fn round(&self) -> Option<&RoundState> {
        match &self.screen {
            Screen::Menu => None,
            Screen::Playing(round) | Screen::GameOver { round, .. } => Some(&**round),
        }
    }

    /// Draw list: player first, then obstacles in spawn order
    pub fn sprites(&self) -> Vec<Sprite> {
        let Some(round) = self.round() else {
            return Vec::new();
        };
        let t = round.elapsed;

        let mut sprites = Vec::with_capacity(round.obstacles.len() + 1);
        sprites.push(Sprite {
            kind: SpriteKind::Player,
            pos: round.player.pos(),
            size: round.player.size(),
            frame: round.player.current_frame(t),
        });
        sprites.extend(round.obstacles.iter().map(|o| Sprite {
            kind: SpriteKind::Obstacle {
                id: o.id,
                variant: o.variant,
            },
            pos: o.entity.pos(),
            size: o.entity.size(),
            frame: o.entity.current_frame(t),
        }));
        sprites
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing(_))
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.screen, Screen::GameOver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HighScores;
    use crate::input::Key;
    use crate::sim::{EndCause, SequenceRandom};

    const SCREEN: (f32, f32) = (800.0, 480.0);

    fn game() -> Game<HighScores, SequenceRandom> {
        Game::with_rng(
            HighScores::new(),
            Settings::default(),
            SequenceRandom::new(vec![0.5, 0.05, 0.0]),
        )
    }

    #[test]
    fn test_menu_ignores_keys() {
        let mut g = game();
        g.handle_input(InputEvent::KeyDown(Key::Space));
        assert!(g.update(0.016, &SCREEN).is_empty());
        assert!(matches!(g.screen(), Screen::Menu));
        assert!(g.sprites().is_empty());
    }

    #[test]
    fn test_quit_moves_to_game_over() {
        let mut g = game();
        let started = g.start_round(Difficulty::Medium, &SCREEN);
        assert_eq!(
            started,
            GameEvent::RoundStarted {
                difficulty: Difficulty::Medium
            }
        );
        assert!(g.session().round_active());

        g.handle_input(InputEvent::KeyDown(Key::Escape));
        let events = g.update(0.016, &SCREEN);
        assert_eq!(
            events,
            vec![GameEvent::RoundOver {
                cause: EndCause::Quit
            }]
        );
        assert!(g.is_game_over());
        assert!(!g.session().round_active());
    }

    #[test]
    fn test_game_over_waits_before_restart() {
        let mut g = game();
        g.start_round(Difficulty::Hard, &SCREEN);
        g.handle_input(InputEvent::KeyDown(Key::Escape));
        g.update(0.016, &SCREEN);
        assert!(g.is_game_over());

        // Mashing right after the crash does nothing
        g.handle_input(InputEvent::KeyDown(Key::Space));
        assert!(g.update(0.5, &SCREEN).is_empty());
        assert!(g.is_game_over());

        // Time passes without input
        g.update(0.6, &SCREEN);
        assert!(g.is_game_over());

        g.handle_input(InputEvent::KeyDown(Key::Other));
        let events = g.update(0.016, &SCREEN);
        assert_eq!(
            events,
            vec![GameEvent::RoundStarted {
                difficulty: Difficulty::Hard
            }]
        );
        assert!(g.is_playing());
        assert_eq!(g.session().score(), 0);
    }

    #[test]
    fn test_passed_obstacle_scores_and_sets_high() {
        let mut g = game();
        g.start_round(Difficulty::Easy, &SCREEN);
        if let Screen::Playing(round) = &mut g.screen {
            round.spawn_obstacle_at(Vec2::new(-65.0, 300.0), 1);
        }
        let events = g.update(0.016, &SCREEN);
        assert!(events.contains(&GameEvent::ObstaclesPassed { count: 1 }));
        assert!(events.contains(&GameEvent::NewHighScore {
            difficulty: Difficulty::Easy,
            score: 1
        }));
        assert_eq!(g.session().score(), 1);
        assert_eq!(g.session().store().get(Difficulty::Easy), 1);
    }

    #[test]
    fn test_sprites_list_player_then_obstacles() {
        let mut g = game();
        g.start_round(Difficulty::Easy, &SCREEN);
        if let Screen::Playing(round) = &mut g.screen {
            round.spawn_obstacle_at(Vec2::new(700.0, 300.0), 4);
        }
        let sprites = g.sprites();
        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites[0].kind, SpriteKind::Player);
        assert_eq!(sprites[1].kind, SpriteKind::Obstacle { id: 1, variant: 4 });
        assert_eq!(sprites[1].size, Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_tier_change_waits_for_round_end() {
        let mut g = game();
        assert!(g.select_tier(Difficulty::Easy, &SCREEN).is_some());
        assert!(g.select_tier(Difficulty::Hard, &SCREEN).is_none());
        assert_eq!(g.session().difficulty(), Difficulty::Easy);
        assert!(g.is_playing());

        g.handle_input(InputEvent::KeyDown(Key::Escape));
        g.update(0.016, &SCREEN);
        assert_eq!(
            g.select_tier(Difficulty::Hard, &SCREEN),
            Some(GameEvent::RoundStarted {
                difficulty: Difficulty::Hard
            })
        );
        assert_eq!(g.round().map(|r| r.config.difficulty), Some(Difficulty::Hard));
    }

    #[test]
    fn test_return_to_menu() {
        let mut g = game();
        g.start_round(Difficulty::Easy, &SCREEN);
        g.return_to_menu();
        assert!(matches!(g.screen(), Screen::Menu));
        assert!(g.round().is_none());
    }
}
