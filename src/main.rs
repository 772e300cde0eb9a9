//! Alien Drift entry point
//!
//! Native builds run a headless round with a simple autopilot at a fixed
//! frame rate, which is handy for tuning difficulty tables and checking
//! persistence. The playable build is the web one (`web::WebGame`).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use alien_drift::Game;
    use alien_drift::input::{InputEvent, Key};
    use alien_drift::persistence::JsonFileStore;
    use alien_drift::settings::Settings;
    use alien_drift::sim::{Difficulty, GameEvent};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tier = args.next().unwrap_or_else(|| "easy".to_string());
    let Some(difficulty) = Difficulty::from_str(&tier) else {
        eprintln!("Unknown difficulty '{}'. Supported: easy, medium, hard", tier);
        std::process::exit(1);
    };
    let max_seconds: f32 = match args.next().map(|s| s.parse()) {
        None => 60.0,
        Some(Ok(secs)) => secs,
        Some(Err(_)) => {
            eprintln!("Duration must be a number of seconds");
            std::process::exit(1);
        }
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);

    log::info!("Alien Drift (native) starting...");

    const FRAME_DT: f32 = 1.0 / 60.0;
    let viewport = (800.0f32, 480.0f32);

    let settings = Settings::load();
    let store = JsonFileStore::open(JsonFileStore::default_path());
    let mut game = Game::new(store, settings, seed);
    game.start_round(difficulty, &viewport);

    let mut t = 0.0;
    while game.is_playing() && t < max_seconds {
        // Hop whenever we sink below the middle of the screen
        let sinking = game.round().is_some_and(|round| {
            round.player.y() < viewport.1 / 2.0 - 40.0 && round.player.vel().y <= 0.0
        });
        if sinking {
            game.handle_input(InputEvent::KeyDown(Key::Space));
        }

        for event in game.update(FRAME_DT, &viewport) {
            match event {
                GameEvent::NewHighScore { score, .. } => log::debug!("High score {}", score),
                GameEvent::RoundOver { cause } => log::info!("Round ended: {:?}", cause),
                _ => {}
            }
        }
        t += FRAME_DT;
    }

    let session = game.session();
    println!(
        "{}: scored {} in {:.1}s (best {})",
        difficulty.as_str(),
        session.score(),
        t,
        session.high_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web entry point lives in `alien_drift::web`
}
