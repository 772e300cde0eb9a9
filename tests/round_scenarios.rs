//! End-to-end round scenarios driven through the public API

use alien_drift::HighScores;
use alien_drift::session::{ScoringRule, Session};
use alien_drift::sim::{
    Difficulty, EndCause, RoundConfig, RoundPhase, RoundState, SequenceRandom, TickInput, tick,
};
use glam::Vec2;

const SCREEN: (f32, f32) = (800.0, 480.0);

/// Every spawn lands mid-band near the floor, well clear of the hovering player
fn low_lane() -> SequenceRandom {
    SequenceRandom::new(vec![0.5, 0.05, 0.0])
}

fn config(max_on_screen: usize, spawn_interval_seconds: f32) -> RoundConfig {
    RoundConfig {
        max_on_screen,
        spawn_interval_seconds,
        speed_ramp: 0.0,
        ..RoundConfig::for_difficulty(Difficulty::Easy)
    }
}

#[test]
fn capacity_reached_after_six_seconds() {
    let mut state = RoundState::new(config(3, 2.0), &SCREEN);
    let mut rng = low_lane();

    for _ in 0..60 {
        let report = tick(&mut state, &TickInput::default(), 0.1, &SCREEN, &mut rng);
        assert_eq!(report.passed, 0);
    }

    assert_eq!(state.phase, RoundPhase::Running);
    assert_eq!(state.obstacles.len(), 3);

    // A further interval at capacity adds nothing
    for _ in 0..20 {
        tick(&mut state, &TickInput::default(), 0.1, &SCREEN, &mut rng);
    }
    assert_eq!(state.obstacles.len(), 3);
}

#[test]
fn active_count_is_min_of_intervals_and_capacity() {
    for max_on_screen in 1..=4 {
        let mut state = RoundState::new(config(max_on_screen, 1.0), &SCREEN);
        let mut rng = low_lane();
        for k in 1..=5usize {
            for _ in 0..10 {
                tick(&mut state, &TickInput::default(), 0.1, &SCREEN, &mut rng);
            }
            assert_eq!(
                state.obstacles.len(),
                k.min(max_on_screen),
                "after {} intervals with cap {}",
                k,
                max_on_screen
            );
        }
    }
}

#[test]
fn floor_ends_round_whatever_the_velocity() {
    for vy in [-500.0, 0.0, 500.0] {
        let mut state = RoundState::new(config(3, 2.0), &SCREEN);
        state.player.set_position(100.0, 0.0);
        state.player.set_velocity(Vec2::new(0.0, vy));

        let report = tick(&mut state, &TickInput::default(), 1.0 / 60.0, &SCREEN, &mut low_lane());

        assert!(report.round_over, "vy = {}", vy);
        assert_eq!(state.phase, RoundPhase::Over);
        assert_eq!(state.end_cause, Some(EndCause::Floor));
    }
}

#[test]
fn departed_obstacle_scores_configured_credit() {
    for (rule, expected) in [(ScoringRule::Flat, 1), (ScoringRule::SpeedScaled, 120)] {
        let mut session = Session::new(HighScores::new(), Difficulty::Easy, rule);
        let mut state = RoundState::new(config(3, 2.0), &SCREEN);
        let width = state.config.obstacle_size.x;
        state.spawn_obstacle_at(Vec2::new(-width - 1.0, 300.0), 0);

        let report = tick(&mut state, &TickInput::default(), 1.0 / 60.0, &SCREEN, &mut low_lane());
        assert_eq!(report.passed, 1);
        assert!(state.obstacles.is_empty());

        let before = session.score();
        session.add_passed(report.passed, state.current_speed);
        assert_eq!(session.score() - before, expected);
    }
}

#[test]
fn score_never_drops_during_a_round() {
    let mut session = Session::new(HighScores::new(), Difficulty::Hard, ScoringRule::Flat);
    let mut state = RoundState::new(RoundConfig::for_difficulty(Difficulty::Hard), &SCREEN);
    let mut rng = SequenceRandom::new(vec![0.1, 0.9, 0.3, 0.7, 0.02, 0.5]);
    let jump = TickInput {
        impulse: true,
        ..Default::default()
    };

    let mut frame = 0;
    while !state.is_over() && frame < 3000 {
        // Hop every half second to stay airborne
        let input = if frame % 30 == 0 { jump } else { TickInput::default() };
        let before = session.score();
        let report = tick(&mut state, &input, 1.0 / 60.0, &SCREEN, &mut rng);
        session.add_passed(report.passed, state.current_speed);
        assert!(session.score() >= before);
        assert!(session.high_score() >= session.score());
        frame += 1;
    }
}

#[test]
fn round_over_is_signalled_once() {
    let mut state = RoundState::new(config(3, 2.0), &SCREEN);
    state.player.set_position(100.0, 0.0);

    let mut signals = 0;
    for _ in 0..10 {
        let report = tick(&mut state, &TickInput::default(), 0.1, &SCREEN, &mut low_lane());
        if report.round_over {
            signals += 1;
        }
    }
    assert_eq!(signals, 1);
}
