//! Per-frame simulation step
//!
//! Advances a round by one frame of `dt` seconds. The host render loop calls
//! this once per frame; nothing here measures time on its own.

use glam::Vec2;

use super::collision::{has_departed, outside_play_area};
use super::spawn::{RandomSource, SpawnArea, find_spawn_position};
use super::state::{EndCause, GameEvent, RoundPhase, RoundState};
use crate::Viewport;
use crate::consts::*;

/// Input edges for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (Space/Up/tap)
    pub impulse: bool,
    /// Give up the round (Escape)
    pub quit: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Obstacles that scrolled off the left edge this frame
    pub passed: u32,
    /// True only on the frame the round ended
    pub round_over: bool,
    pub events: Vec<GameEvent>,
}

/// Advance the round by one frame
pub fn tick<V, R>(
    state: &mut RoundState,
    input: &TickInput,
    dt: f32,
    viewport: &V,
    rng: &mut R,
) -> TickReport
where
    V: Viewport + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut report = TickReport::default();

    if state.phase == RoundPhase::Ready {
        log::debug!("Round running");
        state.phase = RoundPhase::Running;
    }
    if state.phase != RoundPhase::Running {
        return report;
    }

    if input.quit {
        finish(state, EndCause::Quit, &mut report);
        return report;
    }

    let screen = viewport.size();

    // Player physics
    if input.impulse {
        state.player.set_velocity(Vec2::new(state.player.vel().x, BOUNCE_VELOCITY));
        state.impulse_received = true;
        report.events.push(GameEvent::Jumped);
    }
    if state.impulse_received {
        let vel = state.player.vel();
        state.player.set_velocity(Vec2::new(vel.x, vel.y + GRAVITY * dt));
    }

    let player_before = state.player.rect();
    state.player.set_movement_bounds(RoundState::player_bounds(viewport));
    state.player.update(dt);

    state.elapsed += dt;
    state.current_speed += state.config.speed_ramp * dt;

    // Spawning
    state.spawn_timer += dt;
    if state.spawn_timer + SPAWN_TIMER_EPSILON >= state.config.spawn_interval_seconds
        && state.obstacles.len() < state.config.max_on_screen
    {
        state.spawn_timer = 0.0;
        try_spawn(state, screen, rng, &mut report);
    }

    // Obstacles
    for obstacle in &mut state.obstacles {
        obstacle.entity.update(dt);
    }
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !has_departed(&o.entity.rect()));
    report.passed = (before - state.obstacles.len()) as u32;
    if report.passed > 0 {
        report.events.push(GameEvent::ObstaclesPassed {
            count: report.passed,
        });
    }

    // Terminal checks run on post-move geometry
    if state
        .obstacles
        .iter()
        .any(|o| state.player.overlaps(&o.entity))
    {
        finish(state, EndCause::Collision, &mut report);
        return report;
    }

    let player_after = state.player.rect();
    if outside_play_area(&player_before, screen.y) || outside_play_area(&player_after, screen.y) {
        let cause = if player_after.y() <= 0.0 || player_before.y() <= 0.0 {
            EndCause::Floor
        } else {
            EndCause::Ceiling
        };
        finish(state, cause, &mut report);
    }

    report
}

fn try_spawn<R: RandomSource + ?Sized>(
    state: &mut RoundState,
    screen: Vec2,
    rng: &mut R,
    report: &mut TickReport,
) {
    let area = SpawnArea {
        screen,
        obstacle_size: state.config.obstacle_size,
    };
    let existing = state.obstacle_positions();

    match find_spawn_position(&area, &existing, state.config.separation, rng) {
        Some(pos) => {
            let variant = rng.index(state.config.obstacle_variants.max(1));
            let id = state.spawn_obstacle_at(pos, variant);
            log::debug!(
                "Spawned obstacle {} at ({:.0}, {:.0}) speed {:.1}",
                id,
                pos.x,
                pos.y,
                state.current_speed
            );
            report.events.push(GameEvent::ObstacleSpawned { id, variant });
        }
        None => {
            log::debug!(
                "No room for a new obstacle ({} active), skipping",
                state.obstacles.len()
            );
        }
    }
}

fn finish(state: &mut RoundState, cause: EndCause, report: &mut TickReport) {
    if state.end(cause) {
        report.round_over = true;
        report.events.push(GameEvent::RoundOver { cause });
    }
}
