//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one tick.

use super::collision::{detonate_bomb, resolve_collisions};
use super::difficulty::step_difficulty;
use super::enemy::update_enemies;
use super::player::update_player;
use super::state::{GameState, RunPhase};
use crate::consts::SURVIVAL_SCORE_INTERVAL;

/// Input for a single tick
///
/// Movement and fire are held intents; the remaining flags are one-shot
/// actions that must be cleared by the caller once the tick has consumed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Autofire while held
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Help overlay toggle
    pub help: bool,
    pub bomb: bool,
    pub restart: bool,
}

/// Advance the game state by one fixed timestep of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.restart();
        log::info!("Run restarted (hi-score {})", state.hiscore);
        return;
    }

    if input.help {
        state.show_help = !state.show_help;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            RunPhase::Running => {
                state.phase = RunPhase::Paused;
                log::info!("Paused at tick {}", state.frame);
            }
            RunPhase::Paused => {
                state.phase = RunPhase::Running;
                log::info!("Resumed at tick {}", state.frame);
            }
            RunPhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    if state.phase != RunPhase::Running {
        return;
    }

    if input.bomb {
        detonate_bomb(state);
    }

    state.frame += 1;
    state.elapsed_secs += f64::from(dt);

    update_player(state, input);
    state.bullets = std::mem::take(&mut state.bullets)
        .into_iter()
        .filter_map(|b| b.advance())
        .collect();
    update_enemies(state);
    state.enemy_bullets = std::mem::take(&mut state.enemy_bullets)
        .into_iter()
        .filter_map(|b| b.advance())
        .collect();
    state.powerups = std::mem::take(&mut state.powerups)
        .into_iter()
        .filter_map(|p| p.advance())
        .collect();
    state.particles = std::mem::take(&mut state.particles)
        .into_iter()
        .filter_map(|p| p.advance())
        .collect();

    resolve_collisions(state);
    if state.phase == RunPhase::GameOver {
        return;
    }

    // Survival trickle
    if state.frame % SURVIVAL_SCORE_INTERVAL == 0 {
        state.score += 1;
    }

    step_difficulty(state);
}
